use anyhow::Context;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
  SupportNames, generate_docs, render_file,
  types::{ModelScope, non_null_tokens, type_tokens},
};
use crate::generator::{
  ast::{ClassDefinition, OperationBinding, ParameterBinding, ResponseType},
  naming::{
    constants::{METHOD_CONSTANT, URI_CONSTANT},
    identifiers::{to_method_name, to_rust_field_name, to_rust_type_name},
  },
};

/// Renders a request class: fields for every bound parameter, a constructor,
/// setters and the request trait implementation.
pub(crate) struct RequestGenerator<'a> {
  names: &'a SupportNames,
}

impl<'a> RequestGenerator<'a> {
  pub(crate) fn new(names: &'a SupportNames) -> Self {
    Self { names }
  }

  pub(crate) fn generate(&self, class: &ClassDefinition) -> anyhow::Result<String> {
    let binding = class
      .binding()
      .with_context(|| format!("request class {} has no operation binding", class.name))?;

    let name = format_ident!("{}", to_rust_type_name(&class.name));
    let mut comment = class.comment.clone();
    comment.push(format!("`{} {}`", binding.http_method.as_upper(), binding.path_template));
    let docs = generate_docs(&comment);
    let fields = Self::fields(binding);
    let constructor = Self::constructor(binding);
    let setters = Self::setters(binding);
    let request_impl = self.request_impl(class, binding);

    render_file(&quote! {
      #docs
      #[derive(Debug, Clone, Default, PartialEq)]
      pub struct #name {
        #(#fields)*
      }

      impl #name {
        #constructor
        #setters
      }

      #request_impl
    })
  }

  fn fields(binding: &OperationBinding) -> Vec<TokenStream> {
    let params = binding.path_params.iter().chain(&binding.query_params).map(|param| {
      let ident = field_ident(&param.field);
      let ty = param_type(param);
      let docs = param
        .description
        .as_deref()
        .map(|text| generate_docs(&text.lines().map(str::to_string).collect::<Vec<_>>()))
        .unwrap_or_default();
      quote! {
        #docs
        pub #ident: #ty,
      }
    });

    let body = binding.body_param.iter().map(|body| {
      let ident = field_ident(&body.name);
      let model = ModelScope::Requests.path(&body.model);
      quote! { pub #ident: Option<#model>, }
    });

    params.chain(body).collect()
  }

  fn constructor(binding: &OperationBinding) -> TokenStream {
    let params = binding.constructor_params();
    let idents: Vec<_> = params.iter().map(|param| field_ident(&param.binding.field)).collect();
    let types: Vec<_> = params.iter().map(|param| param_type(param.binding)).collect();

    quote! {
      pub fn new(#(#idents: #types),*) -> Self {
        Self {
          #(#idents,)*
          ..Default::default()
        }
      }
    }
  }

  fn setters(binding: &OperationBinding) -> TokenStream {
    let query = binding.query_setters().into_iter().map(|setter| {
      let method = format_ident!("{}", to_method_name("set", &setter.stem));
      let field = field_ident(&setter.binding.field);
      let ty = non_null_tokens(&setter.binding.ty, ModelScope::Requests);
      quote! {
        pub fn #method(&mut self, value: #ty) -> &mut Self {
          self.#field = Some(value);
          self
        }
      }
    });

    let body = binding.body_param.iter().map(|body| {
      let field = field_ident(&body.name);
      let model = ModelScope::Requests.path(&body.model);
      quote! {
        pub fn set_body(&mut self, value: #model) -> &mut Self {
          self.#field = Some(value);
          self
        }
      }
    });

    let setters: Vec<TokenStream> = query.chain(body).collect();
    quote! { #(#setters)* }
  }

  fn request_impl(&self, class: &ClassDefinition, binding: &OperationBinding) -> TokenStream {
    let name = format_ident!("{}", to_rust_type_name(&class.name));
    let base = format_ident!("{}", to_rust_type_name(&self.names.request));

    let method = class
      .constants
      .get(METHOD_CONSTANT)
      .cloned()
      .unwrap_or_else(|| binding.http_method.as_upper());
    let uri = class
      .constants
      .get(URI_CONSTANT)
      .map_or(binding.uri_template.as_str(), String::as_str);
    let path_names = binding.path_param_names();
    let query_names = binding.query_param_names();

    let responses = binding.response_map.iter().map(|(status, response)| {
      let model = match response {
        ResponseType::Empty => quote! { super::ResponseModel::Empty },
        ResponseType::Model(name) => quote! { super::ResponseModel::Model(#name) },
        ResponseType::ModelArray(name) => quote! { super::ResponseModel::ModelArray(#name) },
      };
      quote! { (#status, #model) }
    });

    let path_values = collect_values(&binding.path_params);
    let query_values = collect_values(&binding.query_params);
    let body = binding.body_param.as_ref().map(|body| {
      let field = field_ident(&body.name);
      quote! {
        fn body(&self) -> Option<serde_json::Value> {
          self.#field.as_ref().and_then(|body| serde_json::to_value(body).ok())
        }
      }
    });

    quote! {
      impl super::#base for #name {
        const METHOD: &'static str = #method;
        const URI: &'static str = #uri;
        const PATH_PARAMS: &'static [&'static str] = &[#(#path_names),*];
        const QUERY_PARAMS: &'static [&'static str] = &[#(#query_names),*];
        const RESPONSES: &'static [(&'static str, super::ResponseModel)] = &[#(#responses),*];

        fn path_values(&self) -> serde_json::Map<String, serde_json::Value> {
          #path_values
        }

        fn query_values(&self) -> serde_json::Map<String, serde_json::Value> {
          #query_values
        }

        #body
      }
    }
  }
}

fn field_ident(name: &str) -> proc_macro2::Ident {
  format_ident!("{}", to_rust_field_name(name))
}

/// Optional parameters are `Option<T>` regardless of their own nullability.
fn param_type(param: &ParameterBinding) -> TokenStream {
  if param.required {
    type_tokens(&param.ty, ModelScope::Requests)
  } else {
    let inner = non_null_tokens(&param.ty, ModelScope::Requests);
    quote! { Option<#inner> }
  }
}

fn collect_values(params: &[ParameterBinding]) -> TokenStream {
  if params.is_empty() {
    return quote! { serde_json::Map::new() };
  }

  let inserts = params.iter().map(|param| {
    let name = &param.name;
    let field = field_ident(&param.field);
    quote! { super::collect_value(&mut values, #name, &self.#field); }
  });
  quote! {
    let mut values = serde_json::Map::new();
    #(#inserts)*
    values
  }
}
