use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
  SupportNames, generate_docs, render_file,
  types::{ModelScope, element_tokens, type_tokens},
};
use crate::generator::{
  ast::{ClassDefinition, ClassSet, PropertyDefinition},
  naming::identifiers::{to_method_name, to_rust_field_name, to_rust_type_name},
};

/// Field holding the flattened parent of an inheriting model.
const PARENT_FIELD: &str = "inherited";

/// Renders a model class as a serde struct with accessors.
pub(crate) struct ModelGenerator<'a> {
  models: &'a ClassSet,
  names: &'a SupportNames,
}

impl<'a> ModelGenerator<'a> {
  pub(crate) fn new(models: &'a ClassSet, names: &'a SupportNames) -> Self {
    Self { models, names }
  }

  pub(crate) fn generate(&self, class: &ClassDefinition) -> anyhow::Result<String> {
    let name = format_ident!("{}", to_rust_type_name(&class.name));
    let base = format_ident!("{}", to_rust_type_name(&self.names.model));
    let docs = generate_docs(&class.comment);

    let parent = self.parent_field(class);
    let fields: Vec<TokenStream> = class.properties.iter().map(Self::field).collect();
    let accessors: Vec<TokenStream> = class.properties.iter().map(Self::accessors).collect();

    render_file(&quote! {
      use serde::{Deserialize, Serialize};

      #docs
      #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
      pub struct #name {
        #parent
        #(#fields)*
      }

      impl #name {
        #(#accessors)*
      }

      impl super::#base for #name {}
    })
  }

  /// A parent that is another model is flattened into the child.
  fn parent_field(&self, class: &ClassDefinition) -> TokenStream {
    let Some(parent) = class
      .extends
      .as_deref()
      .filter(|name| self.models.get(name).is_some_and(|model| !model.is_support()))
    else {
      return quote! {};
    };

    let field = format_ident!("{}", PARENT_FIELD);
    let ty = format_ident!("{}", to_rust_type_name(parent));
    quote! {
      #[serde(flatten)]
      pub #field: super::#ty,
    }
  }

  fn field(property: &PropertyDefinition) -> TokenStream {
    let field_name = to_rust_field_name(&property.name);
    let ident = format_ident!("{}", field_name);
    let ty = type_tokens(&property.ty, ModelScope::Sibling);
    let docs = property
      .description
      .as_deref()
      .map(|text| generate_docs(&text.lines().map(str::to_string).collect::<Vec<_>>()))
      .unwrap_or_default();

    let rename = if field_name.trim_start_matches("r#") == property.name {
      quote! {}
    } else {
      let original = &property.name;
      quote! { #[serde(rename = #original)] }
    };
    let default = if property.required {
      quote! {}
    } else {
      quote! { #[serde(default)] }
    };

    quote! {
      #docs
      #rename
      #default
      pub #ident: #ty,
    }
  }

  fn accessors(property: &PropertyDefinition) -> TokenStream {
    let field = format_ident!("{}", to_rust_field_name(&property.name));
    let getter = format_ident!("{}", to_method_name("get", &property.accessor));
    let setter = format_ident!("{}", to_method_name("set", &property.accessor));
    let ty = type_tokens(&property.ty, ModelScope::Sibling);

    let adder = match (property.ty.element(), property.element_accessor()) {
      (Some(element), Some(stem)) => {
        let adder = format_ident!("{}", to_method_name("add", &stem));
        let element_ty = element_tokens(element, ModelScope::Sibling);
        let push = if property.ty.nullable {
          quote! { self.#field.get_or_insert_with(Vec::new).push(value); }
        } else {
          quote! { self.#field.push(value); }
        };
        quote! {
          pub fn #adder(&mut self, value: #element_ty) -> &mut Self {
            #push
            self
          }
        }
      }
      _ => quote! {},
    };

    quote! {
      pub fn #getter(&self) -> &#ty {
        &self.#field
      }

      pub fn #setter(&mut self, value: #ty) -> &mut Self {
        self.#field = value;
        self
      }

      #adder
    }
  }
}
