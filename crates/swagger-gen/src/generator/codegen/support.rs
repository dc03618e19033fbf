use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{SupportNames, render_file};
use crate::generator::{
  ast::SupportTemplate,
  naming::identifiers::{to_module_name, to_rust_type_name},
};

/// Renders the fixed base traits every generated class implements.
pub(crate) struct SupportGenerator<'a> {
  names: &'a SupportNames,
}

impl<'a> SupportGenerator<'a> {
  pub(crate) fn new(names: &'a SupportNames) -> Self {
    Self { names }
  }

  pub(crate) fn generate(&self, template: SupportTemplate) -> anyhow::Result<String> {
    let tokens = match template {
      SupportTemplate::Model => self.model_trait(),
      SupportTemplate::Request => self.request_trait(),
      SupportTemplate::Client => self.client_trait(),
    };
    render_file(&tokens)
  }

  fn model_trait(&self) -> TokenStream {
    let name = format_ident!("{}", to_rust_type_name(&self.names.model));
    quote! {
      /// Base of every generated model.
      pub trait #name: serde::Serialize + serde::de::DeserializeOwned {
        fn to_json(&self) -> serde_json::Result<serde_json::Value> {
          serde_json::to_value(self)
        }

        fn from_json(value: serde_json::Value) -> serde_json::Result<Self>
        where
          Self: Sized,
        {
          serde_json::from_value(value)
        }
      }
    }
  }

  fn request_trait(&self) -> TokenStream {
    let name = format_ident!("{}", to_rust_type_name(&self.names.request));
    let client = format_ident!("{}", to_rust_type_name(&self.names.client));
    let client_module = format_ident!("{}", to_module_name(&self.names.client));
    quote! {
      /// Model decoded for one response status.
      #[derive(Debug, Clone, Copy, PartialEq, Eq)]
      pub enum ResponseModel {
        Empty,
        Model(&'static str),
        ModelArray(&'static str),
      }

      /// Base of every generated request: the HTTP binding plus the values
      /// collected from the request's fields.
      pub trait #name {
        const METHOD: &'static str;
        const URI: &'static str;
        const PATH_PARAMS: &'static [&'static str];
        const QUERY_PARAMS: &'static [&'static str];
        const RESPONSES: &'static [(&'static str, ResponseModel)];

        fn path_values(&self) -> serde_json::Map<String, serde_json::Value>;

        fn query_values(&self) -> serde_json::Map<String, serde_json::Value>;

        fn body(&self) -> Option<serde_json::Value> {
          None
        }

        fn response_model(status: &str) -> Option<ResponseModel> {
          Self::RESPONSES
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, model)| *model)
        }

        /// `URI` followed by one segment per path parameter, in declaration
        /// order. A missing value leaves its segment empty.
        fn uri(&self) -> String {
          let values = self.path_values();
          let mut uri = Self::URI.to_string();
          for name in Self::PATH_PARAMS {
            uri.push('/');
            match values.get(*name) {
              Some(serde_json::Value::String(value)) => uri.push_str(value),
              Some(value) => uri.push_str(&value.to_string()),
              None => {}
            }
          }
          uri
        }

        /// Sends this request through `client`.
        fn send_with<C: super::#client_module::#client>(
          &self,
          client: &C,
        ) -> Result<Option<serde_json::Value>, C::Error>
        where
          Self: Sized,
        {
          client.send(self)
        }
      }

      /// Serializes `value` into `values` unless it is absent.
      pub fn collect_value<T: serde::Serialize>(
        values: &mut serde_json::Map<String, serde_json::Value>,
        name: &str,
        value: &T,
      ) {
        match serde_json::to_value(value) {
          Ok(serde_json::Value::Null) | Err(_) => {}
          Ok(value) => {
            values.insert(name.to_string(), value);
          }
        }
      }
    }
  }

  fn client_trait(&self) -> TokenStream {
    let name = format_ident!("{}", to_rust_type_name(&self.names.client));
    let request = format_ident!("{}", to_rust_type_name(&self.names.request));
    let request_module = format_ident!("{}", to_module_name(&self.names.request));
    quote! {
      use super::#request_module::#request;

      /// Transport used to send generated requests.
      pub trait #name {
        type Error;

        /// Sends `request` and returns the decoded body, if any.
        fn send<R: #request>(&self, request: &R) -> Result<Option<serde_json::Value>, Self::Error>;
      }
    }
  }
}
