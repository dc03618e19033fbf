use indexmap::IndexMap;

use super::{StatusCode, types::TypeDescriptor};
use crate::generator::{document::HttpMethod, naming::identifiers::path_to_identifier};

/// HTTP binding carried by a request class.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationBinding {
  pub http_method: HttpMethod,
  /// The document path template this operation was declared under.
  pub path_template: String,
  /// Base path joined with the normalized path.
  pub uri_template: String,
  pub path_params: Vec<ParameterBinding>,
  pub query_params: Vec<ParameterBinding>,
  pub body_param: Option<BodyBinding>,
  pub response_map: IndexMap<String, ResponseType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBinding {
  /// Name on the wire.
  pub name: String,
  /// Member holding the value. Differs from `name` only for a query parameter
  /// sharing its name with a path parameter.
  pub field: String,
  pub ty: TypeDescriptor,
  pub required: bool,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyBinding {
  /// Lower-cased parameter name.
  pub name: String,
  pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseType {
  /// No model is decoded for this status.
  Empty,
  Model(String),
  ModelArray(String),
}

/// A constructor argument of a request class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructorParam<'a> {
  pub binding: &'a ParameterBinding,
  /// Optional path parameters may be omitted.
  pub optional: bool,
}

/// A dedicated setter for an optional query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySetter<'a> {
  pub binding: &'a ParameterBinding,
  /// `set` + this stem names the method.
  pub stem: String,
}

impl OperationBinding {
  /// Path parameters in declaration order, then required query parameters.
  pub fn constructor_params(&self) -> Vec<ConstructorParam<'_>> {
    let path = self.path_params.iter().map(|binding| ConstructorParam {
      binding,
      optional: !binding.required,
    });
    let query = self
      .query_params
      .iter()
      .filter(|binding| binding.required)
      .map(|binding| ConstructorParam {
        binding,
        optional: false,
      });
    path.chain(query).collect()
  }

  pub fn query_setters(&self) -> Vec<QuerySetter<'_>> {
    self
      .query_params
      .iter()
      .filter(|binding| !binding.required)
      .map(|binding| QuerySetter {
        binding,
        stem: path_to_identifier(&binding.name),
      })
      .collect()
  }

  pub fn path_param_names(&self) -> Vec<&str> {
    self.path_params.iter().map(|binding| binding.name.as_str()).collect()
  }

  pub fn query_param_names(&self) -> Vec<&str> {
    self.query_params.iter().map(|binding| binding.name.as_str()).collect()
  }

  pub fn success_codes(&self) -> impl Iterator<Item = &str> {
    self
      .response_map
      .keys()
      .map(String::as_str)
      .filter(|code| StatusCode::parse(code).is_success())
  }
}
