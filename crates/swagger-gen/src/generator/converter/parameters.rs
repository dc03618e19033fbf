use indexmap::IndexMap;

use super::TypeResolver;
use crate::generator::{
  ast::{BodyBinding, ParameterBinding, TypeKind},
  document::{Parameter, ParameterLocation},
  errors::{GenerationError, GenerationResult},
  naming::identifiers::to_rust_field_name,
};

/// Appended to a query parameter's member name when a path parameter already
/// uses it.
const QUERY_FIELD_SUFFIX: &str = "_query";

/// Parameters of one operation, routed by location.
#[derive(Debug, Default)]
pub(super) struct BoundParameters {
  pub(super) path: Vec<ParameterBinding>,
  pub(super) query: Vec<ParameterBinding>,
  pub(super) body: Option<BodyBinding>,
}

/// Path-level parameters followed by the operation's own. An operation
/// parameter with the same name and location replaces the shared one in place.
pub(super) fn merge_parameters<'a>(shared: &'a [Parameter], own: &'a [Parameter]) -> Vec<&'a Parameter> {
  let mut merged: IndexMap<(&str, ParameterLocation), &Parameter> = IndexMap::new();
  for parameter in shared.iter().chain(own) {
    merged.insert((parameter.name.as_str(), parameter.location), parameter);
  }
  merged.into_values().collect()
}

pub(super) fn bind_parameters(
  resolver: &TypeResolver<'_>,
  class: &str,
  context: &str,
  parameters: &[&Parameter],
) -> GenerationResult<BoundParameters> {
  let mut bound = BoundParameters::default();

  for parameter in parameters {
    let context = format!("{context}.parameters.{}", parameter.name);
    match parameter.location {
      ParameterLocation::Path => bound.path.push(bind_value(resolver, parameter, &context)?),
      ParameterLocation::Query => bound.query.push(bind_value(resolver, parameter, &context)?),
      ParameterLocation::Body => {
        if let Some(body) = bind_body(resolver, class, parameter, &context)? {
          bound.body = Some(body);
        }
      }
      ParameterLocation::Header | ParameterLocation::FormData => {}
    }
  }

  for query in &mut bound.query {
    let member = to_rust_field_name(&query.name);
    if bound.path.iter().any(|path| to_rust_field_name(&path.field) == member) {
      query.field = format!("{}{QUERY_FIELD_SUFFIX}", query.name);
    }
  }

  Ok(bound)
}

fn bind_value(resolver: &TypeResolver<'_>, parameter: &Parameter, context: &str) -> GenerationResult<ParameterBinding> {
  let schema = parameter
    .schema
    .as_ref()
    .ok_or_else(|| GenerationError::malformed(context, "parameter has no type"))?;

  Ok(ParameterBinding {
    name: parameter.name.clone(),
    field: parameter.name.clone(),
    ty: resolver.resolve(schema, context)?,
    required: parameter.required,
    description: parameter.description.clone(),
  })
}

/// A body without a schema binds nothing; any other body must be a single
/// model reference.
fn bind_body(
  resolver: &TypeResolver<'_>,
  class: &str,
  parameter: &Parameter,
  context: &str,
) -> GenerationResult<Option<BodyBinding>> {
  let Some(schema) = &parameter.schema else {
    return Ok(None);
  };

  let ty = resolver.resolve(schema, context)?;
  match ty.kind {
    TypeKind::Reference(model) => Ok(Some(BodyBinding {
      name: parameter.name.to_lowercase(),
      model,
    })),
    _ => Err(GenerationError::UnsupportedBody {
      class: class.to_string(),
      reason: format!("body parameter '{}' must reference a definition, found '{ty}'", parameter.name),
    }),
  }
}
