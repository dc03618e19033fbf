use indexmap::IndexMap;

use super::TypeResolver;
use crate::generator::{
  ast::{ResponseType, TypeKind},
  document::Response,
  errors::GenerationResult,
};

/// Maps each declared status code to the model decoded for it.
pub(super) fn build_response_map(
  resolver: &TypeResolver<'_>,
  context: &str,
  responses: &IndexMap<String, Response>,
) -> GenerationResult<IndexMap<String, ResponseType>> {
  responses
    .iter()
    .map(|(status, response)| {
      let context = format!("{context}.responses.{status}");
      Ok((status.clone(), response_type(resolver, &context, response)?))
    })
    .collect()
}

fn response_type(resolver: &TypeResolver<'_>, context: &str, response: &Response) -> GenerationResult<ResponseType> {
  let Some(schema) = &response.schema else {
    return Ok(ResponseType::Empty);
  };

  let ty = resolver.resolve(schema, context)?;
  Ok(match ty.kind {
    TypeKind::Reference(name) => ResponseType::Model(name),
    TypeKind::Array(element) => match element.kind {
      TypeKind::Reference(name) => ResponseType::ModelArray(name),
      _ => ResponseType::Empty,
    },
    TypeKind::Scalar(_) => ResponseType::Empty,
  })
}
