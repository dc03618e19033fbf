use indexmap::IndexMap;

use super::{
  TypeResolver,
  parameters::{BoundParameters, bind_parameters, merge_parameters},
  responses::build_response_map,
};
use crate::generator::{
  ast::{ClassDefinition, ClassKind, ClassSet, OperationBinding, SupportTemplate},
  config::BaseClasses,
  document::{HttpMethod, Operation, PathItem, SchemaDocument},
  errors::{GenerationError, GenerationResult},
  naming::{
    constants::{METHOD_CONSTANT, URI_CONSTANT},
    paths::{PathStrategy, request_class_name, request_uri},
  },
};

/// Turns every `(path, method)` pair into a request class.
pub(crate) struct RequestBuilder<'a> {
  document: &'a SchemaDocument,
  resolver: TypeResolver<'a>,
  path_strategy: PathStrategy,
  base_classes: &'a BaseClasses,
}

impl<'a> RequestBuilder<'a> {
  pub(crate) fn new(document: &'a SchemaDocument, path_strategy: PathStrategy, base_classes: &'a BaseClasses) -> Self {
    Self {
      document,
      resolver: TypeResolver::new(document),
      path_strategy,
      base_classes,
    }
  }

  /// Builds the request and client base classes followed by one class per
  /// operation. A later operation whose class name collides with an earlier
  /// one replaces it.
  pub(crate) fn build(&self) -> GenerationResult<ClassSet> {
    let mut classes = ClassSet::new();
    classes.insert(ClassDefinition::support(
      self.base_classes.request.clone(),
      SupportTemplate::Request,
    ));
    classes.insert(ClassDefinition::support(
      self.base_classes.client.clone(),
      SupportTemplate::Client,
    ));

    for (path, item) in &self.document.paths {
      for (method, operation) in &item.operations {
        classes.insert(self.build_request(path, item, *method, operation)?);
      }
    }

    Ok(classes)
  }

  fn build_request(
    &self,
    path: &str,
    item: &PathItem,
    method: HttpMethod,
    operation: &Operation,
  ) -> GenerationResult<ClassDefinition> {
    let context = format!("paths.{path}.{method}");
    let normalized = self.path_strategy.normalize(path);
    let name = request_class_name(method.as_ref(), &normalized);
    for (base, role) in [(&self.base_classes.request, "request"), (&self.base_classes.client, "client")] {
      if name == *base {
        return Err(GenerationError::ReservedClassName {
          name,
          role: role.to_string(),
        });
      }
    }
    let uri = request_uri(&self.document.base_path, &normalized);

    let parameters = merge_parameters(&item.parameters, &operation.parameters);
    let BoundParameters { path: path_params, query, body } =
      bind_parameters(&self.resolver, &name, &context, &parameters)?;

    let response_map = build_response_map(&self.resolver, &context, &operation.responses)?;
    let binding = OperationBinding {
      http_method: method,
      path_template: path.to_string(),
      uri_template: uri.clone(),
      path_params,
      query_params: query,
      body_param: body,
      response_map,
    };

    if binding.success_codes().next().is_none() {
      return Err(GenerationError::NoSuccessResponse {
        method: method.as_upper(),
        path: path.to_string(),
      });
    }

    let comment = operation
      .summary
      .as_deref()
      .or(operation.description.as_deref())
      .map(|text| text.lines().map(str::to_string).collect())
      .unwrap_or_default();

    Ok(ClassDefinition {
      name,
      extends: Some(self.base_classes.request.clone()),
      comment,
      properties: vec![],
      constants: IndexMap::from([
        (URI_CONSTANT.to_string(), uri),
        (METHOD_CONSTANT.to_string(), method.as_upper()),
      ]),
      kind: ClassKind::Request(binding),
    })
  }
}
