use crate::generator::{
  ast::TypeDescriptor,
  document::{ScalarType, SchemaDocument, SchemaKind, SchemaNode},
  errors::{GenerationError, GenerationResult},
};

/// Resolves schema nodes into [`TypeDescriptor`]s.
///
/// Every reference is checked against the document's `definitions`, so a
/// descriptor handed out by the resolver always names an existing model.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeResolver<'a> {
  document: &'a SchemaDocument,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(document: &'a SchemaDocument) -> Self {
    Self { document }
  }

  /// `context` names the position of `node` and is carried into errors.
  pub(crate) fn resolve(&self, node: &SchemaNode, context: &str) -> GenerationResult<TypeDescriptor> {
    let descriptor = match &node.kind {
      SchemaKind::Scalar(ty) => TypeDescriptor::scalar(*ty),
      SchemaKind::Reference(name) => TypeDescriptor::reference(self.reference(name, context)?),
      SchemaKind::Array(items) => TypeDescriptor::array(self.resolve(items, &format!("{context}.items"))?),
      SchemaKind::Object(object) if object.typed => TypeDescriptor::scalar(ScalarType::Object),
      SchemaKind::Object(_) => {
        return Err(GenerationError::malformed(context, "schema has neither 'type' nor '$ref'"));
      }
      SchemaKind::Composite(parts) => match parts.as_slice() {
        [single] => {
          let inner = self.resolve(single, &format!("{context}.allOf[0]"))?;
          let nullable = inner.nullable || node.nullable;
          return Ok(inner.with_nullable(nullable));
        }
        _ => {
          return Err(GenerationError::inheritance(
            context,
            "'allOf' with a parent and an inline schema is only allowed on a definition",
          ));
        }
      },
    };

    Ok(descriptor.with_nullable(node.nullable))
  }

  /// Returns `name` when it is a key of `definitions`.
  pub(crate) fn reference(&self, name: &str, context: &str) -> GenerationResult<String> {
    if self.document.has_definition(name) {
      Ok(name.to_string())
    } else {
      Err(GenerationError::unresolved(context, name))
    }
  }
}
