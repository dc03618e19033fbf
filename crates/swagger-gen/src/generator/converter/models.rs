use indexmap::IndexMap;

use super::TypeResolver;
use crate::generator::{
  ast::{ClassDefinition, ClassKind, ClassSet, PropertyDefinition, SupportTemplate},
  config::BaseClasses,
  document::{ObjectSchema, SchemaDocument, SchemaKind, SchemaNode},
  errors::{GenerationError, GenerationResult},
  naming::{
    constants::GENERATED_BANNER,
    identifiers::{accessor_name, singularize},
  },
};

/// Turns every entry of `definitions` into a model class.
pub(crate) struct ModelBuilder<'a> {
  document: &'a SchemaDocument,
  resolver: TypeResolver<'a>,
  base_classes: &'a BaseClasses,
}

impl<'a> ModelBuilder<'a> {
  pub(crate) fn new(document: &'a SchemaDocument, base_classes: &'a BaseClasses) -> Self {
    Self {
      document,
      resolver: TypeResolver::new(document),
      base_classes,
    }
  }

  /// Builds the model base class followed by one class per definition, in
  /// document order.
  pub(crate) fn build(&self) -> GenerationResult<ClassSet> {
    let mut classes = ClassSet::new();
    classes.insert(ClassDefinition::support(
      self.base_classes.model.clone(),
      SupportTemplate::Model,
    ));

    for (name, node) in &self.document.definitions {
      if *name == self.base_classes.model {
        return Err(GenerationError::ReservedClassName {
          name: name.clone(),
          role: "model".to_string(),
        });
      }
      classes.insert(self.build_model(name, node)?);
    }

    Ok(classes)
  }

  fn build_model(&self, name: &str, node: &SchemaNode) -> GenerationResult<ClassDefinition> {
    let context = format!("definitions.{name}");

    let (extends, own) = match &node.kind {
      SchemaKind::Composite(parts) => self.split_composite(parts, &context)?,
      SchemaKind::Object(object) => (self.base_classes.model.clone(), Some(object)),
      _ => (self.base_classes.model.clone(), None),
    };

    let properties = match own {
      Some(object) => self.build_properties(name, object, &context)?,
      None => vec![],
    };

    let mut comment = vec![GENERATED_BANNER.to_string()];
    comment.extend(node.description.iter().flat_map(|text| text.lines().map(str::to_string)));

    Ok(ClassDefinition {
      name: name.to_string(),
      extends: Some(extends),
      comment,
      properties,
      constants: IndexMap::new(),
      kind: ClassKind::Model,
    })
  }

  /// `allOf: [parent]` aliases the parent, `allOf: [parent, {..}]` extends it
  /// with the inline properties.
  fn split_composite<'n>(
    &self,
    parts: &'n [SchemaNode],
    context: &str,
  ) -> GenerationResult<(String, Option<&'n ObjectSchema>)> {
    match parts {
      [parent] => Ok((self.parent_name(parent, context)?, None)),
      [
        parent,
        SchemaNode {
          kind: SchemaKind::Object(own),
          ..
        },
      ] => Ok((self.parent_name(parent, context)?, Some(own))),
      _ => Err(GenerationError::inheritance(
        context,
        "'allOf' must be a parent reference, optionally followed by one inline object",
      )),
    }
  }

  fn parent_name(&self, parent: &SchemaNode, context: &str) -> GenerationResult<String> {
    match &parent.kind {
      SchemaKind::Reference(name) => self.resolver.reference(name, &format!("{context}.allOf[0]")),
      _ => Err(GenerationError::inheritance(
        context,
        "the first 'allOf' entry must reference the parent definition",
      )),
    }
  }

  fn build_properties(
    &self,
    class: &str,
    object: &ObjectSchema,
    context: &str,
  ) -> GenerationResult<Vec<PropertyDefinition>> {
    object
      .properties
      .iter()
      .map(|(name, node)| self.build_property(class, name, node, object.is_required(name), context))
      .collect()
  }

  fn build_property(
    &self,
    class: &str,
    name: &str,
    node: &SchemaNode,
    required: bool,
    context: &str,
  ) -> GenerationResult<PropertyDefinition> {
    let ty = self.resolver.resolve(node, &format!("{context}.{name}"))?;

    let default_value = if required {
      None
    } else {
      let value = ty.default_value().ok_or_else(|| GenerationError::InvalidDefault {
        class: class.to_string(),
        property: name.to_string(),
        type_name: ty.to_string(),
      })?;
      Some(value)
    };

    Ok(PropertyDefinition {
      name: name.to_string(),
      element_name: ty.is_array().then(|| singularize(name)),
      ty,
      required,
      description: node.description.clone(),
      default_value,
      accessor: accessor_name(name),
    })
  }
}
