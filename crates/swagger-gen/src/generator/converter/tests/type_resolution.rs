use serde_json::json;

use super::support::document;
use crate::generator::{
  ast::{TypeDescriptor, TypeKind},
  converter::TypeResolver,
  document::{ObjectSchema, ScalarType, SchemaDocument, SchemaKind, SchemaNode},
  errors::GenerationError,
};

fn pet_document() -> SchemaDocument {
  document(json!({
    "definitions": {
      "Pet": { "type": "object", "properties": { "name": { "type": "string" } } },
      "Tag": { "type": "object" }
    }
  }))
}

#[test]
fn test_scalars_resolve_to_themselves() {
  let document = pet_document();
  let resolver = TypeResolver::new(&document);
  for ty in [ScalarType::Integer, ScalarType::String, ScalarType::File, ScalarType::Null] {
    let resolved = resolver.resolve(&SchemaNode::scalar(ty), "test").unwrap();
    assert_eq!(resolved, TypeDescriptor::scalar(ty));
  }
}

#[test]
fn test_reference_resolves_to_definition_name() {
  let document = pet_document();
  let resolver = TypeResolver::new(&document);

  let resolved = resolver.resolve(&SchemaNode::reference("Pet"), "test").unwrap();
  assert_eq!(resolved.name(), "Pet");
  assert_eq!(resolved.kind, TypeKind::Reference("Pet".to_string()));
}

#[test]
fn test_unknown_reference_fails() {
  let document = pet_document();
  let resolver = TypeResolver::new(&document);

  let err = resolver
    .resolve(&SchemaNode::reference("Category"), "definitions.Pet.category")
    .unwrap_err();
  assert_eq!(
    err,
    GenerationError::UnresolvedReference {
      context: "definitions.Pet.category".to_string(),
      reference: "Category".to_string(),
    }
  );
}

#[test]
fn test_array_of_references_is_checked() {
  let document = pet_document();
  let resolver = TypeResolver::new(&document);

  let tags = SchemaNode::array(SchemaNode::reference("Tag"));
  let resolved = resolver.resolve(&tags, "test").unwrap();
  assert_eq!(resolved, TypeDescriptor::array(TypeDescriptor::reference("Tag")));

  let missing = SchemaNode::array(SchemaNode::reference("Missing"));
  assert!(matches!(
    resolver.resolve(&missing, "test"),
    Err(GenerationError::UnresolvedReference { .. })
  ));
}

#[test]
fn test_nullable_is_carried() {
  let document = pet_document();
  let resolver = TypeResolver::new(&document);

  let node = SchemaNode::reference("Pet").with_nullable(true);
  let resolved = resolver.resolve(&node, "test").unwrap();
  assert!(resolved.nullable);
  assert_eq!(resolved.to_string(), "?Pet");
}

#[test]
fn test_typed_object_is_free_form() {
  let document = pet_document();
  let resolver = TypeResolver::new(&document);

  let typed = SchemaNode::new(SchemaKind::Object(ObjectSchema {
    typed: true,
    ..ObjectSchema::default()
  }));
  let resolved = resolver.resolve(&typed, "test").unwrap();
  assert_eq!(resolved.kind, TypeKind::Scalar(ScalarType::Object));

  let untyped = SchemaNode::new(SchemaKind::Object(ObjectSchema::default()));
  assert!(matches!(
    resolver.resolve(&untyped, "test"),
    Err(GenerationError::MalformedSchema { .. })
  ));
}

#[test]
fn test_single_entry_composite_passes_through() {
  let document = pet_document();
  let resolver = TypeResolver::new(&document);

  let alias = SchemaNode::new(SchemaKind::Composite(vec![SchemaNode::reference("Pet")]));
  assert_eq!(
    resolver.resolve(&alias, "test").unwrap(),
    TypeDescriptor::reference("Pet")
  );

  let extended = SchemaNode::new(SchemaKind::Composite(vec![
    SchemaNode::reference("Pet"),
    SchemaNode::new(SchemaKind::Object(ObjectSchema::default())),
  ]));
  assert!(matches!(
    resolver.resolve(&extended, "test"),
    Err(GenerationError::UnsupportedInheritance { .. })
  ));
}
