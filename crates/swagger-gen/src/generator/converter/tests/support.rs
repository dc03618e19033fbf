use serde_json::Value;

use crate::generator::{config::BaseClasses, document::SchemaDocument};

pub(super) fn document(value: Value) -> SchemaDocument {
  SchemaDocument::from_json_value(value).expect("fixture should parse")
}

pub(super) fn base_classes() -> BaseClasses {
  BaseClasses::default()
}
