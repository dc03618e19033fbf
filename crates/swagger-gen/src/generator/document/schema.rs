use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};
use strum::{Display, EnumString, IntoStaticStr};

use super::raw::RawSchema;
use crate::generator::errors::{GenerationError, GenerationResult};

/// Primitive `type` values understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScalarType {
  Integer,
  Number,
  String,
  Boolean,
  Null,
  Object,
  File,
}

impl ScalarType {
  /// Name used in generated documentation; `number` reads as `float`.
  pub fn display_name(self) -> &'static str {
    match self {
      Self::Integer => "int",
      Self::Number => "float",
      Self::Boolean => "bool",
      other => other.into(),
    }
  }
}

/// A schema node after validation. Which keys were present has already been
/// decided, so consumers match on [`SchemaKind`] instead of probing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
  pub kind: SchemaKind,
  pub nullable: bool,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
  Scalar(ScalarType),
  /// Name of the referenced definition.
  Reference(String),
  Array(Box<SchemaNode>),
  Object(ObjectSchema),
  /// `allOf`, holding one or two entries.
  Composite(Vec<SchemaNode>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
  pub required: IndexSet<String>,
  pub properties: IndexMap<String, SchemaNode>,
  /// `type: object` was written explicitly.
  pub typed: bool,
}

impl ObjectSchema {
  pub fn is_required(&self, property: &str) -> bool {
    self.required.contains(property)
  }
}

impl SchemaNode {
  pub fn new(kind: SchemaKind) -> Self {
    Self {
      kind,
      nullable: false,
      description: None,
    }
  }

  pub fn scalar(ty: ScalarType) -> Self {
    Self::new(SchemaKind::Scalar(ty))
  }

  pub fn reference(name: impl Into<String>) -> Self {
    Self::new(SchemaKind::Reference(name.into()))
  }

  pub fn array(items: SchemaNode) -> Self {
    Self::new(SchemaKind::Array(Box::new(items)))
  }

  pub fn with_nullable(mut self, nullable: bool) -> Self {
    self.nullable = nullable;
    self
  }

  pub(crate) fn parse(raw: &RawSchema, context: &str) -> GenerationResult<Self> {
    let kind = Self::parse_kind(raw, context)?;
    Ok(Self {
      kind,
      nullable: raw.nullable.unwrap_or(false),
      description: raw.description.clone(),
    })
  }

  fn parse_kind(raw: &RawSchema, context: &str) -> GenerationResult<SchemaKind> {
    if !raw.all_of.is_empty() {
      return Self::parse_composite(&raw.all_of, context);
    }

    if let Some(reference) = &raw.reference {
      return reference_name(reference)
        .map(SchemaKind::Reference)
        .ok_or_else(|| GenerationError::malformed(context, format!("'$ref' value '{reference}' names nothing")));
    }

    match raw.schema_type.as_deref() {
      Some("array") => {
        let items = raw
          .items
          .as_deref()
          .ok_or_else(|| GenerationError::malformed(context, "array schema without 'items'"))?;
        let items = Self::parse(items, &format!("{context}.items"))?;
        Ok(SchemaKind::Array(Box::new(items)))
      }
      Some("object") => Ok(SchemaKind::Object(ObjectSchema::parse(raw, context, true)?)),
      Some(other) => ScalarType::from_str(other)
        .map(SchemaKind::Scalar)
        .map_err(|_| GenerationError::malformed(context, format!("unknown type '{other}'"))),
      None if !raw.properties.is_empty() || !raw.required.is_empty() => {
        Ok(SchemaKind::Object(ObjectSchema::parse(raw, context, false)?))
      }
      None => Err(GenerationError::malformed(context, "schema has neither 'type' nor '$ref'")),
    }
  }

  fn parse_composite(entries: &[RawSchema], context: &str) -> GenerationResult<SchemaKind> {
    if entries.len() > 2 {
      return Err(GenerationError::inheritance(
        context,
        format!("'allOf' must hold a parent reference and one inline schema, found {} entries", entries.len()),
      ));
    }

    let parts = entries
      .iter()
      .enumerate()
      .map(|(index, entry)| Self::parse(entry, &format!("{context}.allOf[{index}]")))
      .collect::<GenerationResult<Vec<_>>>()?;

    if parts.iter().any(|part| matches!(part.kind, SchemaKind::Composite(_))) {
      return Err(GenerationError::inheritance(context, "nested 'allOf' chains are not supported"));
    }

    Ok(SchemaKind::Composite(parts))
  }
}

impl ObjectSchema {
  fn parse(raw: &RawSchema, context: &str, typed: bool) -> GenerationResult<Self> {
    let properties = raw
      .properties
      .iter()
      .map(|(name, property)| Ok((name.clone(), SchemaNode::parse(property, &format!("{context}.{name}"))?)))
      .collect::<GenerationResult<IndexMap<_, _>>>()?;

    Ok(Self {
      required: raw.required.iter().cloned().collect(),
      properties,
      typed,
    })
  }
}

/// `#/definitions/Pet` -> `Pet`.
pub(crate) fn reference_name(reference: &str) -> Option<String> {
  reference
    .rsplit('/')
    .next()
    .filter(|name| !name.is_empty())
    .map(str::to_string)
}
