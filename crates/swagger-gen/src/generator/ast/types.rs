use std::fmt::{self, Display};

use crate::generator::document::ScalarType;

/// Resolved type of a property, parameter or response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
  pub kind: TypeKind,
  pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
  Scalar(ScalarType),
  /// Name of a model class.
  Reference(String),
  Array(Box<TypeDescriptor>),
}

impl TypeDescriptor {
  pub fn scalar(ty: ScalarType) -> Self {
    Self {
      kind: TypeKind::Scalar(ty),
      nullable: false,
    }
  }

  pub fn reference(name: impl Into<String>) -> Self {
    Self {
      kind: TypeKind::Reference(name.into()),
      nullable: false,
    }
  }

  pub fn array(element: TypeDescriptor) -> Self {
    Self {
      kind: TypeKind::Array(Box::new(element)),
      nullable: false,
    }
  }

  #[must_use]
  pub fn with_nullable(mut self, nullable: bool) -> Self {
    self.nullable = nullable;
    self
  }

  /// Scalar type name, referenced class name, or `array`.
  pub fn name(&self) -> &str {
    match &self.kind {
      TypeKind::Scalar(ty) => (*ty).into(),
      TypeKind::Reference(name) => name,
      TypeKind::Array(_) => "array",
    }
  }

  pub fn is_array(&self) -> bool {
    matches!(self.kind, TypeKind::Array(_))
  }

  pub fn element(&self) -> Option<&TypeDescriptor> {
    match &self.kind {
      TypeKind::Array(element) => Some(element),
      _ => None,
    }
  }

  /// Default assigned to an optional member of this type. Scalars and arrays
  /// keep their type's default even when nullable; references, free-form
  /// objects and files default to `null` when nullable and have none otherwise.
  pub fn default_value(&self) -> Option<DefaultValue> {
    match &self.kind {
      TypeKind::Scalar(ScalarType::String) => Some(DefaultValue::EmptyString),
      TypeKind::Scalar(ScalarType::Integer) => Some(DefaultValue::Zero),
      TypeKind::Scalar(ScalarType::Number) => Some(DefaultValue::ZeroFloat),
      TypeKind::Scalar(ScalarType::Boolean) => Some(DefaultValue::False),
      TypeKind::Scalar(ScalarType::Null) => Some(DefaultValue::Null),
      TypeKind::Array(_) => Some(DefaultValue::EmptyArray),
      TypeKind::Scalar(ScalarType::Object | ScalarType::File) | TypeKind::Reference(_) => {
        self.nullable.then_some(DefaultValue::Null)
      }
    }
  }
}

/// Documentation spelling, e.g. `float`, `Pet`, `string[]`, `?int`.
impl Display for TypeDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.nullable {
      f.write_str("?")?;
    }
    match &self.kind {
      TypeKind::Scalar(ty) => f.write_str(ty.display_name()),
      TypeKind::Reference(name) => f.write_str(name),
      TypeKind::Array(element) => write!(f, "{element}[]"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultValue {
  EmptyString,
  Zero,
  ZeroFloat,
  False,
  EmptyArray,
  Null,
}

impl Display for DefaultValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::EmptyString => "\"\"",
      Self::Zero => "0",
      Self::ZeroFloat => "0.0",
      Self::False => "false",
      Self::EmptyArray => "[]",
      Self::Null => "null",
    })
  }
}
