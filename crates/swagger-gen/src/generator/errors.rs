use thiserror::Error;

pub(crate) type GenerationResult<T> = Result<T, GenerationError>;

/// Every inconsistency found while mapping a document is fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
  #[error("malformed schema at {context}: {reason}")]
  MalformedSchema { context: String, reason: String },

  #[error("unresolved reference '{reference}' at {context}")]
  UnresolvedReference { context: String, reference: String },

  #[error("cannot synthesize a default value for property '{property}' of type '{type_name}' in {class}")]
  InvalidDefault {
    class: String,
    property: String,
    type_name: String,
  },

  #[error("operation {method} {path} must declare at least one response with a status code between 1 and 399")]
  NoSuccessResponse { method: String, path: String },

  #[error("unsupported inheritance at {context}: {reason}")]
  UnsupportedInheritance { context: String, reason: String },

  #[error("unsupported request body in {class}: {reason}")]
  UnsupportedBody { class: String, reason: String },

  #[error("class name '{name}' is taken by the {role} base class")]
  ReservedClassName { name: String, role: String },

  #[error("failed to parse document: {0}")]
  Parse(String),
}

impl GenerationError {
  pub(crate) fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::MalformedSchema {
      context: context.into(),
      reason: reason.into(),
    }
  }

  pub(crate) fn unresolved(context: impl Into<String>, reference: impl Into<String>) -> Self {
    Self::UnresolvedReference {
      context: context.into(),
      reference: reference.into(),
    }
  }

  pub(crate) fn inheritance(context: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::UnsupportedInheritance {
      context: context.into(),
      reason: reason.into(),
    }
  }
}

impl From<serde_json::Error> for GenerationError {
  fn from(err: serde_json::Error) -> Self {
    Self::Parse(err.to_string())
  }
}

impl From<serde_yaml::Error> for GenerationError {
  fn from(err: serde_yaml::Error) -> Self {
    Self::Parse(err.to_string())
  }
}
