use super::naming::{
  constants::{DEFAULT_CLIENT_BASE, DEFAULT_MODEL_BASE, DEFAULT_REQUEST_BASE},
  paths::PathStrategy,
};

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GenerationConfig {
  /// Target namespace, e.g. `Acme::PetStore`.
  #[builder(into)]
  pub namespace: String,
  #[builder(default)]
  pub path_strategy: PathStrategy,
  #[builder(default)]
  pub base_classes: BaseClasses,
}

/// Names of the support classes every generated class extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseClasses {
  pub model: String,
  pub request: String,
  pub client: String,
}

impl Default for BaseClasses {
  fn default() -> Self {
    Self {
      model: DEFAULT_MODEL_BASE.to_string(),
      request: DEFAULT_REQUEST_BASE.to_string(),
      client: DEFAULT_CLIENT_BASE.to_string(),
    }
  }
}
