//! Intermediate class model produced by the builders and consumed by an
//! emission backend. Nothing in here knows about source text.

mod operation;
mod status_codes;
mod types;

#[cfg(test)]
mod tests;

use indexmap::IndexMap;

pub use self::{
  operation::{BodyBinding, ConstructorParam, OperationBinding, ParameterBinding, QuerySetter, ResponseType},
  status_codes::StatusCode,
  types::{DefaultValue, TypeDescriptor, TypeKind},
};
use super::naming::identifiers::capitalize;

/// One generated class: a model, a request, or a fixed support template.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
  pub name: String,
  /// Parent class; `None` only for support templates.
  pub extends: Option<String>,
  pub comment: Vec<String>,
  pub properties: Vec<PropertyDefinition>,
  pub constants: IndexMap<String, String>,
  pub kind: ClassKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassKind {
  Model,
  Request(OperationBinding),
  Support(SupportTemplate),
}

/// Base classes copied verbatim into the target namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportTemplate {
  Model,
  Request,
  Client,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
  pub name: String,
  pub ty: TypeDescriptor,
  pub required: bool,
  pub description: Option<String>,
  /// Present iff the property is not required.
  pub default_value: Option<DefaultValue>,
  /// Shared stem of the getter and setter, e.g. `PetId`.
  pub accessor: String,
  /// Singular name used by the single-element adder of array properties.
  pub element_name: Option<String>,
}

impl PropertyDefinition {
  /// Stem of the single-element adder, e.g. `Tag` for `tags`.
  pub fn element_accessor(&self) -> Option<String> {
    self.element_name.as_deref().map(capitalize)
  }
}

impl ClassDefinition {
  pub fn support(name: impl Into<String>, template: SupportTemplate) -> Self {
    Self {
      name: name.into(),
      extends: None,
      comment: vec![],
      properties: vec![],
      constants: IndexMap::new(),
      kind: ClassKind::Support(template),
    }
  }

  pub fn binding(&self) -> Option<&OperationBinding> {
    match &self.kind {
      ClassKind::Request(binding) => Some(binding),
      _ => None,
    }
  }

  pub fn is_support(&self) -> bool {
    matches!(self.kind, ClassKind::Support(_))
  }

  #[cfg(test)]
  pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
    self.properties.iter().find(|property| property.name == name)
  }
}

/// Classes produced by one builder pass, keyed and ordered by name.
///
/// Inserting a name that is already present replaces the earlier class but
/// keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassSet {
  classes: IndexMap<String, ClassDefinition>,
}

impl ClassSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, class: ClassDefinition) -> Option<ClassDefinition> {
    self.classes.insert(class.name.clone(), class)
  }

  pub fn get(&self, name: &str) -> Option<&ClassDefinition> {
    self.classes.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.classes.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.classes.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &ClassDefinition> {
    self.classes.values()
  }

  /// Classes derived from the document, without support templates.
  pub fn generated(&self) -> impl Iterator<Item = &ClassDefinition> {
    self.iter().filter(|class| !class.is_support())
  }
}

impl<'a> IntoIterator for &'a ClassSet {
  type Item = &'a ClassDefinition;
  type IntoIter = indexmap::map::Values<'a, String, ClassDefinition>;

  fn into_iter(self) -> Self::IntoIter {
    self.classes.values()
  }
}
