//! Orchestration for the Swagger to class generation pipeline.
//!
//! The orchestrator owns one document and one configuration. It runs the
//! model builder, then the request builder, and hands the resulting classes to
//! an emission backend.
//!
//! ## Usage
//!
//! ```text
//! let document = SchemaDocument::from_yaml_str(&yaml)?;
//! let config = GenerationConfig::builder().namespace("Acme::PetStore").build();
//!
//! let orchestrator = Orchestrator::new(document, config);
//! let (files, stats) = orchestrator.emit(&RustBackend)?;
//! ```

use super::{
  ast::ClassSet,
  codegen::{EmissionBackend, GeneratedFile},
  config::GenerationConfig,
  converter::{ModelBuilder, RequestBuilder},
  document::SchemaDocument,
  errors::GenerationResult,
};

pub struct Orchestrator {
  document: SchemaDocument,
  config: GenerationConfig,
}

/// Everything one run produced, before emission.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedClasses {
  pub namespace: String,
  pub models: ClassSet,
  pub requests: ClassSet,
}

/// Statistics about the generation process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Model classes derived from `definitions`
  pub models_generated: usize,
  /// Request classes derived from `paths`
  pub requests_generated: usize,
  /// Base classes emitted next to the generated ones
  pub support_classes: usize,
  /// Files returned by the backend
  pub files_generated: usize,
}

impl GeneratedClasses {
  pub fn stats(&self) -> GenerationStats {
    let support = |set: &ClassSet| set.iter().filter(|class| class.is_support()).count();
    GenerationStats {
      models_generated: self.models.generated().count(),
      requests_generated: self.requests.generated().count(),
      support_classes: support(&self.models) + support(&self.requests),
      files_generated: 0,
    }
  }
}

impl Orchestrator {
  pub fn new(document: SchemaDocument, config: GenerationConfig) -> Self {
    Self { document, config }
  }

  /// Builds models, then requests. The first error aborts the run.
  ///
  /// # Errors
  ///
  /// Returns the first [`GenerationError`](super::errors::GenerationError)
  /// either builder detects.
  pub fn generate(&self) -> GenerationResult<GeneratedClasses> {
    let base_classes = &self.config.base_classes;
    let models = ModelBuilder::new(&self.document, base_classes).build()?;
    let requests = RequestBuilder::new(&self.document, self.config.path_strategy, base_classes).build()?;

    Ok(GeneratedClasses {
      namespace: self.config.namespace.clone(),
      models,
      requests,
    })
  }

  /// Runs [`Self::generate`] and renders the result with `backend`.
  pub fn emit(&self, backend: &impl EmissionBackend) -> anyhow::Result<(Vec<GeneratedFile>, GenerationStats)> {
    let classes = self.generate()?;
    let files = backend.emit(&classes)?;

    let stats = GenerationStats {
      files_generated: files.len(),
      ..classes.stats()
    };
    Ok((files, stats))
  }
}
