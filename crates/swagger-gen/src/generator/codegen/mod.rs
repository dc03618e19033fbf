//! Emission backends turning [`GeneratedClasses`] into source files.

mod mod_file;
mod models;
mod requests;
mod support;
mod types;


use std::path::{Path, PathBuf};

use anyhow::Context;
use proc_macro2::TokenStream;
use quote::quote;

use self::{mod_file::ModFileGenerator, models::ModelGenerator, requests::RequestGenerator, support::SupportGenerator};
use super::{
  ast::{ClassDefinition, ClassKind, ClassSet, SupportTemplate},
  config::BaseClasses,
  naming::{
    constants::{GENERATED_BANNER, MODELS_MODULE, REQUESTS_MODULE},
    identifiers::{namespace_segments, to_module_name},
  },
  orchestrator::GeneratedClasses,
};

/// A rendered file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub contents: String,
}

/// Renders a class set into files. The core never writes to disk itself.
pub trait EmissionBackend {
  fn emit(&self, classes: &GeneratedClasses) -> anyhow::Result<Vec<GeneratedFile>>;
}

/// Emits one Rust module per class under `<namespace>/models` and
/// `<namespace>/requests`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend;

impl EmissionBackend for RustBackend {
  fn emit(&self, classes: &GeneratedClasses) -> anyhow::Result<Vec<GeneratedFile>> {
    let segments = namespace_segments(&classes.namespace);
    let root: PathBuf = segments.iter().collect();
    let bases = SupportNames::find(&classes.models, &classes.requests);

    let mut files = vec![];
    for (depth, segment) in segments.iter().enumerate().skip(1) {
      let dir: PathBuf = segments[..depth].iter().collect();
      files.push(GeneratedFile {
        path: dir.join("mod.rs"),
        contents: ModFileGenerator::parents(segment)?,
      });
    }
    files.push(GeneratedFile {
      path: root.join("mod.rs"),
      contents: ModFileGenerator::namespace()?,
    });

    files.extend(emit_module(&root.join(MODELS_MODULE), &classes.models, |class| {
      match &class.kind {
        ClassKind::Support(template) => SupportGenerator::new(&bases).generate(*template),
        _ => ModelGenerator::new(&classes.models, &bases).generate(class),
      }
    })?);

    files.extend(emit_module(&root.join(REQUESTS_MODULE), &classes.requests, |class| {
      match &class.kind {
        ClassKind::Support(template) => SupportGenerator::new(&bases).generate(*template),
        _ => RequestGenerator::new(&bases).generate(class),
      }
    })?);

    Ok(files)
  }
}

fn emit_module(
  dir: &Path,
  classes: &ClassSet,
  render: impl Fn(&ClassDefinition) -> anyhow::Result<String>,
) -> anyhow::Result<Vec<GeneratedFile>> {
  let mut files = vec![GeneratedFile {
    path: dir.join("mod.rs"),
    contents: ModFileGenerator::classes(classes)?,
  }];

  for class in classes {
    let contents = render(class).with_context(|| format!("failed to render class {}", class.name))?;
    files.push(GeneratedFile {
      path: dir.join(format!("{}.rs", to_module_name(&class.name))),
      contents,
    });
  }

  Ok(files)
}

/// Names of the base classes, as found among the support entries of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SupportNames {
  pub(crate) model: String,
  pub(crate) request: String,
  pub(crate) client: String,
}

impl SupportNames {
  pub(crate) fn find(models: &ClassSet, requests: &ClassSet) -> Self {
    let find = |template: SupportTemplate, fallback: &str| {
      models
        .iter()
        .chain(requests)
        .find(|class| class.kind == ClassKind::Support(template))
        .map_or_else(|| fallback.to_string(), |class| class.name.clone())
    };

    let defaults = BaseClasses::default();
    Self {
      model: find(SupportTemplate::Model, &defaults.model),
      request: find(SupportTemplate::Request, &defaults.request),
      client: find(SupportTemplate::Client, &defaults.client),
    }
  }
}

/// Parses `tokens` as a file and pretty-prints it under the generated banner.
pub(crate) fn render_file(tokens: &TokenStream) -> anyhow::Result<String> {
  let banner = format!(" {GENERATED_BANNER}");
  let code = quote! {
    #![doc = #banner]

    #tokens
  };

  let syntax_tree = syn::parse2::<syn::File>(code).context("generated code is not valid Rust")?;
  Ok(prettyplease::unparse(&syntax_tree))
}

pub(crate) fn generate_docs(lines: &[String]) -> TokenStream {
  let doc_lines: Vec<TokenStream> = lines
    .iter()
    .filter(|line| line.as_str() != GENERATED_BANNER)
    .map(|line| {
      let line = format!(" {line}");
      quote! { #[doc = #line] }
    })
    .collect();
  quote! { #(#doc_lines)* }
}
