use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::{GeneratedFile, RustBackend},
    config::{BaseClasses, GenerationConfig},
    naming::paths::PathStrategy,
    orchestrator::{GenerationStats, Orchestrator},
  },
  ui::{Colors, GenerateCommand},
  utils::spec::{SpecFormat, SpecLoader},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub generation: GenerationConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      namespace,
      output,
      more_specificity,
      model_base,
      request_base,
      client_base,
      verbose,
      quiet,
    } = command;

    if namespace.trim().is_empty() {
      anyhow::bail!("Namespace (-n) must not be empty");
    }

    let defaults = BaseClasses::default();
    let base_classes = BaseClasses {
      model: model_base.unwrap_or(defaults.model),
      request: request_base.unwrap_or(defaults.request),
      client: client_base.unwrap_or(defaults.client),
    };

    let generation = GenerationConfig::builder()
      .namespace(namespace)
      .path_strategy(PathStrategy::from_flag(more_specificity))
      .base_classes(base_classes)
      .build();

    Ok(Self {
      input,
      output,
      generation,
      verbose,
      quiet,
    })
  }

  async fn write_files(&self, files: &[GeneratedFile]) -> anyhow::Result<()> {
    for file in files {
      let path = self.output.join(&file.path);
      if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
          .await
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      tokio::fs::write(&path, &file.contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading Swagger document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_format(&self, format: SpecFormat) {
    self.stat("Format:", format.to_string());
  }

  fn log_generating(&self) {
    let strategy = match self.config.generation.path_strategy {
      PathStrategy::DropParameters => "",
      PathStrategy::MoreSpecificity => " (keeping path parameters in class names)",
    };
    self.info(
      &format!("Generating classes in {}{strategy}...", self.config.generation.namespace)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    self.stat("Models generated:", stats.models_generated.to_string());
    self.stat("Requests generated:", stats.requests_generated.to_string());
    self.stat("Support classes:", stats.support_classes.to_string());
    self.stat("Files:", stats.files_generated.to_string());
  }

  fn print_files(&self, files: &[GeneratedFile]) {
    if !self.config.verbose || self.config.quiet {
      return;
    }

    for file in files {
      println!(
        "              {}",
        file.path.display().to_string().with(self.colors.accent())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated classes".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let loader = SpecLoader::open(&config.input).await?;
  logger.log_format(loader.format());
  let document = loader.parse()?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(document, config.generation.clone());
  let (files, stats) = orchestrator
    .emit(&RustBackend)
    .with_context(|| format!("failed to generate classes from {}", config.input.display()))?;
  logger.print_statistics(&stats);
  logger.print_files(&files);

  logger.log_writing();
  config.write_files(&files).await?;

  logger.log_success();
  Ok(())
}
