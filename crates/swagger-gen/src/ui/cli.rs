use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "swagger-gen")]
#[command(author, version, about = "Swagger 2.0 to model and request class generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Swagger document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate model and request classes from a Swagger document
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the Swagger YAML or JSON document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Namespace of the generated classes, e.g. `Acme::PetStore`
  #[arg(short, long, value_name = "NAMESPACE")]
  pub namespace: String,

  /// Directory the generated tree is written to
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Keep path parameters in class names, e.g. `GetUsersIdPosts` instead of `GetUsersPosts`
  #[arg(long, default_value_t = false)]
  pub more_specificity: bool,

  /// Name of the base model class
  #[arg(long, value_name = "NAME")]
  pub model_base: Option<String>,

  /// Name of the base request class
  #[arg(long, value_name = "NAME")]
  pub request_base: Option<String>,

  /// Name of the client class
  #[arg(long, value_name = "NAME")]
  pub client_base: Option<String>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every operation with the request class it generates
  Operations {
    /// Path to the Swagger YAML or JSON document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Keep path parameters in class names
    #[arg(long, default_value_t = false)]
    more_specificity: bool,
  },
}
