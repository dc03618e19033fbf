use std::path::PathBuf;

use clap::Parser;

use crate::ui::{Cli, Commands, ListCommands, colors::ColorMode};

#[test]
fn test_parse_generate() {
  let cli = Cli::try_parse_from([
    "swagger-gen",
    "generate",
    "-i",
    "swagger.yaml",
    "-n",
    "Acme::PetStore",
    "-o",
    "out",
    "--more-specificity",
    "--color",
    "never",
  ])
  .unwrap();

  assert_eq!(cli.color, ColorMode::Never);
  let Commands::Generate(command) = cli.command else {
    panic!("expected generate command");
  };
  assert_eq!(command.input, PathBuf::from("swagger.yaml"));
  assert_eq!(command.namespace, "Acme::PetStore");
  assert_eq!(command.output, PathBuf::from("out"));
  assert!(command.more_specificity);
  assert!(!command.verbose);
  assert_eq!(command.model_base, None);
}

#[test]
fn test_generate_requires_namespace() {
  let result = Cli::try_parse_from(["swagger-gen", "generate", "-i", "swagger.yaml", "-o", "out"]);
  assert!(result.is_err());
}

#[test]
fn test_parse_list_operations() {
  let cli = Cli::try_parse_from(["swagger-gen", "list", "operations", "--input", "swagger.json"]).unwrap();

  let Commands::List {
    list_command: ListCommands::Operations { input, more_specificity },
  } = cli.command
  else {
    panic!("expected list operations command");
  };
  assert_eq!(input, PathBuf::from("swagger.json"));
  assert!(!more_specificity);
}
