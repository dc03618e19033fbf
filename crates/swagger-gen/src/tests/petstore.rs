//! End to end runs over `fixtures/petstore.yaml`.

use std::path::PathBuf;

use crate::{
  generator::{
    ast::{ClassKind, ResponseType},
    codegen::RustBackend,
    config::GenerationConfig,
    document::SchemaDocument,
    errors::GenerationError,
    naming::paths::PathStrategy,
    orchestrator::{GenerationStats, Orchestrator},
  },
  ui::{Colors, colors::Theme, commands::GenerateConfig},
};

const PETSTORE: &str = include_str!("../../fixtures/petstore.yaml");

fn orchestrator(path_strategy: PathStrategy) -> Orchestrator {
  let document = SchemaDocument::from_yaml_str(PETSTORE).unwrap();
  let config = GenerationConfig::builder()
    .namespace("Acme::PetStore")
    .path_strategy(path_strategy)
    .build();
  Orchestrator::new(document, config)
}

#[test]
fn test_petstore_classes() {
  let classes = orchestrator(PathStrategy::DropParameters).generate().unwrap();

  let models: Vec<&str> = classes.models.names().collect();
  assert_eq!(models, ["SwaggerModel", "Category", "Tag", "Pet", "Dog", "Pets"]);

  let requests: Vec<&str> = classes.requests.names().collect();
  assert_eq!(
    requests,
    [
      "SwaggerRequest",
      "SwaggerClient",
      "PostPet",
      "GetPetFindByStatus",
      "GetPet",
      "DeletePet",
      "GetStoreInventory",
    ]
  );

  let pets = classes.models.get("Pets").unwrap();
  assert_eq!(pets.extends.as_deref(), Some("Pet"));
  assert!(pets.properties.is_empty());
}

#[test]
fn test_petstore_request_bindings() {
  let classes = orchestrator(PathStrategy::DropParameters).generate().unwrap();

  let get_pet = classes.requests.get("GetPet").unwrap();
  assert_eq!(get_pet.constants["URI"], "/v2/pet");
  assert_eq!(get_pet.constants["METHOD"], "GET");
  let ClassKind::Request(binding) = &get_pet.kind else {
    panic!("GetPet is not a request");
  };
  assert_eq!(binding.path_param_names(), ["petId"]);
  assert_eq!(binding.response_map["200"], ResponseType::Model("Pet".to_string()));

  let find = classes.requests.get("GetPetFindByStatus").unwrap();
  let ClassKind::Request(binding) = &find.kind else {
    panic!("GetPetFindByStatus is not a request");
  };
  assert_eq!(binding.query_param_names(), ["status", "limit"]);
  assert_eq!(binding.response_map["200"], ResponseType::ModelArray("Pet".to_string()));
  assert_eq!(find.comment.len(), 1);

  let delete = classes.requests.get("DeletePet").unwrap();
  let ClassKind::Request(binding) = &delete.kind else {
    panic!("DeletePet is not a request");
  };
  assert!(binding.query_params.is_empty());
  assert!(binding.body_param.is_none());

  let inventory = classes.requests.get("GetStoreInventory").unwrap();
  let ClassKind::Request(binding) = &inventory.kind else {
    panic!("GetStoreInventory is not a request");
  };
  assert_eq!(binding.response_map["200"], ResponseType::Empty);
  assert_eq!(binding.success_codes().count(), 1);
}

#[test]
fn test_petstore_more_specificity() {
  let classes = orchestrator(PathStrategy::MoreSpecificity).generate().unwrap();

  assert!(classes.requests.contains("GetPetPetId"));
  assert!(classes.requests.contains("DeletePetPetId"));
  assert!(!classes.requests.contains("GetPet"));
  assert_eq!(classes.requests.get("GetPetPetId").unwrap().constants["URI"], "/v2/pet/petId");
}

#[test]
fn test_petstore_stats() {
  let (files, stats) = orchestrator(PathStrategy::DropParameters).emit(&RustBackend).unwrap();

  assert_eq!(
    stats,
    GenerationStats {
      models_generated: 5,
      requests_generated: 5,
      support_classes: 3,
      files_generated: files.len(),
    }
  );
  // namespace modules, then models and requests with their mod.rs
  assert_eq!(files.len(), 2 + (1 + 6) + (1 + 7));

  for file in &files {
    assert!(
      syn::parse_file(&file.contents).is_ok(),
      "{} does not parse",
      file.path.display()
    );
  }
}

#[test]
fn test_unresolved_reference_aborts_run() {
  let broken = PETSTORE.replace("$ref: \"#/definitions/Category\"", "$ref: \"#/definitions/Kind\"");
  let document = SchemaDocument::from_yaml_str(&broken).unwrap();
  let config = GenerationConfig::builder().namespace("Acme").build();

  let error = Orchestrator::new(document, config).generate().unwrap_err();
  assert!(matches!(
    error,
    GenerationError::UnresolvedReference { ref reference, .. } if reference == "Kind"
  ));
}

#[tokio::test]
async fn test_generate_writes_tree() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("petstore.yaml");
  tokio::fs::write(&input, PETSTORE).await.unwrap();

  let output = dir.path().join("out");
  let config = GenerateConfig {
    input,
    output: output.clone(),
    generation: GenerationConfig::builder().namespace("Acme::PetStore").build(),
    verbose: false,
    quiet: true,
  };

  crate::ui::commands::generate_code(config, &Colors::new(false, Theme::Dark))
    .await
    .unwrap();

  let root = output.join(PathBuf::from("acme/pet_store"));
  assert!(output.join("acme/mod.rs").is_file());
  assert!(root.join("mod.rs").is_file());
  assert!(root.join("models/pet.rs").is_file());
  assert!(root.join("requests/get_pet_find_by_status.rs").is_file());

  let pet = std::fs::read_to_string(root.join("models/pet.rs")).unwrap();
  assert!(pet.starts_with("//! ** This file was generated automatically"));
  assert!(pet.contains("pub struct Pet {"));
}
