use std::io::Write;

use crate::utils::spec::{SpecFormat, SpecLoader};

#[test]
fn test_format_from_extension() {
  assert_eq!(SpecFormat::from_extension("json"), SpecFormat::Json);
  assert_eq!(SpecFormat::from_extension("JSON"), SpecFormat::Json);
  assert_eq!(SpecFormat::from_extension("yaml"), SpecFormat::Yaml);
  assert_eq!(SpecFormat::from_extension("yml"), SpecFormat::Yaml);
  assert_eq!(SpecFormat::from_extension("txt"), SpecFormat::Yaml);
}

#[test]
fn test_format_display() {
  assert_eq!(SpecFormat::Json.to_string(), "JSON");
  assert_eq!(SpecFormat::Yaml.to_string(), "YAML");
}

#[tokio::test]
async fn test_loads_yaml_document() {
  let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
  writeln!(
    file,
    "basePath: /api\ndefinitions:\n  Pet:\n    type: object\n    properties:\n      name:\n        type: string"
  )
  .unwrap();

  let loader = SpecLoader::open(file.path()).await.unwrap();
  assert_eq!(loader.format(), SpecFormat::Yaml);

  let document = loader.parse().unwrap();
  assert_eq!(document.base_path, "/api");
  assert!(document.has_definition("Pet"));
}

#[tokio::test]
async fn test_loads_json_document() {
  let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
  write!(
    file,
    r#"{{"paths": {{"/pets": {{"get": {{"responses": {{"200": {{"description": "ok"}}}}}}}}}}}}"#
  )
  .unwrap();

  let loader = SpecLoader::open(file.path()).await.unwrap();
  assert_eq!(loader.format(), SpecFormat::Json);

  let document = loader.parse().unwrap();
  assert_eq!(document.operations().count(), 1);
}

#[tokio::test]
async fn test_missing_file_fails() {
  let dir = tempfile::tempdir().unwrap();
  assert!(SpecLoader::open(&dir.path().join("missing.yaml")).await.is_err());
}
