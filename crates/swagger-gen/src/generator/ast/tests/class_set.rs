use indexmap::IndexMap;

use crate::generator::ast::{ClassDefinition, ClassKind, ClassSet, SupportTemplate};

fn model(name: &str, comment: &str) -> ClassDefinition {
  ClassDefinition {
    name: name.to_string(),
    extends: Some("SwaggerModel".to_string()),
    comment: vec![comment.to_string()],
    properties: vec![],
    constants: IndexMap::new(),
    kind: ClassKind::Model,
  }
}

#[test]
fn test_later_insert_overwrites_in_place() {
  let mut set = ClassSet::new();
  assert!(set.insert(model("Pet", "first")).is_none());
  set.insert(model("Tag", "tag"));
  let replaced = set.insert(model("Pet", "second"));

  assert_eq!(replaced.unwrap().comment, ["first"]);
  assert_eq!(set.len(), 2);
  assert_eq!(set.names().collect::<Vec<_>>(), ["Pet", "Tag"]);
  assert_eq!(set.get("Pet").unwrap().comment, ["second"]);
}

#[test]
fn test_generated_skips_support_templates() {
  let mut set = ClassSet::new();
  set.insert(ClassDefinition::support("SwaggerModel", SupportTemplate::Model));
  set.insert(model("Pet", "pet"));

  assert!(set.contains("SwaggerModel"));
  assert!(set.get("SwaggerModel").unwrap().is_support());
  let generated: Vec<&str> = set.generated().map(|class| class.name.as_str()).collect();
  assert_eq!(generated, ["Pet"]);
}
