use crate::generator::{
  ast::{DefaultValue, TypeDescriptor},
  document::ScalarType,
};

#[test]
fn test_names() {
  assert_eq!(TypeDescriptor::scalar(ScalarType::Integer).name(), "integer");
  assert_eq!(TypeDescriptor::reference("Pet").name(), "Pet");
  assert_eq!(TypeDescriptor::array(TypeDescriptor::reference("Pet")).name(), "array");
}

#[test]
fn test_display_spelling() {
  assert_eq!(TypeDescriptor::scalar(ScalarType::Number).to_string(), "float");
  assert_eq!(
    TypeDescriptor::array(TypeDescriptor::scalar(ScalarType::String)).to_string(),
    "string[]"
  );
  assert_eq!(
    TypeDescriptor::scalar(ScalarType::Integer).with_nullable(true).to_string(),
    "?int"
  );
}

#[test]
fn test_default_values_follow_type() {
  let cases = [
    (TypeDescriptor::scalar(ScalarType::String), Some(DefaultValue::EmptyString)),
    (TypeDescriptor::scalar(ScalarType::Integer), Some(DefaultValue::Zero)),
    (TypeDescriptor::scalar(ScalarType::Number), Some(DefaultValue::ZeroFloat)),
    (TypeDescriptor::scalar(ScalarType::Boolean), Some(DefaultValue::False)),
    (TypeDescriptor::scalar(ScalarType::Null), Some(DefaultValue::Null)),
    (
      TypeDescriptor::array(TypeDescriptor::reference("Tag")),
      Some(DefaultValue::EmptyArray),
    ),
    (TypeDescriptor::reference("Pet"), None),
    (TypeDescriptor::scalar(ScalarType::Object), None),
    (TypeDescriptor::reference("Pet").with_nullable(true), Some(DefaultValue::Null)),
    (TypeDescriptor::scalar(ScalarType::Object).with_nullable(true), Some(DefaultValue::Null)),
    (
      TypeDescriptor::scalar(ScalarType::String).with_nullable(true),
      Some(DefaultValue::EmptyString),
    ),
    (
      TypeDescriptor::scalar(ScalarType::Integer).with_nullable(true),
      Some(DefaultValue::Zero),
    ),
    (
      TypeDescriptor::array(TypeDescriptor::scalar(ScalarType::String)).with_nullable(true),
      Some(DefaultValue::EmptyArray),
    ),
  ];
  for (ty, expected) in cases {
    assert_eq!(ty.default_value(), expected, "failed for {ty}");
  }
}

#[test]
fn test_default_value_display() {
  assert_eq!(DefaultValue::EmptyString.to_string(), "\"\"");
  assert_eq!(DefaultValue::ZeroFloat.to_string(), "0.0");
  assert_eq!(DefaultValue::EmptyArray.to_string(), "[]");
  assert_eq!(DefaultValue::Null.to_string(), "null");
}
