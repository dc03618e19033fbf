//! Serde mirror of the document as written on disk.
//!
//! Nothing here is validated beyond what serde enforces; [`super::SchemaDocument`]
//! turns these shapes into typed nodes.

use std::fmt;

use indexmap::IndexMap;
use serde::{
  Deserialize, Deserializer,
  de::{self, IgnoredAny, MapAccess, Visitor},
};

use super::{HttpMethod, ParameterLocation};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDocument {
  #[serde(default, rename = "basePath")]
  pub base_path: Option<String>,
  #[serde(default)]
  pub definitions: Option<IndexMap<String, RawSchema>>,
  #[serde(default)]
  pub paths: Option<IndexMap<String, RawPathItem>>,
  /// Reusable parameters targeted by `#/parameters/<name>`.
  #[serde(default)]
  pub parameters: Option<IndexMap<String, RawParameter>>,
}

/// A path entry: shared parameters plus one operation per HTTP method, in the
/// order they are written. Extension keys are skipped.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawPathItem {
  pub parameters: Vec<RawParameterEntry>,
  pub operations: IndexMap<HttpMethod, RawOperation>,
}

impl<'de> Deserialize<'de> for RawPathItem {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct PathItemVisitor;

    impl<'de> Visitor<'de> for PathItemVisitor {
      type Value = RawPathItem;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a path item object")
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut item = RawPathItem::default();
        while let Some(key) = map.next_key::<String>()? {
          if key == "parameters" {
            item.parameters = map.next_value()?;
          } else if let Ok(method) = key.parse::<HttpMethod>() {
            let operation: RawOperation = map.next_value()?;
            item.operations.insert(method, operation);
          } else {
            map.next_value::<IgnoredAny>()?;
          }
        }
        Ok(item)
      }
    }

    deserializer.deserialize_map(PathItemVisitor)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawSchema {
  #[serde(default, rename = "$ref")]
  pub reference: Option<String>,
  #[serde(default, rename = "type")]
  pub schema_type: Option<String>,
  #[serde(default)]
  pub items: Option<Box<RawSchema>>,
  #[serde(default, rename = "allOf")]
  pub all_of: Vec<RawSchema>,
  #[serde(default)]
  pub required: Vec<String>,
  #[serde(default)]
  pub properties: IndexMap<String, RawSchema>,
  #[serde(default, alias = "x-nullable", deserialize_with = "flexible_bool")]
  pub nullable: Option<bool>,
  #[serde(default)]
  pub description: Option<String>,
}

/// A parameter list entry: either written out or a `$ref` into the
/// document's top-level `parameters`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawParameterEntry {
  Reference {
    #[serde(rename = "$ref")]
    reference: String,
  },
  Inline(RawParameter),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawParameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "flexible_bool")]
  pub required: Option<bool>,
  #[serde(default, rename = "type")]
  pub schema_type: Option<String>,
  #[serde(default)]
  pub items: Option<Box<RawSchema>>,
  #[serde(default)]
  pub schema: Option<RawSchema>,
  #[serde(default, alias = "x-nullable", deserialize_with = "flexible_bool")]
  pub nullable: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawOperation {
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, rename = "operationId")]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub parameters: Vec<RawParameterEntry>,
  #[serde(default)]
  pub responses: IndexMap<StatusKey, RawResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawResponse {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub schema: Option<RawSchema>,
  #[serde(default, rename = "$ref")]
  pub reference: Option<String>,
}

/// Response map key. YAML documents commonly write status codes as bare
/// integers, so both strings and numbers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct StatusKey(pub String);

impl<'de> Deserialize<'de> for StatusKey {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct StatusKeyVisitor;

    impl Visitor<'_> for StatusKeyVisitor {
      type Value = StatusKey;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a status code as string or integer")
      }

      fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(StatusKey(value.to_string()))
      }

      fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(StatusKey(value.to_string()))
      }

      fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(StatusKey(value.to_string()))
      }
    }

    deserializer.deserialize_any(StatusKeyVisitor)
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
  Bool(bool),
  Text(String),
}

/// Accepts `true`, `false` and their quoted spellings.
fn flexible_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<BoolOrString>::deserialize(deserializer)?;
  Ok(value.map(|value| match value {
    BoolOrString::Bool(flag) => flag,
    BoolOrString::Text(text) => text.trim().eq_ignore_ascii_case("true"),
  }))
}
