//! Typed view of a Swagger 2.0 document.
//!
//! Parsing happens in two steps: serde reads the text into the shapes in
//! [`raw`], then [`SchemaDocument::from_raw`] validates every schema node and
//! produces the immutable document the builders walk.

pub(crate) mod raw;
pub mod schema;


use indexmap::IndexMap;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

pub use self::schema::{ObjectSchema, ScalarType, SchemaKind, SchemaNode};
use self::{
  raw::{RawDocument, RawOperation, RawParameter, RawParameterEntry, RawPathItem, RawResponse, RawSchema},
  schema::reference_name,
};
use super::errors::{GenerationError, GenerationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
}

impl HttpMethod {
  pub fn as_upper(self) -> String {
    self.as_ref().to_ascii_uppercase()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ParameterLocation {
  Path,
  Query,
  Body,
  Header,
  FormData,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
  pub base_path: String,
  pub definitions: IndexMap<String, SchemaNode>,
  pub paths: IndexMap<String, PathItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
  /// Parameters shared by every operation under this path.
  pub parameters: Vec<Parameter>,
  pub operations: IndexMap<HttpMethod, Operation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
  pub summary: Option<String>,
  pub description: Option<String>,
  pub operation_id: Option<String>,
  pub parameters: Vec<Parameter>,
  pub responses: IndexMap<String, Response>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
  pub name: String,
  pub location: ParameterLocation,
  pub required: bool,
  pub description: Option<String>,
  /// `None` only for a body parameter written without a schema.
  pub schema: Option<SchemaNode>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
  pub description: Option<String>,
  pub schema: Option<SchemaNode>,
}

impl SchemaDocument {
  pub fn from_json_slice(bytes: &[u8]) -> GenerationResult<Self> {
    Self::from_raw(serde_json::from_slice(bytes)?)
  }

  pub fn from_yaml_str(text: &str) -> GenerationResult<Self> {
    Self::from_raw(serde_yaml::from_str(text)?)
  }

  pub fn from_json_value(value: serde_json::Value) -> GenerationResult<Self> {
    Self::from_raw(serde_json::from_value(value)?)
  }

  pub(crate) fn from_raw(raw: RawDocument) -> GenerationResult<Self> {
    let definitions = raw
      .definitions
      .unwrap_or_default()
      .iter()
      .map(|(name, schema)| Ok((name.clone(), SchemaNode::parse(schema, &format!("definitions.{name}"))?)))
      .collect::<GenerationResult<IndexMap<_, _>>>()?;

    let shared = raw.parameters.unwrap_or_default();
    let paths = raw
      .paths
      .unwrap_or_default()
      .iter()
      .map(|(path, item)| Ok((path.clone(), PathItem::parse(path, item, &shared)?)))
      .collect::<GenerationResult<IndexMap<_, _>>>()?;

    Ok(Self {
      base_path: raw.base_path.unwrap_or_default(),
      definitions,
      paths,
    })
  }

  pub fn has_definition(&self, name: &str) -> bool {
    self.definitions.contains_key(name)
  }

  /// Every `(path, method, operation)` triple in document order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
    self.paths.iter().flat_map(|(path, item)| {
      item
        .operations
        .iter()
        .map(move |(method, operation)| (path.as_str(), *method, operation))
    })
  }
}

impl PathItem {
  fn parse(path: &str, raw: &RawPathItem, shared: &IndexMap<String, RawParameter>) -> GenerationResult<Self> {
    let parameters = raw
      .parameters
      .iter()
      .map(|entry| Parameter::resolve(entry, shared, &format!("paths.{path}")))
      .collect::<GenerationResult<Vec<_>>>()?;

    let operations = raw
      .operations
      .iter()
      .map(|(method, operation)| {
        let context = format!("paths.{path}.{method}");
        Ok((*method, Operation::parse(operation, shared, &context)?))
      })
      .collect::<GenerationResult<IndexMap<_, _>>>()?;

    Ok(Self { parameters, operations })
  }
}

impl Operation {
  fn parse(raw: &RawOperation, shared: &IndexMap<String, RawParameter>, context: &str) -> GenerationResult<Self> {
    let parameters = raw
      .parameters
      .iter()
      .map(|entry| Parameter::resolve(entry, shared, context))
      .collect::<GenerationResult<Vec<_>>>()?;

    let responses = raw
      .responses
      .iter()
      .map(|(status, response)| {
        let context = format!("{context}.responses.{}", status.0);
        Ok((status.0.clone(), Response::parse(response, &context)?))
      })
      .collect::<GenerationResult<IndexMap<_, _>>>()?;

    Ok(Self {
      summary: raw.summary.clone(),
      description: raw.description.clone(),
      operation_id: raw.operation_id.clone(),
      parameters,
      responses,
    })
  }
}

impl Parameter {
  fn resolve(
    entry: &RawParameterEntry,
    shared: &IndexMap<String, RawParameter>,
    context: &str,
  ) -> GenerationResult<Self> {
    match entry {
      RawParameterEntry::Inline(raw) => Self::parse(raw, context),
      RawParameterEntry::Reference { reference } => {
        let location = format!("{context}.parameters");
        let name = reference_name(reference)
          .ok_or_else(|| GenerationError::malformed(&location, format!("'$ref' value '{reference}' names nothing")))?;
        let raw = shared
          .get(&name)
          .ok_or_else(|| GenerationError::unresolved(&location, name.as_str()))?;
        Self::parse(raw, context)
      }
    }
  }

  fn parse(raw: &RawParameter, context: &str) -> GenerationResult<Self> {
    let context = format!("{context}.parameters.{}", raw.name);

    let schema = if raw.location == ParameterLocation::Body {
      raw
        .schema
        .as_ref()
        .map(|schema| SchemaNode::parse(schema, &context))
        .transpose()?
    } else {
      let inline = RawSchema {
        schema_type: Some(raw.schema_type.clone().unwrap_or_else(|| ScalarType::Null.to_string())),
        items: raw.items.clone(),
        nullable: raw.nullable,
        description: raw.description.clone(),
        ..RawSchema::default()
      };
      Some(SchemaNode::parse(&inline, &context)?)
    };

    Ok(Self {
      name: raw.name.clone(),
      location: raw.location,
      required: raw.required.unwrap_or(false),
      description: raw.description.clone(),
      schema,
    })
  }
}

impl Response {
  fn parse(raw: &RawResponse, context: &str) -> GenerationResult<Self> {
    let schema = match (&raw.reference, &raw.schema) {
      (Some(reference), _) => {
        let name = reference_name(reference)
          .ok_or_else(|| GenerationError::malformed(context, format!("'$ref' value '{reference}' names nothing")))?;
        Some(SchemaNode::reference(name))
      }
      (None, Some(schema)) => Some(SchemaNode::parse(schema, context)?),
      (None, None) => None,
    };

    Ok(Self {
      description: raw.description.clone(),
      schema,
    })
  }
}
