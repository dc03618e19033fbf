use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use strum::Display;

use crate::generator::document::SchemaDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SpecFormat {
  #[default]
  Yaml,
  Json,
}

impl SpecFormat {
  /// Anything that is not `.json` is read as YAML, which also accepts JSON text.
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    if ext.eq_ignore_ascii_case("json") {
      Self::Json
    } else {
      Self::Yaml
    }
  }
}

/// Memory-maps a Swagger document and parses it into a [`SchemaDocument`].
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SpecFormat::default(), SpecFormat::from_extension);

    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn format(&self) -> SpecFormat {
    self.format
  }

  pub fn parse(&self) -> anyhow::Result<SchemaDocument> {
    let document = match self.format {
      SpecFormat::Json => SchemaDocument::from_json_slice(self.file.as_slice())?,
      SpecFormat::Yaml => {
        let content = std::str::from_utf8(self.file.as_slice()).context("document is not valid UTF-8")?;
        SchemaDocument::from_yaml_str(content)?
      }
    };
    Ok(document)
  }
}
