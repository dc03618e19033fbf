use super::{
  constants::PATH_SEPARATOR,
  identifiers::{capitalize, drop_trailing_char, path_to_identifier},
};

/// How a path template is turned into the fragment used for class names and URIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStrategy {
  /// Segments holding a `{param}` placeholder are dropped entirely.
  #[default]
  DropParameters,
  /// Every segment is kept with its braces stripped, so routes differing only
  /// by parameter name produce distinct classes.
  MoreSpecificity,
}

impl PathStrategy {
  pub fn from_flag(more_specificity: bool) -> Self {
    if more_specificity {
      Self::MoreSpecificity
    } else {
      Self::DropParameters
    }
  }

  /// Normalizes `template` into a fragment without the leading separator.
  pub fn normalize(self, template: &str) -> String {
    let trimmed = template.strip_prefix(PATH_SEPARATOR).unwrap_or(template);
    let segments = trimmed.split(PATH_SEPARATOR);

    let kept: Vec<String> = match self {
      Self::DropParameters => segments
        .filter(|segment| !segment.contains('{'))
        .map(str::to_string)
        .collect(),
      Self::MoreSpecificity => segments.map(|segment| segment.replace(['{', '}'], "")).collect(),
    };

    kept.join("/")
  }
}

/// `get` + `users/posts` -> `GetUsersPosts`.
pub(crate) fn request_class_name(method: &str, normalized_path: &str) -> String {
  format!(
    "{}{}",
    capitalize(&method.to_lowercase()),
    path_to_identifier(normalized_path)
  )
}

/// Joins the document base path with a normalized fragment. An empty base path
/// yields a rooted fragment.
pub(crate) fn request_uri(base_path: &str, normalized_path: &str) -> String {
  let base = drop_trailing_char(base_path, PATH_SEPARATOR);
  format!("{base}{PATH_SEPARATOR}{normalized_path}")
}
