use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

use super::constants::NAMESPACE_SEPARATORS;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen", "self", "Self",
  ]
  .into_iter()
  .collect()
});

static RESERVED_PASCAL_CASE: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  ["Box", "Clone", "Copy", "Default", "Option", "Result", "String", "Vec"]
    .into_iter()
    .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Removes a single trailing `ch`, if present.
pub(crate) fn drop_trailing_char(input: &str, ch: char) -> &str {
  input.strip_suffix(ch).unwrap_or(input)
}

/// Upper-cases the first character and leaves the rest untouched.
pub(crate) fn capitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn lower_first(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Converts a path fragment such as `users/posts` or `pet-store/items` into
/// `UsersPosts` / `PetStoreItems`. Empty segments vanish.
pub(crate) fn path_to_identifier(path: &str) -> String {
  path.split(['/', '-']).map(capitalize).collect()
}

/// `categories -> category`, `tags -> tag`, anything else is returned unchanged.
///
/// Words ending in `ss` are left alone so that applying the rule twice never
/// strips more than once.
pub(crate) fn singularize(word: &str) -> String {
  if let Some(stem) = word.strip_suffix("ies")
    && !stem.is_empty()
  {
    return format!("{stem}y");
  }

  if word.len() > 1
    && !word.ends_with("ss")
    && let Some(stem) = word.strip_suffix('s')
  {
    return stem.to_string();
  }

  word.to_string()
}

/// `pet_id -> petId`, `_links -> links`, `meta.count -> metaCount`.
pub(crate) fn snake_to_camel(input: &str) -> String {
  let joined: String = input.split(['_', '.']).map(capitalize).collect();
  lower_first(&joined)
}

/// Stem shared by the generated getter and setter of a property.
pub(crate) fn accessor_name(property: &str) -> String {
  capitalize(&snake_to_camel(property))
}

/// Transliterates to ASCII, replaces invalid characters with underscores and
/// trims the result.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Converts a class name into a valid Rust type name.
///
/// Names without separators keep their capitalization (`GetUsersPosts`),
/// anything else is converted to `PascalCase`. Names that would shadow a
/// prelude type get a `Type` suffix.
pub(crate) fn to_rust_type_name(name: &str) -> String {
  let sanitized = sanitize(name);
  if sanitized.is_empty() {
    return "Unnamed".to_string();
  }

  let mut ident = if sanitized.contains('_') {
    sanitized.to_pascal_case()
  } else {
    capitalize(&sanitized)
  };

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  if ident == "Self" || RESERVED_PASCAL_CASE.contains(ident.as_str()) {
    ident.push_str("Type");
  }

  ident
}

/// Converts a property or parameter name into a valid Rust field name.
pub(crate) fn to_rust_field_name(name: &str) -> String {
  let mut ident = sanitize(name).to_snake_case();

  if ident.is_empty() {
    return "_".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  // path keywords cannot be raw identifiers
  if matches!(ident.as_str(), "self" | "super" | "crate") {
    ident.push('_');
    return ident;
  }

  if FORBIDDEN_IDENTIFIERS.contains(ident.as_str()) {
    return format!("r#{ident}");
  }

  ident
}

/// `get` + `PhotoUrls` -> `get_photo_urls`. The prefix keeps keywords such as
/// `type` usable without escaping.
pub(crate) fn to_method_name(prefix: &str, stem: &str) -> String {
  let stem = sanitize(stem).to_snake_case();
  if stem.is_empty() {
    prefix.to_string()
  } else {
    format!("{prefix}_{stem}")
  }
}

/// Module and file stem for a class; keywords get a trailing underscore since
/// raw identifiers cannot name files.
pub(crate) fn to_module_name(class_name: &str) -> String {
  let ident = to_rust_field_name(class_name);
  match ident.strip_prefix("r#") {
    Some(keyword) => format!("{keyword}_"),
    None => ident,
  }
}

/// Splits `Acme::PetStore`, `Acme\PetStore` or `acme.pet_store` into module
/// names.
pub(crate) fn namespace_segments(namespace: &str) -> Vec<String> {
  let mut normalized = namespace.to_string();
  for separator in NAMESPACE_SEPARATORS {
    normalized = normalized.replace(separator, "/");
  }

  normalized
    .split('/')
    .filter(|segment| !segment.trim().is_empty())
    .map(to_module_name)
    .collect()
}
