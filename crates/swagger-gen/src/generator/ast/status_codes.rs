use std::{convert::Infallible, str::FromStr};

/// A response map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
  Exact(u16),
  /// `2XX` style ranges, holding the leading digit.
  Wildcard(u8),
  Default,
  Unknown,
}

impl FromStr for StatusCode {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("default") {
      return Ok(Self::Default);
    }

    if let Ok(code) = s.parse::<u16>() {
      return Ok(Self::Exact(code));
    }

    let bytes = s.as_bytes();
    if bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1..].eq_ignore_ascii_case(b"XX") {
      return Ok(Self::Wildcard(bytes[0] - b'0'));
    }

    Ok(Self::Unknown)
  }
}

impl StatusCode {
  pub fn parse(s: &str) -> Self {
    match s.parse() {
      Ok(code) => code,
      Err(never) => match never {},
    }
  }

  /// Informational, success and redirection codes (1 through 399).
  pub const fn is_success(self) -> bool {
    match self {
      Self::Exact(code) => code >= 1 && code <= 399,
      Self::Wildcard(digit) => digit >= 1 && digit <= 3,
      Self::Default | Self::Unknown => false,
    }
  }
}
