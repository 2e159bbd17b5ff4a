// crates/narasu/src/transliterate/key.rs

//! Transliterator keys: `source-target/scheme`, e.g. `rus-eng/BGN` or `Any-Latn/BGN`.

use std::fmt;
use std::str::FromStr;

use crate::errors::TransliterationError;

/// One side of a transform key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EndPoint {
  /// Wildcard source
  Any,
  /// ISO 639 language code (lowercase)
  Language(String),
  /// ISO 15924 script code (title case)
  Script(String),
}

impl EndPoint {
  /// Shorthand for a language end point.
  pub fn language(code: &str) -> Self {
    EndPoint::Language(code.to_ascii_lowercase())
  }

  /// Shorthand for a script end point.
  pub fn script(code: &str) -> Self {
    EndPoint::Script(title_case(code))
  }

  fn parse(raw: &str, key: &str) -> Result<Self, TransliterationError> {
    let invalid = |reason: &str| TransliterationError::InvalidKey {
      key: key.to_string(),
      reason: reason.to_string(),
    };
    if raw.eq_ignore_ascii_case("any") {
      return Ok(EndPoint::Any);
    }
    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
      return Err(invalid("end points must be ASCII letters"));
    }
    match raw.len() {
      2 | 3 => Ok(EndPoint::language(raw)),
      4 => Ok(EndPoint::script(raw)),
      _ => Err(invalid("end points are 2-3 letter languages or 4 letter scripts")),
    }
  }
}

impl fmt::Display for EndPoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EndPoint::Any => f.write_str("Any"),
      EndPoint::Language(code) | EndPoint::Script(code) => f.write_str(code),
    }
  }
}

fn title_case(code: &str) -> String {
  let mut chars = code.chars();
  match chars.next() {
    Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
    None => String::new(),
  }
}

/// Identifies a transliterator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformKey {
  source: EndPoint,
  target: EndPoint,
  scheme: Option<String>,
}

impl TransformKey {
  /// Builds a key from its parts.
  pub fn new(source: EndPoint, target: EndPoint, scheme: Option<&str>) -> Self {
    Self {
      source,
      target,
      scheme: scheme.map(str::to_string),
    }
  }

  /// Source end point.
  pub fn source(&self) -> &EndPoint {
    &self.source
  }

  /// Target end point.
  pub fn target(&self) -> &EndPoint {
    &self.target
  }

  /// Romanization scheme, if any.
  pub fn scheme(&self) -> Option<&str> {
    self.scheme.as_deref()
  }

  /// Same key with a different target.
  pub fn with_target(&self, target: EndPoint) -> Self {
    Self {
      target,
      ..self.clone()
    }
  }

  /// Whether this (registered) key serves a lookup.
  ///
  /// `Any` as the registered source accepts every source; a lookup without a
  /// scheme accepts every scheme. Schemes compare case-insensitively.
  pub fn serves(&self, source: &EndPoint, target: &EndPoint, scheme: Option<&str>) -> bool {
    let source_ok = self.source == EndPoint::Any || self.source == *source;
    let scheme_ok = match (scheme, self.scheme()) {
      (None, _) => true,
      (Some(wanted), Some(own)) => wanted.eq_ignore_ascii_case(own),
      (Some(_), None) => false,
    };
    source_ok && self.target == *target && scheme_ok
  }
}

impl FromStr for TransformKey {
  type Err = TransliterationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = s.trim();
    let (pair, scheme) = match key.split_once('/') {
      Some((pair, scheme)) if !scheme.trim().is_empty() => (pair, Some(scheme.trim())),
      Some(_) => {
        return Err(TransliterationError::InvalidKey {
          key: key.to_string(),
          reason: "empty scheme after '/'".to_string(),
        });
      }
      None => (key, None),
    };
    let Some((source, target)) = pair.split_once('-') else {
      return Err(TransliterationError::InvalidKey {
        key: key.to_string(),
        reason: "expected `source-target`".to_string(),
      });
    };
    Ok(Self::new(
      EndPoint::parse(source.trim(), key)?,
      EndPoint::parse(target.trim(), key)?,
      scheme,
    ))
  }
}

impl fmt::Display for TransformKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.source, self.target)?;
    if let Some(scheme) = &self.scheme {
      write!(f, "/{scheme}")?;
    }
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_and_display() {
    let key: TransformKey = "rus-eng/BGN".parse().unwrap();
    assert_eq!(key.source(), &EndPoint::language("rus"));
    assert_eq!(key.target(), &EndPoint::language("eng"));
    assert_eq!(key.scheme(), Some("BGN"));
    assert_eq!(key.to_string(), "rus-eng/BGN");

    let key: TransformKey = "any-LATN/BGN".parse().unwrap();
    assert_eq!(key.source(), &EndPoint::Any);
    assert_eq!(key.target(), &EndPoint::script("Latn"));
    assert_eq!(key.to_string(), "Any-Latn/BGN");

    let key: TransformKey = "zho-eng".parse().unwrap();
    assert_eq!(key.scheme(), None);
  }

  #[test]
  fn parse_rejects_malformed_keys() {
    for raw in ["", "rus", "rus-eng/", "r-eng", "rus-english", "ru1-eng"] {
      let err = raw.parse::<TransformKey>().unwrap_err();
      assert!(matches!(err, TransliterationError::InvalidKey { .. }), "raw={raw:?}");
    }
  }

  #[test]
  fn serves_lookup() {
    let bgn: TransformKey = "rus-eng/BGN".parse().unwrap();
    let eng = EndPoint::language("eng");
    assert!(bgn.serves(&EndPoint::language("rus"), &eng, Some("bgn")));
    assert!(bgn.serves(&EndPoint::language("rus"), &eng, None));
    assert!(!bgn.serves(&EndPoint::language("ukr"), &eng, Some("BGN")));
    assert!(!bgn.serves(&EndPoint::language("rus"), &eng, Some("GOST")));

    let any: TransformKey = "Any-Latn/BGN".parse().unwrap();
    assert!(any.serves(&EndPoint::language("ell"), &EndPoint::script("Latn"), Some("BGN")));
  }

  #[test]
  fn with_target_replaces_target_only() {
    let key: TransformKey = "rus-eng/BGN".parse().unwrap();
    assert_eq!(key.with_target(EndPoint::language("fra")).to_string(), "rus-fra/BGN");
  }
}
