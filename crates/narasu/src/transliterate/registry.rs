// crates/narasu/src/transliterate/registry.rs

//! Registry of transliterators by [`TransformKey`].
//!
//! Built-in transliterators are constructed on demand. Custom tables are JSON
//! files registered from configuration; they are read when first loaded and take
//! precedence over a built-in with the same key.
//!
//! ```json
//! {
//!   "mappings":   { "щ": "shch" },
//!   "positional": { "е": "ye" },
//!   "context":    "аеёиоуыэюя",
//!   "exceptions": { "Москва": "Moscow" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use super::tables::{
  ARA_BGN, ARA_KEY_TERMS, MapTable, RUS_BGN, RUS_GOST, RUS_KEY_TERMS, UKR_BGN, UKR_KEY_TERMS,
};
use super::transliterator::{AnyLatinTransliterator, ExceptionTransliterator, MapTransliterator};
use super::zho::{
  ChineseVariant, ChineseVariantTransliterator, PinyinStyle, PinyinTransliterator,
};
use super::{EndPoint, TransformKey, Transliterator};
use crate::errors::TransliterationError;

/// How a built-in transliterator is constructed.
#[derive(Debug, Clone, Copy)]
enum Builtin {
  Table(&'static MapTable),
  Variant(ChineseVariant),
  Pinyin(PinyinStyle),
  AnyLatin,
}

impl Builtin {
  fn build(self, key: TransformKey) -> Arc<dyn Transliterator> {
    match self {
      Builtin::Table(table) => Arc::new(MapTransliterator::new(key, table)),
      Builtin::Variant(variant) => Arc::new(ChineseVariantTransliterator::new(key, variant)),
      Builtin::Pinyin(style) => Arc::new(PinyinTransliterator::new(key, style)),
      Builtin::AnyLatin => Arc::new(AnyLatinTransliterator::new(key)),
    }
  }
}

/// On-disk format of a custom table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CustomTable {
  #[serde(default)]
  mappings: BTreeMap<String, String>,
  #[serde(default)]
  positional: BTreeMap<String, String>,
  #[serde(default)]
  context: String,
  #[serde(default)]
  exceptions: BTreeMap<String, String>,
}

/// Transliterators by key.
#[derive(Debug, Clone, Default)]
pub struct TransliteratorRegistry {
  builtin: BTreeMap<TransformKey, Builtin>,
  custom: BTreeMap<TransformKey, PathBuf>,
}

impl TransliteratorRegistry {
  /// Registry without any transliterator.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Registry with every built-in transliterator.
  pub fn builtin() -> Self {
    const ENTRIES: &[(EndPointSpec, EndPointSpec, &str, Builtin)] = &[
      (Lang("rus"), Lang("eng"), "BGN", Builtin::Table(&RUS_BGN)),
      (Lang("rus"), Lang("eng"), "GOST", Builtin::Table(&RUS_GOST)),
      (Lang("rus"), Lang("eng"), "KeyTerms", Builtin::Table(&RUS_KEY_TERMS)),
      (Lang("ukr"), Lang("eng"), "BGN", Builtin::Table(&UKR_BGN)),
      (Lang("ukr"), Lang("eng"), "KeyTerms", Builtin::Table(&UKR_KEY_TERMS)),
      (Lang("ara"), Lang("eng"), "BGN", Builtin::Table(&ARA_BGN)),
      (Lang("ara"), Lang("eng"), "KeyTerms", Builtin::Table(&ARA_KEY_TERMS)),
      (Lang("zho"), Script("Hans"), "Simplified", Builtin::Variant(ChineseVariant::Simplified)),
      (Lang("zho"), Script("Hant"), "Traditional", Builtin::Variant(ChineseVariant::Traditional)),
      (Lang("zho"), Lang("eng"), "Pinyin", Builtin::Pinyin(PinyinStyle::ToneMarks)),
      (Lang("zho"), Lang("eng"), "Pinyin-Numeric", Builtin::Pinyin(PinyinStyle::ToneNumbers)),
      (Lang("zho"), Lang("eng"), "Pinyin-NoTone", Builtin::Pinyin(PinyinStyle::NoTone)),
      (Lang("zho"), Lang("eng"), "Wade-Giles", Builtin::Pinyin(PinyinStyle::WadeGiles)),
      (
        Lang("zho"),
        Lang("eng"),
        "Wade-Giles-NoTone",
        Builtin::Pinyin(PinyinStyle::WadeGilesNoTone),
      ),
      (AnySource, Script("Latn"), "BGN", Builtin::AnyLatin),
    ];

    let mut registry = Self::empty();
    for (source, target, scheme, builtin) in ENTRIES {
      let key = TransformKey::new(source.end_point(), target.end_point(), Some(scheme));
      registry.builtin.insert(key, *builtin);
    }
    debug!(count = registry.builtin.len(), "built-in transliterators registered");
    registry
  }

  /// Registers a custom JSON table. The file is read on first [`load`](Self::load).
  pub fn register_table(&mut self, key: TransformKey, path: impl Into<PathBuf>) {
    let path = path.into();
    info!(key = %key, path = %path.display(), "custom transliteration table registered");
    self.custom.insert(key, path);
  }

  /// Whether `key` is registered (custom or built-in).
  pub fn contains(&self, key: &TransformKey) -> bool {
    self.custom.contains_key(key) || self.builtin.contains_key(key)
  }

  /// Every registered key, sorted and without duplicates.
  pub fn keys(&self) -> Vec<TransformKey> {
    let mut keys: Vec<TransformKey> =
      self.custom.keys().chain(self.builtin.keys()).cloned().collect();
    keys.sort();
    keys.dedup();
    keys
  }

  /// Keys serving a lookup; custom tables first.
  pub fn find(
    &self,
    source: &EndPoint,
    target: &EndPoint,
    scheme: Option<&str>,
  ) -> Vec<TransformKey> {
    let mut found: Vec<TransformKey> = Vec::new();
    for key in self.custom.keys().chain(self.builtin.keys()) {
      if key.serves(source, target, scheme) && !found.contains(key) {
        found.push(key.clone());
      }
    }
    found
  }

  /// Instantiates the transliterator for `key`.
  ///
  /// # Errors
  /// - `TransliterationError::NotRegistered` for an unknown key
  /// - `TableRead` / `TableParse` when a custom table cannot be loaded
  pub fn load(&self, key: &TransformKey) -> Result<Arc<dyn Transliterator>, TransliterationError> {
    if let Some(path) = self.custom.get(key) {
      return self.load_custom(key, path);
    }
    match self.builtin.get(key) {
      Some(builtin) => Ok(builtin.build(key.clone())),
      None => Err(TransliterationError::NotRegistered {
        key: key.to_string(),
      }),
    }
  }

  fn load_custom(
    &self,
    key: &TransformKey,
    path: &Path,
  ) -> Result<Arc<dyn Transliterator>, TransliterationError> {
    let raw = fs::read_to_string(path).map_err(|e| TransliterationError::TableRead {
      key: key.to_string(),
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    let table: CustomTable =
      serde_json::from_str(&raw).map_err(|e| TransliterationError::TableParse {
        key: key.to_string(),
        path: path.to_path_buf(),
        source: Arc::new(e),
      })?;

    // a table with exceptions only extends the built-in of the same key
    let base: Arc<dyn Transliterator> = if table.mappings.is_empty() {
      match self.builtin.get(key) {
        Some(builtin) => builtin.build(key.clone()),
        None => {
          return Err(TransliterationError::NotRegistered {
            key: key.to_string(),
          });
        }
      }
    } else {
      Arc::new(MapTransliterator::from_entries(
        key.clone(),
        table.mappings,
        table.positional,
        &table.context,
      ))
    };

    info!(
      key = %key,
      path = %path.display(),
      exceptions = table.exceptions.len(),
      "custom transliteration table loaded"
    );
    if table.exceptions.is_empty() {
      Ok(base)
    } else {
      Ok(Arc::new(ExceptionTransliterator::new(key.clone(), table.exceptions, base)))
    }
  }
}

/// `const`-friendly end point description for the built-in list.
#[derive(Debug, Clone, Copy)]
enum EndPointSpec {
  AnySource,
  Lang(&'static str),
  Script(&'static str),
}

use EndPointSpec::{AnySource, Lang, Script};

impl EndPointSpec {
  fn end_point(self) -> EndPoint {
    match self {
      AnySource => EndPoint::Any,
      Lang(code) => EndPoint::language(code),
      Script(code) => EndPoint::script(code),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::NamedTempFile;

  fn key(raw: &str) -> TransformKey {
    raw.parse().unwrap()
  }

  fn table_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
  }

  #[test]
  fn builtin_keys() {
    let registry = TransliteratorRegistry::builtin();
    assert!(registry.contains(&key("rus-eng/BGN")));
    assert!(registry.contains(&key("zho-eng/Wade-Giles-NoTone")));
    assert!(registry.contains(&key("Any-Latn/BGN")));
    assert!(registry.contains(&key("zho-Hans/Simplified")));
    assert!(registry.contains(&key("zho-Hant/Traditional")));
    assert!(!registry.contains(&key("rus-fra/BGN")));
    assert_eq!(registry.keys().len(), 15);
  }

  #[test]
  fn find_by_scheme() {
    let registry = TransliteratorRegistry::builtin();
    let found = registry.find(
      &EndPoint::language("rus"),
      &EndPoint::language("eng"),
      Some("gost"),
    );
    assert_eq!(found, vec![key("rus-eng/GOST")]);
    let all_russian =
      registry.find(&EndPoint::language("rus"), &EndPoint::language("eng"), None);
    assert_eq!(all_russian.len(), 3);
  }

  #[test]
  fn load_unknown_key() {
    let registry = TransliteratorRegistry::builtin();
    let err = registry.load(&key("rus-fra/BGN")).unwrap_err();
    assert!(matches!(err, TransliterationError::NotRegistered { .. }));
  }

  #[test]
  fn custom_table_overrides_builtin() {
    let file = table_file(r#"{ "mappings": { "а": "A!", "б": "b" } }"#);
    let mut registry = TransliteratorRegistry::builtin();
    registry.register_table(key("rus-eng/BGN"), file.path());
    let transliterator = registry.load(&key("rus-eng/BGN")).unwrap();
    assert_eq!(transliterator.transliterate("баба"), "bA!bA!");
  }

  #[test]
  fn custom_exceptions_extend_builtin() {
    let file = table_file(r#"{ "exceptions": { "Москва": "Moscow" } }"#);
    let mut registry = TransliteratorRegistry::builtin();
    registry.register_table(key("rus-eng/BGN"), file.path());
    let transliterator = registry.load(&key("rus-eng/BGN")).unwrap();
    assert_eq!(transliterator.transliterate("Москва Река"), "Moscow Reka");
  }

  #[test]
  fn custom_table_errors() {
    let mut registry = TransliteratorRegistry::empty();
    registry.register_table(key("rus-eng/BGN"), "/nonexistent/narasu/table.json");
    let err = registry.load(&key("rus-eng/BGN")).unwrap_err();
    assert!(matches!(err, TransliterationError::TableRead { .. }));

    let broken = table_file("{ not json");
    registry.register_table(key("rus-eng/BGN"), broken.path());
    let err = registry.load(&key("rus-eng/BGN")).unwrap_err();
    assert!(matches!(err, TransliterationError::TableParse { .. }));
  }
}
