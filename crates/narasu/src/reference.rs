// crates/narasu/src/reference.rs

//! Read-only language and script reference tables.
//!
//! `ReferenceTables` is built once (usually by `NarasuService`) and shared via `Arc`
//! with the components that need code lookups. `Language` and `Script` are small
//! `Copy` values backed by static definitions, so they can be passed around freely.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use unicode_script::UnicodeScript;

/// A natural language identified by its ISO 639-3 (three-letter) code.
///
/// `Language::UNDETERMINED` (`und`) is a regular value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
  code: &'static str,
  alpha2: Option<&'static str>,
  name: &'static str,
  script: &'static str,
}

impl Language {
  /// Undetermined language (`und`)
  pub const UNDETERMINED: Language = Language::define("und", None, "Undetermined", "Zyyy");
  /// English
  pub const ENGLISH: Language = Language::define("eng", Some("en"), "English", "Latn");
  /// French
  pub const FRENCH: Language = Language::define("fra", Some("fr"), "French", "Latn");
  /// Spanish
  pub const SPANISH: Language = Language::define("spa", Some("es"), "Spanish", "Latn");
  /// Russian
  pub const RUSSIAN: Language = Language::define("rus", Some("ru"), "Russian", "Cyrl");
  /// Ukrainian
  pub const UKRAINIAN: Language = Language::define("ukr", Some("uk"), "Ukrainian", "Cyrl");
  /// Arabic
  pub const ARABIC: Language = Language::define("ara", Some("ar"), "Arabic", "Arab");
  /// Chinese
  pub const CHINESE: Language = Language::define("zho", Some("zh"), "Chinese", "Hani");

  const fn define(
    code: &'static str,
    alpha2: Option<&'static str>,
    name: &'static str,
    script: &'static str,
  ) -> Self {
    Self {
      code,
      alpha2,
      name,
      script,
    }
  }

  /// Returns the three-letter code.
  ///
  /// # Examples
  /// - `Language::ENGLISH` → `"eng"`
  /// - `Language::UNDETERMINED` → `"und"`
  pub fn code(&self) -> &'static str {
    self.code
  }

  /// Returns the two-letter code, if the language has one.
  pub fn alpha2(&self) -> Option<&'static str> {
    self.alpha2
  }

  /// Returns the English name.
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Returns the code of the script the language is usually written in.
  pub fn preferred_script_code(&self) -> &'static str {
    self.script
  }

  /// Whether this is the undetermined sentinel.
  pub fn is_undetermined(&self) -> bool {
    self.code == Self::UNDETERMINED.code
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code)
  }
}

impl Serialize for Language {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.code)
  }
}

/// A writing system identified by its ISO 15924 (four-letter) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script {
  code: &'static str,
  name: &'static str,
}

impl Script {
  /// Latin
  pub const LATIN: Script = Script::define("Latn", "Latin");
  /// Cyrillic
  pub const CYRILLIC: Script = Script::define("Cyrl", "Cyrillic");
  /// Arabic
  pub const ARABIC: Script = Script::define("Arab", "Arabic");
  /// Han (Hanzi, Kanji, Hanja)
  pub const HAN: Script = Script::define("Hani", "Han");
  /// Han, simplified character set
  pub const SIMPLIFIED_HAN: Script = Script::define("Hans", "Han (Simplified)");
  /// Han, traditional character set
  pub const TRADITIONAL_HAN: Script = Script::define("Hant", "Han (Traditional)");
  /// Common (spaces, digits, shared punctuation)
  pub const COMMON: Script = Script::define("Zyyy", "Common");
  /// Inherited (combining marks)
  pub const INHERITED: Script = Script::define("Zinh", "Inherited");
  /// Unknown / unassigned
  pub const UNKNOWN: Script = Script::define("Zzzz", "Unknown");

  const fn define(code: &'static str, name: &'static str) -> Self {
    Self { code, name }
  }

  /// Returns the four-letter code.
  pub fn code(&self) -> &'static str {
    self.code
  }

  /// Returns the English name.
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Whether the script carries no language signal (`Zyyy`, `Zinh`, `Zzzz`).
  pub fn is_common(&self) -> bool {
    matches!(self.code, "Zyyy" | "Zinh" | "Zzzz")
  }
}

impl fmt::Display for Script {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code)
  }
}

impl Serialize for Script {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.code)
  }
}

// ===== Static definitions =====

const LANGUAGES: &[Language] = &[
  Language::UNDETERMINED,
  Language::ENGLISH,
  Language::FRENCH,
  Language::SPANISH,
  Language::define("deu", Some("de"), "German", "Latn"),
  Language::define("ita", Some("it"), "Italian", "Latn"),
  Language::define("por", Some("pt"), "Portuguese", "Latn"),
  Language::define("nld", Some("nl"), "Dutch", "Latn"),
  Language::define("pol", Some("pl"), "Polish", "Latn"),
  Language::define("tur", Some("tr"), "Turkish", "Latn"),
  Language::RUSSIAN,
  Language::UKRAINIAN,
  Language::define("bel", Some("be"), "Belarusian", "Cyrl"),
  Language::define("bul", Some("bg"), "Bulgarian", "Cyrl"),
  Language::define("srp", Some("sr"), "Serbian", "Cyrl"),
  Language::ARABIC,
  Language::define("fas", Some("fa"), "Persian", "Arab"),
  Language::define("urd", Some("ur"), "Urdu", "Arab"),
  Language::define("heb", Some("he"), "Hebrew", "Hebr"),
  Language::define("ell", Some("el"), "Greek", "Grek"),
  Language::define("hin", Some("hi"), "Hindi", "Deva"),
  Language::CHINESE,
  Language::define("jpn", Some("ja"), "Japanese", "Jpan"),
  Language::define("kor", Some("ko"), "Korean", "Hang"),
  Language::define("tha", Some("th"), "Thai", "Thai"),
];

const SCRIPTS: &[Script] = &[
  Script::LATIN,
  Script::CYRILLIC,
  Script::ARABIC,
  Script::HAN,
  Script::SIMPLIFIED_HAN,
  Script::TRADITIONAL_HAN,
  Script::define("Hira", "Hiragana"),
  Script::define("Kana", "Katakana"),
  Script::define("Jpan", "Japanese"),
  Script::define("Hang", "Hangul"),
  Script::define("Grek", "Greek"),
  Script::define("Hebr", "Hebrew"),
  Script::define("Deva", "Devanagari"),
  Script::define("Thai", "Thai"),
  Script::define("Geor", "Georgian"),
  Script::define("Armn", "Armenian"),
  Script::COMMON,
  Script::INHERITED,
  Script::UNKNOWN,
];

/// Immutable lookup tables for languages and scripts.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
  languages: HashMap<String, Language>,
  scripts: HashMap<String, Script>,
  by_script: HashMap<&'static str, Vec<Language>>,
}

impl ReferenceTables {
  /// Builds the tables from the built-in definitions.
  pub fn builtin() -> Self {
    let mut languages = HashMap::new();
    let mut by_script: HashMap<&'static str, Vec<Language>> = HashMap::new();
    for language in LANGUAGES {
      languages.insert(language.code.to_string(), *language);
      if let Some(alpha2) = language.alpha2 {
        languages.insert(alpha2.to_string(), *language);
      }
      if !language.is_undetermined() {
        by_script.entry(language.script).or_default().push(*language);
      }
    }

    let scripts =
      SCRIPTS.iter().map(|script| (script.code.to_ascii_lowercase(), *script)).collect();

    Self {
      languages,
      scripts,
      by_script,
    }
  }

  /// Looks up a language by its three- or two-letter code (case-insensitive).
  pub fn language_by_code(&self, code: &str) -> Option<Language> {
    self.languages.get(&code.trim().to_ascii_lowercase()).copied()
  }

  /// Looks up a script by its four-letter code (case-insensitive).
  pub fn script_by_code(&self, code: &str) -> Option<Script> {
    self.scripts.get(&code.trim().to_ascii_lowercase()).copied()
  }

  /// All known languages, in definition order.
  pub fn languages(&self) -> &'static [Language] {
    LANGUAGES
  }

  /// Languages usually written in the given script.
  pub fn languages_for_script(&self, script: &Script) -> &[Language] {
    self.by_script.get(script.code).map(Vec::as_slice).unwrap_or_default()
  }

  /// Maps a Unicode script property value to a reference script.
  ///
  /// Scripts without a reference entry map to `Script::UNKNOWN`.
  pub fn script_of(&self, script: unicode_script::Script) -> Script {
    self.script_by_code(script.short_name()).unwrap_or(Script::UNKNOWN)
  }

  /// Script of a single character.
  pub fn script_for_char(&self, c: char) -> Script {
    self.script_of(c.script())
  }
}

impl Default for ReferenceTables {
  fn default() -> Self {
    Self::builtin()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn language_by_three_and_two_letter_code() {
    let tables = ReferenceTables::builtin();
    assert_eq!(tables.language_by_code("rus"), Some(Language::RUSSIAN));
    assert_eq!(tables.language_by_code("ru"), Some(Language::RUSSIAN));
    assert_eq!(tables.language_by_code("ENG"), Some(Language::ENGLISH));
    assert_eq!(tables.language_by_code("xx"), None);
  }

  #[test]
  fn undetermined_is_a_regular_value() {
    let tables = ReferenceTables::builtin();
    let und = tables.language_by_code("und").unwrap();
    assert!(und.is_undetermined());
    assert_eq!(und.to_string(), "und");
  }

  #[test]
  fn script_by_code_is_case_insensitive() {
    let tables = ReferenceTables::builtin();
    assert_eq!(tables.script_by_code("cyrl"), Some(Script::CYRILLIC));
    assert_eq!(tables.script_by_code("Latn"), Some(Script::LATIN));
    assert_eq!(tables.script_by_code("Abcd"), None);
  }

  #[test]
  fn script_for_char_maps_unicode_property() {
    let tables = ReferenceTables::builtin();
    assert_eq!(tables.script_for_char('ж'), Script::CYRILLIC);
    assert_eq!(tables.script_for_char('a'), Script::LATIN);
    assert_eq!(tables.script_for_char('中'), Script::HAN);
    assert_eq!(tables.script_for_char(' '), Script::COMMON);
  }

  #[test]
  fn languages_for_script() {
    let tables = ReferenceTables::builtin();
    let cyrillic = tables.languages_for_script(&Script::CYRILLIC);
    assert!(cyrillic.contains(&Language::RUSSIAN));
    assert!(cyrillic.contains(&Language::UKRAINIAN));
    assert!(!cyrillic.contains(&Language::ENGLISH));
  }
}
