// crates/narasu/src/config.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::analysis::Feature;
use crate::errors::ConfigError;
use crate::reference::{Language, ReferenceTables};
use crate::transformer::LanguagePack;
use crate::transliterate::TransformKey;

/// Top-level configuration for narasu.
///
/// Every section and field has a default, so an empty TOML document is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NarasuConfig {
  /// [transform] section
  #[serde(default)]
  pub transform: TransformConfig,
  /// [analysis] section
  #[serde(default)]
  pub analysis: AnalysisConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [transform] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformConfig {
  /// Target language of transliterations (e.g., "eng")
  #[serde(default = "default_target_language")]
  pub target_language: String,
  /// Languages whose packs are enabled (e.g., ["rus", "zho"]).
  ///
  /// Other languages are served by the undetermined fallback.
  #[serde(default = "default_languages")]
  pub languages: Vec<String>,
  /// Transliteration tables loaded from JSON files
  #[serde(default)]
  pub custom_tables: Vec<CustomTableConfig>,
}

/// One `[[transform.custom_tables]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomTableConfig {
  /// Transform key served by the table (e.g., "rus-eng/BGN")
  pub key: String,
  /// JSON table file
  pub path: PathBuf,
}

/// Default target language (English)
fn default_target_language() -> String {
  Language::ENGLISH.code().to_string()
}

/// Default language list (every built-in pack)
fn default_languages() -> Vec<String> {
  LanguagePack::builtin()
    .iter()
    .map(LanguagePack::language)
    .filter(|language| !language.is_undetermined())
    .map(|language| language.code().to_string())
    .collect()
}

impl Default for TransformConfig {
  fn default() -> Self {
    Self {
      target_language: default_target_language(),
      languages: default_languages(),
      custom_tables: Vec::new(),
    }
  }
}

/// Analyzers that can be enabled in `[analysis].analyzers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
  /// Size, length and encoding
  TextStats,
  /// Script shares
  ScriptProfile,
  /// Statistical language identification
  Language,
  /// Election over script profile and language identification
  Voting,
}

impl AnalyzerKind {
  /// Analyzer name, as used in analyzer ids.
  pub fn name(&self) -> &'static str {
    match self {
      AnalyzerKind::TextStats => crate::analysis::TEXT_STATS,
      AnalyzerKind::ScriptProfile => crate::analysis::SCRIPT_PROFILE,
      AnalyzerKind::Language => crate::analysis::LANGUAGE,
      AnalyzerKind::Voting => crate::analysis::VOTING,
    }
  }
}

impl std::fmt::Display for AnalyzerKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// [analysis] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
  /// Enabled analyzers, in registration order
  #[serde(default = "default_analyzers")]
  pub analyzers: Vec<AnalyzerKind>,
  /// Candidate languages for language identification (empty: every language)
  #[serde(default = "default_languages")]
  pub languages: Vec<String>,
  /// Analyzer whose result overrides earlier values of a feature
  /// (e.g., `{ script = "script_profile" }`)
  #[serde(default)]
  pub priorities: BTreeMap<Feature, AnalyzerKind>,
  /// Worker threads for batch analysis
  #[serde(default = "default_parallelism")]
  pub parallelism: usize,
}

/// Default analyzers (statistics, script profile, language identification)
fn default_analyzers() -> Vec<AnalyzerKind> {
  vec![AnalyzerKind::TextStats, AnalyzerKind::ScriptProfile, AnalyzerKind::Language]
}

/// Default parallelism
fn default_parallelism() -> usize {
  4
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      analyzers: default_analyzers(),
      languages: default_languages(),
      priorities: BTreeMap::new(),
      parallelism: default_parallelism(),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Directive understood by `tracing_subscriber::EnvFilter`.
  pub fn directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Loading =====

impl NarasuConfig {
  /// Parses a TOML document. The result is not validated.
  ///
  /// # Errors
  /// `ConfigError::Parse` on malformed TOML or unknown keys.
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
    toml::from_str(source).map_err(|e| ConfigError::Parse {
      reason: e.to_string(),
    })
  }

  /// Reads and parses a TOML file. The result is not validated.
  ///
  /// # Errors
  /// `ConfigError::Read` if the file cannot be read, `ConfigError::Parse` otherwise.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_toml_str(&source)
  }
}

// ===== Accessor Methods =====

impl NarasuConfig {
  /// Returns the target language of transliterations.
  ///
  /// # Errors
  /// `ConfigError::UnknownLanguageCode` if the code is not in `reference`.
  pub fn target_language(&self, reference: &ReferenceTables) -> Result<Language, ConfigError> {
    resolve(reference, "transform.target_language", &self.transform.target_language)
  }

  /// Returns the packs of the enabled languages.
  ///
  /// # Errors
  /// `ConfigError::UnknownLanguageCode` or `ConfigError::MissingLanguagePack`.
  pub fn language_packs(&self, reference: &ReferenceTables) -> Result<Vec<LanguagePack>, ConfigError> {
    let builtin = LanguagePack::builtin();
    self
      .transform
      .languages
      .iter()
      .map(|code| {
        let language = resolve(reference, "transform.languages", code)?;
        builtin
          .iter()
          .find(|pack| pack.language() == language)
          .cloned()
          .ok_or_else(|| ConfigError::MissingLanguagePack {
            code: code.clone(),
          })
      })
      .collect()
  }

  /// Returns the custom tables with parsed keys.
  ///
  /// # Errors
  /// `ConfigError::InvalidTableKey` if a key is malformed.
  pub fn custom_tables(&self) -> Result<Vec<(TransformKey, &Path)>, ConfigError> {
    self
      .transform
      .custom_tables
      .iter()
      .map(|table| {
        let key = table.key.parse::<TransformKey>().map_err(|e| ConfigError::InvalidTableKey {
          key: table.key.clone(),
          reason: e.to_string(),
        })?;
        Ok((key, table.path.as_path()))
      })
      .collect()
  }

  /// Returns the enabled analyzers.
  pub fn analyzers(&self) -> &[AnalyzerKind] {
    &self.analysis.analyzers
  }

  /// Returns the candidate languages of language identification.
  ///
  /// # Errors
  /// `ConfigError::UnknownLanguageCode` if a code is not in `reference`.
  pub fn candidate_languages(&self, reference: &ReferenceTables) -> Result<Vec<Language>, ConfigError> {
    self
      .analysis
      .languages
      .iter()
      .map(|code| resolve(reference, "analysis.languages", code))
      .collect()
  }

  /// Returns the feature priorities.
  pub fn priorities(&self) -> &BTreeMap<Feature, AnalyzerKind> {
    &self.analysis.priorities
  }

  /// Returns the batch parallelism.
  pub fn parallelism(&self) -> usize {
    self.analysis.parallelism
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `transform.target_language` is a known language
  /// - every `transform.languages` entry is known and has a pack
  /// - every `transform.custom_tables` key is well formed
  /// - `analysis.analyzers` is not empty
  /// - every `analysis.languages` entry is known
  /// - every priority analyzer is enabled
  /// - `analysis.parallelism` >= 1
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let reference = ReferenceTables::builtin();

    self.target_language(&reference)?;
    self.language_packs(&reference)?;
    self.custom_tables()?;

    if self.analysis.analyzers.is_empty() {
      return Err(ConfigError::EmptyAnalyzers);
    }

    self.candidate_languages(&reference)?;

    if let Some(analyzer) =
      self.analysis.priorities.values().find(|kind| !self.analysis.analyzers.contains(kind))
    {
      return Err(ConfigError::PriorityAnalyzerNotEnabled {
        analyzer: analyzer.name().to_string(),
      });
    }

    if self.analysis.parallelism < 1 {
      return Err(ConfigError::InvalidParallelism {
        actual: self.analysis.parallelism,
      });
    }

    Ok(())
  }
}

fn resolve(
  reference: &ReferenceTables,
  section: &'static str,
  code: &str,
) -> Result<Language, ConfigError> {
  reference.language_by_code(code).ok_or_else(|| ConfigError::UnknownLanguageCode {
    section,
    code: code.to_string(),
  })
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  /// Creates a valid configuration with one custom table inside the temporary directory
  fn create_valid_config(temp_dir: &TempDir) -> NarasuConfig {
    NarasuConfig {
      transform: TransformConfig {
        target_language: "eng".to_string(),
        languages: vec!["rus".to_string(), "zho".to_string()],
        custom_tables: vec![CustomTableConfig {
          key: "rus-eng/BGN".to_string(),
          path: temp_dir.path().join("rus_bgn.json"),
        }],
      },
      analysis: AnalysisConfig {
        analyzers: vec![AnalyzerKind::TextStats, AnalyzerKind::ScriptProfile],
        languages: vec!["rus".to_string(), "eng".to_string()],
        priorities: BTreeMap::from([(Feature::Script, AnalyzerKind::ScriptProfile)]),
        parallelism: 2,
      },
      logging: LoggingConfig {
        level: LogLevel::Debug,
      },
    }
  }

  // ─── Loading Tests ─────────────────────────────────────────────────────

  #[test]
  fn empty_document_uses_defaults() {
    let config = NarasuConfig::from_toml_str("").unwrap();
    assert_eq!(config.transform.target_language, "eng");
    assert_eq!(config.transform.languages, vec!["ara", "eng", "fra", "rus", "spa", "ukr", "zho"]);
    assert_eq!(config.analyzers(), default_analyzers().as_slice());
    assert_eq!(config.parallelism(), 4);
    assert_eq!(config.log_level(), LogLevel::Info);
    config.validate().unwrap();
  }

  #[test]
  fn parses_every_section() {
    let config = NarasuConfig::from_toml_str(
      r#"
        [transform]
        target_language = "eng"
        languages = ["rus", "ukr"]

        [[transform.custom_tables]]
        key = "rus-eng/BGN"
        path = "/tmp/rus.json"

        [analysis]
        analyzers = ["text_stats", "voting"]
        languages = []
        priorities = { language = "voting" }
        parallelism = 8

        [logging]
        level = "warn"
      "#,
    )
    .unwrap();
    config.validate().unwrap();
    assert_eq!(config.analyzers(), &[AnalyzerKind::TextStats, AnalyzerKind::Voting]);
    assert_eq!(config.priorities().get(&Feature::Language), Some(&AnalyzerKind::Voting));
    assert_eq!(config.parallelism(), 8);
    assert_eq!(config.log_level(), LogLevel::Warn);
    let tables = config.custom_tables().unwrap();
    assert_eq!(tables[0].0.to_string(), "rus-eng/BGN");
    assert_eq!(tables[0].1, Path::new("/tmp/rus.json"));
  }

  #[test]
  fn rejects_unknown_keys_and_analyzers() {
    assert!(matches!(
      NarasuConfig::from_toml_str("[analysis]\nanalyzers = [\"magic\"]"),
      Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
      NarasuConfig::from_toml_str("[transform]\ntarget = \"eng\""),
      Err(ConfigError::Parse { .. })
    ));
  }

  #[test]
  fn from_path_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("narasu.toml");
    fs::write(&path, "[logging]\nlevel = \"trace\"\n").unwrap();
    let config = NarasuConfig::from_path(&path).unwrap();
    assert_eq!(config.log_level(), LogLevel::Trace);
  }

  #[test]
  fn from_path_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let err = NarasuConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { path: p, .. } if p == path));
  }

  // ─── validate() Normal Case Tests ────────────────────────────────────────────

  #[test]
  fn validate_accepts_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    create_valid_config(&temp_dir).validate().unwrap();
  }

  #[test]
  fn validate_accepts_alpha2_codes() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.transform.languages = vec!["ru".to_string(), "ZH".to_string()];
    config.validate().unwrap();
    let reference = ReferenceTables::builtin();
    let packs = config.language_packs(&reference).unwrap();
    assert_eq!(packs[0].language(), Language::RUSSIAN);
    assert_eq!(packs[1].language(), Language::CHINESE);
  }

  // ─── validate() Abnormal Cases ───────────────────────────────────────────────

  #[test]
  fn validate_rejects_unknown_target_language() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.transform.target_language = "xx".to_string();
    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::UnknownLanguageCode { section: "transform.target_language", .. }
    ));
  }

  #[test]
  fn validate_rejects_language_without_pack() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.transform.languages.push("jpn".to_string());
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::MissingLanguagePack { code } if code == "jpn"));
  }

  #[test]
  fn validate_rejects_malformed_table_key() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.transform.custom_tables[0].key = "rus/BGN".to_string();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTableKey { key, .. } if key == "rus/BGN"));
  }

  #[test]
  fn validate_rejects_empty_analyzers() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.analysis.analyzers.clear();
    assert!(matches!(config.validate(), Err(ConfigError::EmptyAnalyzers)));
  }

  #[test]
  fn validate_rejects_unknown_candidate_language() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.analysis.languages.push("qqq".to_string());
    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::UnknownLanguageCode { section: "analysis.languages", code } if code == "qqq"
    ));
  }

  #[test]
  fn validate_rejects_disabled_priority_analyzer() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.analysis.priorities.insert(Feature::Language, AnalyzerKind::Language);
    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::PriorityAnalyzerNotEnabled { analyzer } if analyzer == "language"
    ));
  }

  #[test]
  fn validate_rejects_zero_parallelism() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.analysis.parallelism = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidParallelism { actual: 0 })));
  }

  // ─── Error Priority Tests ────────────────────────────────────────────────

  #[test]
  fn validate_reports_transform_errors_first() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.transform.languages.push("xx".to_string());
    config.analysis.analyzers.clear();
    config.analysis.parallelism = 0;
    assert!(matches!(
      config.validate(),
      Err(ConfigError::UnknownLanguageCode { section: "transform.languages", .. })
    ));
  }

  // ─── Accessor Method Tests ───────────────────────────────────────────────

  #[test]
  fn candidate_languages_resolve_codes() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);
    let reference = ReferenceTables::builtin();
    assert_eq!(
      config.candidate_languages(&reference).unwrap(),
      vec![Language::RUSSIAN, Language::ENGLISH]
    );
    assert_eq!(config.target_language(&reference).unwrap(), Language::ENGLISH);
  }

  #[test]
  fn analyzer_kind_names() {
    assert_eq!(AnalyzerKind::TextStats.to_string(), "text_stats");
    assert_eq!(AnalyzerKind::ScriptProfile.name(), "script_profile");
    assert_eq!(AnalyzerKind::Language.name(), "language");
    assert_eq!(AnalyzerKind::Voting.name(), "voting");
  }

  #[test]
  fn log_level_directive() {
    assert_eq!(LogLevel::Warn.directive(), "warn");
    assert_eq!(LogLevel::default(), LogLevel::Info);
  }
}
