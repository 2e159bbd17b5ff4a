// crates/narasu/src/analysis/model.rs

//! Analysis data model: features, single results, merged text information.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::reference::{Language, Script};

/// A property of the input an analyzer can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
  /// Input size in bytes
  Size,
  /// Character encoding
  Encoding,
  /// Length in characters
  Length,
  /// Natural language
  Language,
  /// Writing system
  Script,
}

impl Feature {
  /// All features, in declaration order.
  pub const ALL: [Feature; 5] = [
    Feature::Size,
    Feature::Encoding,
    Feature::Length,
    Feature::Language,
    Feature::Script,
  ];

  /// Lowercase name.
  pub fn name(&self) -> &'static str {
    match self {
      Feature::Size => "size",
      Feature::Encoding => "encoding",
      Feature::Length => "length",
      Feature::Language => "language",
      Feature::Script => "script",
    }
  }
}

impl fmt::Display for Feature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Value of a [`Feature`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
  /// Size or length
  Count(usize),
  /// Encoding name
  Encoding(String),
  /// Language
  Language(Language),
  /// Script
  Script(Script),
}

impl fmt::Display for FeatureValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FeatureValue::Count(count) => write!(f, "{count}"),
      FeatureValue::Encoding(encoding) => f.write_str(encoding),
      FeatureValue::Language(language) => write!(f, "{language}"),
      FeatureValue::Script(script) => write!(f, "{script}"),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analysis
// ─────────────────────────────────────────────────────────────────────────────

/// One detection result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
  features: BTreeMap<Feature, FeatureValue>,
  #[serde(skip_serializing_if = "Option::is_none")]
  score: Option<f64>,
}

impl Analysis {
  /// Empty analysis.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets a feature (builder style).
  pub fn with(mut self, feature: Feature, value: FeatureValue) -> Self {
    self.set(feature, value);
    self
  }

  /// Sets the score (builder style).
  pub fn with_score(mut self, score: f64) -> Self {
    self.score = Some(score);
    self
  }

  /// Sets a feature.
  pub fn set(&mut self, feature: Feature, value: FeatureValue) {
    self.features.insert(feature, value);
  }

  /// Value of a feature.
  pub fn get(&self, feature: Feature) -> Option<&FeatureValue> {
    self.features.get(&feature)
  }

  /// Every feature set.
  pub fn features(&self) -> &BTreeMap<Feature, FeatureValue> {
    &self.features
  }

  /// Confidence score, if the analyzer produces one.
  pub fn score(&self) -> Option<f64> {
    self.score
  }

  /// Whether no feature is set.
  pub fn is_empty(&self) -> bool {
    self.features.is_empty()
  }

  /// Language, if set.
  pub fn language(&self) -> Option<Language> {
    match self.get(Feature::Language) {
      Some(FeatureValue::Language(language)) => Some(*language),
      _ => None,
    }
  }

  /// Script, if set.
  pub fn script(&self) -> Option<Script> {
    match self.get(Feature::Script) {
      Some(FeatureValue::Script(script)) => Some(*script),
      _ => None,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// TextInfo
// ─────────────────────────────────────────────────────────────────────────────

/// Merged result of a pipeline run, with the analyzer that set each feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextInfo {
  features: BTreeMap<Feature, FeatureValue>,
  sources: BTreeMap<Feature, AnalyzerId>,
}

impl TextInfo {
  /// Empty information.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets `feature`, recording `source` as the analyzer that set it.
  pub fn set(&mut self, feature: Feature, value: FeatureValue, source: AnalyzerId) {
    self.features.insert(feature, value);
    self.sources.insert(feature, source);
  }

  /// Whether `feature` is set.
  pub fn has(&self, feature: Feature) -> bool {
    self.features.contains_key(&feature)
  }

  /// Value of `feature`.
  pub fn get(&self, feature: Feature) -> Option<&FeatureValue> {
    self.features.get(&feature)
  }

  /// Analyzer that set `feature`.
  pub fn source(&self, feature: Feature) -> Option<&AnalyzerId> {
    self.sources.get(&feature)
  }

  /// Whether nothing is known.
  pub fn is_empty(&self) -> bool {
    self.features.is_empty()
  }

  /// Best-guess language (`und` when unknown).
  pub fn language(&self) -> Language {
    match self.get(Feature::Language) {
      Some(FeatureValue::Language(language)) => *language,
      _ => Language::UNDETERMINED,
    }
  }

  /// Best-guess script (`Zzzz` when unknown).
  pub fn script(&self) -> Script {
    match self.get(Feature::Script) {
      Some(FeatureValue::Script(script)) => *script,
      _ => Script::UNKNOWN,
    }
  }

  /// Input size in bytes.
  pub fn size(&self) -> Option<usize> {
    self.count(Feature::Size)
  }

  /// Input length in characters.
  pub fn length(&self) -> Option<usize> {
    self.count(Feature::Length)
  }

  /// Character encoding.
  pub fn encoding(&self) -> Option<&str> {
    match self.get(Feature::Encoding) {
      Some(FeatureValue::Encoding(encoding)) => Some(encoding),
      _ => None,
    }
  }

  /// How the text is written: language and script.
  pub fn written(&self) -> (Language, Script) {
    (self.language(), self.script())
  }

  fn count(&self, feature: Feature) -> Option<usize> {
    match self.get(feature) {
      Some(FeatureValue::Count(count)) => Some(*count),
      _ => None,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// AnalyzerId / Capabilities / Input
// ─────────────────────────────────────────────────────────────────────────────

/// Analyzer identity: a name plus sorted options, rendered `name_opt1-opt2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnalyzerId {
  name: String,
  options: Vec<String>,
}

impl AnalyzerId {
  /// Identity without options.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      options: Vec::new(),
    }
  }

  /// Identity with options (sorted, duplicates removed).
  pub fn with_options<I, S>(name: impl Into<String>, options: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let options: BTreeSet<String> = options.into_iter().map(Into::into).collect();
    Self {
      name: name.into(),
      options: options.into_iter().collect(),
    }
  }

  /// Analyzer name.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Sorted options.
  pub fn options(&self) -> &[String] {
    &self.options
  }
}

impl fmt::Display for AnalyzerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.name)?;
    if !self.options.is_empty() {
      write!(f, "_{}", self.options.join("-"))?;
    }
    Ok(())
  }
}

impl Serialize for AnalyzerId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// Kind of input an analyzer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputKind {
  /// Decoded text
  Text,
  /// Raw bytes
  Bytes,
}

/// Input handed to an analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerInput<'a> {
  /// Decoded text
  Text(&'a str),
  /// Raw bytes
  Bytes(&'a [u8]),
}

impl AnalyzerInput<'_> {
  /// Kind of the input.
  pub fn kind(&self) -> InputKind {
    match self {
      AnalyzerInput::Text(_) => InputKind::Text,
      AnalyzerInput::Bytes(_) => InputKind::Bytes,
    }
  }

  /// Whether there is nothing to analyze (blank text or no bytes).
  pub fn is_empty(&self) -> bool {
    match self {
      AnalyzerInput::Text(text) => text.trim().is_empty(),
      AnalyzerInput::Bytes(bytes) => bytes.is_empty(),
    }
  }

  /// The input as text; bytes must be valid UTF-8.
  pub fn as_text(&self) -> Option<&str> {
    match self {
      AnalyzerInput::Text(text) => Some(text),
      AnalyzerInput::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
    }
  }
}

/// What an analyzer accepts, produces and needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
  accepts: BTreeSet<InputKind>,
  produces: BTreeSet<Feature>,
  requires: BTreeSet<Feature>,
  exclusive: bool,
  rankings: bool,
  scores: bool,
}

impl Capabilities {
  /// No capability.
  pub fn new() -> Self {
    Self::default()
  }

  /// Accepts `kind` input.
  pub fn accepting(mut self, kind: InputKind) -> Self {
    self.accepts.insert(kind);
    self
  }

  /// Produces `feature`.
  pub fn producing(mut self, feature: Feature) -> Self {
    self.produces.insert(feature);
    self
  }

  /// Needs `feature` to be known before running.
  pub fn requiring(mut self, feature: Feature) -> Self {
    self.requires.insert(feature);
    self
  }

  /// Must not run concurrently with itself.
  pub fn exclusive(mut self) -> Self {
    self.exclusive = true;
    self
  }

  /// Returns several ranked candidates.
  pub fn ranked(mut self) -> Self {
    self.rankings = true;
    self
  }

  /// Scores its candidates.
  pub fn scored(mut self) -> Self {
    self.scores = true;
    self
  }

  /// Whether `kind` input is accepted.
  pub fn accepts(&self, kind: InputKind) -> bool {
    self.accepts.contains(&kind)
  }

  /// Whether `feature` is produced.
  pub fn produces(&self, feature: Feature) -> bool {
    self.produces.contains(&feature)
  }

  /// Features produced.
  pub fn produced(&self) -> &BTreeSet<Feature> {
    &self.produces
  }

  /// Features required.
  pub fn requires(&self) -> &BTreeSet<Feature> {
    &self.requires
  }

  /// Whether calls must be serialized.
  pub fn is_exclusive(&self) -> bool {
    self.exclusive
  }

  /// Whether several ranked candidates are returned.
  pub fn has_rankings(&self) -> bool {
    self.rankings
  }

  /// Whether candidates carry a score.
  pub fn has_scores(&self) -> bool {
    self.scores
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analyzer_id_rendering() {
    assert_eq!(AnalyzerId::new("script_profile").to_string(), "script_profile");
    let id = AnalyzerId::with_options("language", ["zho", "eng", "eng"]);
    assert_eq!(id.options(), ["eng", "zho"]);
    assert_eq!(id.to_string(), "language_eng-zho");
  }

  #[test]
  fn text_info_defaults() {
    let info = TextInfo::new();
    assert!(info.is_empty());
    assert_eq!(info.written(), (Language::UNDETERMINED, Script::UNKNOWN));
    assert_eq!(info.size(), None);
  }

  #[test]
  fn text_info_records_sources() {
    let mut info = TextInfo::new();
    info.set(Feature::Script, FeatureValue::Script(Script::CYRILLIC), AnalyzerId::new("a"));
    info.set(Feature::Length, FeatureValue::Count(6), AnalyzerId::new("b"));
    assert_eq!(info.script(), Script::CYRILLIC);
    assert_eq!(info.length(), Some(6));
    assert_eq!(info.source(Feature::Script).map(AnalyzerId::name), Some("a"));
    assert!(!info.has(Feature::Language));
  }

  #[test]
  fn input_emptiness() {
    assert!(AnalyzerInput::Text("  \n").is_empty());
    assert!(AnalyzerInput::Bytes(&[]).is_empty());
    assert_eq!(AnalyzerInput::Bytes(&[0xFF, 0xFE]).as_text(), None);
    assert_eq!(AnalyzerInput::Bytes(b"abc").as_text(), Some("abc"));
  }

  #[test]
  fn capabilities_builder() {
    let capabilities = Capabilities::new()
      .accepting(InputKind::Text)
      .producing(Feature::Language)
      .requiring(Feature::Script)
      .scored();
    assert!(capabilities.accepts(InputKind::Text));
    assert!(!capabilities.accepts(InputKind::Bytes));
    assert!(capabilities.produces(Feature::Language));
    assert!(capabilities.requires().contains(&Feature::Script));
    assert!(capabilities.has_scores());
    assert!(!capabilities.is_exclusive());
  }
}
