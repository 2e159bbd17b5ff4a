// crates/narasu/src/analysis/language.rs

//! Statistical language identification (via `whatlang`).

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use whatlang::{Detector, Lang};

use super::analyzer::Analyzer;
use super::model::{
  Analysis, AnalyzerId, AnalyzerInput, Capabilities, Feature, FeatureValue, InputKind, TextInfo,
};
use crate::errors::AnalyzerError;
use crate::reference::{Language, ReferenceTables};

/// Name used in configuration and ids.
pub const LANGUAGE: &str = "language";

/// `whatlang` uses Mandarin (`cmn`) where the reference tables use `zho`.
fn to_whatlang(language: &Language) -> Option<Lang> {
  match language.code() {
    "zho" => Some(Lang::Cmn),
    code => Lang::from_code(code),
  }
}

fn from_whatlang(lang: Lang) -> &'static str {
  match lang {
    Lang::Cmn => "zho",
    other => other.code(),
  }
}

/// Detects the language, restricted to a set of candidates.
///
/// The script reported is the candidate's usual script.
pub struct LanguageAnalyzer {
  id: AnalyzerId,
  capabilities: Capabilities,
  /// `None` when no candidate is detectable
  detector: Option<Detector>,
  reference: Arc<ReferenceTables>,
}

impl LanguageAnalyzer {
  /// Creates the analyzer. An empty candidate list allows every language; candidates
  /// `whatlang` cannot detect (such as `und`) are never reported.
  pub fn new(reference: Arc<ReferenceTables>, candidates: &[Language]) -> Self {
    let allowlist: Vec<Lang> = candidates.iter().filter_map(to_whatlang).collect();
    let mut codes: Vec<&str> = candidates.iter().map(Language::code).collect();
    codes.sort_unstable();
    debug!(candidates = ?codes, detectable = allowlist.len(), "language analyzer created");
    let detector = match (candidates.is_empty(), allowlist.is_empty()) {
      (true, _) => Some(Detector::new()),
      (false, true) => None,
      (false, false) => Some(Detector::with_allowlist(allowlist)),
    };
    Self {
      id: AnalyzerId::with_options(LANGUAGE, codes),
      capabilities: Capabilities::new()
        .accepting(InputKind::Text)
        .producing(Feature::Language)
        .producing(Feature::Script)
        .scored(),
      detector,
      reference,
    }
  }
}

impl fmt::Debug for LanguageAnalyzer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LanguageAnalyzer").field("id", &self.id).finish()
  }
}

impl Analyzer for LanguageAnalyzer {
  fn id(&self) -> &AnalyzerId {
    &self.id
  }

  fn capabilities(&self) -> &Capabilities {
    &self.capabilities
  }

  fn detect(
    &self,
    input: &AnalyzerInput<'_>,
    _known: &TextInfo,
  ) -> Result<Vec<Analysis>, AnalyzerError> {
    let Some(text) = input.as_text() else {
      return Ok(Vec::new());
    };
    let Some(info) = self.detector.as_ref().and_then(|detector| detector.detect(text)) else {
      return Ok(Vec::new());
    };
    let Some(language) = self.reference.language_by_code(from_whatlang(info.lang())) else {
      debug!(lang = info.lang().code(), "detected language not in reference tables");
      return Ok(Vec::new());
    };

    let mut analysis = Analysis::new()
      .with(Feature::Language, FeatureValue::Language(language))
      .with_score(info.confidence());
    if let Some(script) = self.reference.script_by_code(language.preferred_script_code()) {
      analysis.set(Feature::Script, FeatureValue::Script(script));
    }
    Ok(vec![analysis])
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reference::Script;

  fn analyzer() -> LanguageAnalyzer {
    LanguageAnalyzer::new(
      Arc::new(ReferenceTables::builtin()),
      &[Language::ENGLISH, Language::RUSSIAN, Language::CHINESE, Language::ARABIC],
    )
  }

  #[test]
  fn id_lists_candidates() {
    assert_eq!(analyzer().id().to_string(), "language_ara-eng-rus-zho");
  }

  #[test]
  fn detects_english() {
    let analyses = analyzer()
      .analyze(&AnalyzerInput::Text("The quick brown fox jumps over the lazy dog every morning"))
      .unwrap();
    assert_eq!(analyses[0].language(), Some(Language::ENGLISH));
    assert_eq!(analyses[0].script(), Some(Script::LATIN));
  }

  #[test]
  fn detects_russian() {
    let analyses = analyzer()
      .analyze(&AnalyzerInput::Text("Москва является столицей Российской Федерации"))
      .unwrap();
    assert_eq!(analyses[0].language(), Some(Language::RUSSIAN));
    assert_eq!(analyses[0].script(), Some(Script::CYRILLIC));
  }

  #[test]
  fn maps_mandarin_to_chinese() {
    let analyses = analyzer().analyze(&AnalyzerInput::Text("北京是中华人民共和国的首都")).unwrap();
    assert_eq!(analyses[0].language(), Some(Language::CHINESE));
    assert_eq!(analyses[0].script(), Some(Script::HAN));
  }

  #[test]
  fn undetectable_candidates_report_nothing() {
    let analyzer =
      LanguageAnalyzer::new(Arc::new(ReferenceTables::builtin()), &[Language::UNDETERMINED]);
    let analyses = analyzer
      .analyze(&AnalyzerInput::Text("The quick brown fox jumps over the lazy dog every morning"))
      .unwrap();
    assert!(analyses.is_empty());
  }
}
