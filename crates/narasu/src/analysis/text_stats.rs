// crates/narasu/src/analysis/text_stats.rs

//! Size, length and encoding of the input.

use super::analyzer::Analyzer;
use super::model::{
  Analysis, AnalyzerId, AnalyzerInput, Capabilities, Feature, FeatureValue, InputKind, TextInfo,
};
use crate::errors::AnalyzerError;

/// Name used in configuration and ids.
pub const TEXT_STATS: &str = "text_stats";

/// Reports byte size, character length and encoding (UTF-8, or UTF-16 with a BOM).
#[derive(Debug, Clone)]
pub struct TextStatsAnalyzer {
  id: AnalyzerId,
  capabilities: Capabilities,
}

impl TextStatsAnalyzer {
  /// Creates the analyzer.
  pub fn new() -> Self {
    Self {
      id: AnalyzerId::new(TEXT_STATS),
      capabilities: Capabilities::new()
        .accepting(InputKind::Text)
        .accepting(InputKind::Bytes)
        .producing(Feature::Size)
        .producing(Feature::Length)
        .producing(Feature::Encoding),
    }
  }
}

impl Default for TextStatsAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}

impl Analyzer for TextStatsAnalyzer {
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
    let analysis = match input {
      AnalyzerInput::Text(text) => utf8(text),
      AnalyzerInput::Bytes(bytes) => match std::str::from_utf8(bytes) {
        Ok(text) => utf8(text),
        Err(_) => utf16(bytes),
      },
    };
    Ok(vec![analysis])
  }
}

fn utf8(text: &str) -> Analysis {
  Analysis::new()
    .with(Feature::Size, FeatureValue::Count(text.len()))
    .with(Feature::Length, FeatureValue::Count(text.chars().count()))
    .with(Feature::Encoding, FeatureValue::Encoding("UTF-8".to_string()))
}

/// UTF-16 is recognized by its byte order mark; anything else only has a size.
fn utf16(bytes: &[u8]) -> Analysis {
  let size = Analysis::new().with(Feature::Size, FeatureValue::Count(bytes.len()));
  let (encoding, decode): (&str, fn([u8; 2]) -> u16) = match bytes {
    [0xFF, 0xFE, ..] => ("UTF-16LE", u16::from_le_bytes),
    [0xFE, 0xFF, ..] => ("UTF-16BE", u16::from_be_bytes),
    _ => return size,
  };
  let units: Vec<u16> =
    bytes[2..].chunks_exact(2).map(|pair| decode([pair[0], pair[1]])).collect();
  let length = char::decode_utf16(units).filter(Result::is_ok).count();
  size
    .with(Feature::Length, FeatureValue::Count(length))
    .with(Feature::Encoding, FeatureValue::Encoding(encoding.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_stats() {
    let analyzer = TextStatsAnalyzer::new();
    let analyses = analyzer.analyze(&AnalyzerInput::Text("Москва")).unwrap();
    assert_eq!(analyses.len(), 1);
    let analysis = &analyses[0];
    assert_eq!(analysis.get(Feature::Size), Some(&FeatureValue::Count(12)));
    assert_eq!(analysis.get(Feature::Length), Some(&FeatureValue::Count(6)));
    assert_eq!(
      analysis.get(Feature::Encoding),
      Some(&FeatureValue::Encoding("UTF-8".to_string()))
    );
  }

  #[test]
  fn utf16_with_bom() {
    let analyzer = TextStatsAnalyzer::new();
    let bytes = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
    let analysis = &analyzer.analyze(&AnalyzerInput::Bytes(&bytes)).unwrap()[0];
    assert_eq!(analysis.get(Feature::Length), Some(&FeatureValue::Count(2)));
    assert_eq!(
      analysis.get(Feature::Encoding),
      Some(&FeatureValue::Encoding("UTF-16LE".to_string()))
    );
  }

  #[test]
  fn unknown_bytes_only_have_a_size() {
    let analyzer = TextStatsAnalyzer::new();
    let analysis = &analyzer.analyze(&AnalyzerInput::Bytes(&[0xC3, 0x28])).unwrap()[0];
    assert_eq!(analysis.get(Feature::Size), Some(&FeatureValue::Count(2)));
    assert!(analysis.get(Feature::Encoding).is_none());
  }

  #[test]
  fn empty_input_has_no_result() {
    let analyzer = TextStatsAnalyzer::new();
    assert!(analyzer.analyze(&AnalyzerInput::Text("")).unwrap().is_empty());
  }
}
