// crates/narasu/src/analysis/analyzer.rs

//! Analyzer contract.

use std::fmt;

use super::model::{Analysis, AnalyzerId, AnalyzerInput, Capabilities, TextInfo};
use crate::errors::AnalyzerError;

/// Inspects raw input and emits ranked [`Analysis`] results.
///
/// Implementors provide [`detect`](Analyzer::detect); callers use
/// [`analyze`](Analyzer::analyze), which applies the common contract.
pub trait Analyzer: Send + Sync + fmt::Debug {
  /// Identity of the analyzer.
  fn id(&self) -> &AnalyzerId;

  /// What the analyzer accepts and produces.
  fn capabilities(&self) -> &Capabilities;

  /// Raw detection. `known` holds the features determined by earlier analyzers.
  ///
  /// Only called with non-empty input of an accepted kind.
  ///
  /// # Errors
  /// `AnalyzerError::Failure` when detection fails.
  fn detect(
    &self,
    input: &AnalyzerInput<'_>,
    known: &TextInfo,
  ) -> Result<Vec<Analysis>, AnalyzerError>;

  /// Analyzes `input` with nothing known beforehand.
  ///
  /// # Errors
  /// Propagates the error of [`detect`](Analyzer::detect).
  fn analyze(&self, input: &AnalyzerInput<'_>) -> Result<Vec<Analysis>, AnalyzerError> {
    self.analyze_with(input, &TextInfo::default())
  }

  /// Analyzes `input`, best result first.
  ///
  /// Empty or unaccepted input yields no result; results without features are
  /// dropped; scored results are sorted by descending score.
  ///
  /// # Errors
  /// Propagates the error of [`detect`](Analyzer::detect).
  fn analyze_with(
    &self,
    input: &AnalyzerInput<'_>,
    known: &TextInfo,
  ) -> Result<Vec<Analysis>, AnalyzerError> {
    let capabilities = self.capabilities();
    if input.is_empty() || !capabilities.accepts(input.kind()) {
      return Ok(Vec::new());
    }
    let mut analyses: Vec<Analysis> =
      self.detect(input, known)?.into_iter().filter(|analysis| !analysis.is_empty()).collect();
    if capabilities.has_scores() {
      analyses.sort_by(|a, b| b.score().unwrap_or(0.0).total_cmp(&a.score().unwrap_or(0.0)));
    }
    Ok(analyses)
  }

  /// Releases resources. Called once by the owning pipeline.
  fn dispose(&self) {}
}
