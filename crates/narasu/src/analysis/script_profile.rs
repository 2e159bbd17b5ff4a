// crates/narasu/src/analysis/script_profile.rs

//! Script profiling: which scripts a text is written in, and how much of each.

use std::collections::HashMap;
use std::sync::Arc;

use unicode_script::{Script as UnicodeScriptValue, UnicodeScript};

use super::analyzer::Analyzer;
use super::model::{
  Analysis, AnalyzerId, AnalyzerInput, Capabilities, Feature, FeatureValue, InputKind, TextInfo,
};
use crate::errors::AnalyzerError;
use crate::normalize::string_normalizer::is_punctuation;
use crate::reference::{ReferenceTables, Script};

/// Name used in configuration and ids.
pub const SCRIPT_PROFILE: &str = "script_profile";

/// Predicate on characters counted as `Common` instead of their own script.
pub type CharFilter = fn(char) -> bool;

/// Whitespace.
pub fn ignore_spaces(c: char) -> bool {
  c.is_whitespace()
}

/// ASCII digits.
pub fn ignore_latin_digits(c: char) -> bool {
  c.is_ascii_digit()
}

/// Punctuation of the Latin-1 range.
pub fn ignore_latin_punctuation(c: char) -> bool {
  c <= '\u{00FF}' && is_punctuation(c)
}

/// Share of one script in a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptShare {
  /// The script
  pub script: Script,
  /// Characters in this script
  pub chars: usize,
  /// Character index of the first occurrence
  pub first_index: usize,
  /// Number of contiguous runs
  pub runs: usize,
  /// Longest run, in characters
  pub longest_run: usize,
}

/// Script composition of a text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptProfile {
  total: usize,
  shares: Vec<ScriptShare>,
}

impl ScriptProfile {
  /// Number of characters profiled.
  pub fn total(&self) -> usize {
    self.total
  }

  /// Shares by descending character count (first occurrence breaks ties).
  pub fn shares(&self) -> &[ScriptShare] {
    &self.shares
  }

  /// Shares of real scripts only (no `Common`, `Inherited` or `Unknown`).
  pub fn ranked(&self) -> impl Iterator<Item = &ScriptShare> {
    self.shares.iter().filter(|share| {
      share.script != Script::COMMON
        && share.script != Script::INHERITED
        && share.script != Script::UNKNOWN
    })
  }

  /// Dominant real script.
  pub fn dominant(&self) -> Option<Script> {
    self.ranked().next().map(|share| share.script)
  }
}

/// Builds [`ScriptProfile`]s.
#[derive(Debug, Clone)]
pub struct ScriptProfiler {
  filters: Vec<CharFilter>,
  reference: Arc<ReferenceTables>,
}

impl ScriptProfiler {
  /// Profiler ignoring spaces, Latin digits and Latin punctuation.
  pub fn new(reference: Arc<ReferenceTables>) -> Self {
    Self::with_filters(reference, vec![ignore_spaces, ignore_latin_digits, ignore_latin_punctuation])
  }

  /// Profiler with custom filters.
  pub fn with_filters(reference: Arc<ReferenceTables>, filters: Vec<CharFilter>) -> Self {
    Self { filters, reference }
  }

  /// Profiles `text`.
  pub fn profile(&self, text: &str) -> ScriptProfile {
    let mut shares: Vec<ScriptShare> = Vec::new();
    let mut positions: HashMap<Script, usize> = HashMap::new();
    let mut previous: Option<Script> = None;
    let mut run = 0;
    let mut total = 0;

    for (index, c) in text.chars().enumerate() {
      total += 1;
      let script = if self.filters.iter().any(|filter| filter(c)) {
        Script::COMMON
      } else {
        self.script_of(c)
      };
      let position = *positions.entry(script).or_insert_with(|| {
        shares.push(ScriptShare {
          script,
          chars: 0,
          first_index: index,
          runs: 0,
          longest_run: 0,
        });
        shares.len() - 1
      });
      let share = &mut shares[position];
      share.chars += 1;
      if previous == Some(script) {
        run += 1;
      } else {
        share.runs += 1;
        run = 1;
      }
      share.longest_run = share.longest_run.max(run);
      previous = Some(script);
    }

    shares.sort_by(|a, b| b.chars.cmp(&a.chars).then(a.first_index.cmp(&b.first_index)));
    ScriptProfile { total, shares }
  }

  fn script_of(&self, c: char) -> Script {
    match c.script() {
      UnicodeScriptValue::Common => Script::COMMON,
      UnicodeScriptValue::Inherited => Script::INHERITED,
      script => self.reference.script_of(script),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analyzer
// ─────────────────────────────────────────────────────────────────────────────

/// Ranks the scripts of a text by their share of script characters.
#[derive(Debug, Clone)]
pub struct ScriptProfileAnalyzer {
  id: AnalyzerId,
  capabilities: Capabilities,
  profiler: ScriptProfiler,
}

impl ScriptProfileAnalyzer {
  /// Creates the analyzer.
  pub fn new(reference: Arc<ReferenceTables>) -> Self {
    Self {
      id: AnalyzerId::new(SCRIPT_PROFILE),
      capabilities: Capabilities::new()
        .accepting(InputKind::Text)
        .producing(Feature::Script)
        .ranked()
        .scored(),
      profiler: ScriptProfiler::new(reference),
    }
  }
}

impl Analyzer for ScriptProfileAnalyzer {
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
    let profile = self.profiler.profile(text);
    let counted: usize = profile.ranked().map(|share| share.chars).sum();
    if counted == 0 {
      return Ok(Vec::new());
    }
    Ok(
      profile
        .ranked()
        .map(|share| {
          Analysis::new()
            .with(Feature::Script, FeatureValue::Script(share.script))
            .with_score(share.chars as f64 / counted as f64)
        })
        .collect(),
    )
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
