// crates/narasu/src/analysis/election.rs

//! Ranked weighted voting, and the analyzer that elects features from other analyzers.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tracing::warn;

use super::analyzer::Analyzer;
use super::model::{
  Analysis, AnalyzerId, AnalyzerInput, Capabilities, Feature, FeatureValue, InputKind, TextInfo,
};
use crate::errors::AnalyzerError;

/// Votes counted per ballot.
pub const MAX_VOTES: usize = 5;

/// Score added to the winner of a tie.
const TIE_BREAK_BOOST: f64 = 0.001;

#[derive(Debug, Clone)]
struct Vote<C> {
  candidate: C,
  rank: usize,
  weight: f64,
}

impl<C> Vote<C> {
  /// `weight × (max_rank + 1 − rank)`, negative past `max_rank`.
  fn points(&self, max_rank: usize) -> f64 {
    self.weight * (max_rank as f64 + 1.0 - self.rank as f64)
  }
}

/// Ranked weighted election.
///
/// A vote of rank `r` (1 = first choice) is worth `weight × (max_rank + 1 − r)`;
/// votes ranked past `max_rank` do not count. Results are shares of the total,
/// best first. Ties at the top are broken by the highest mean vote, then the
/// highest single vote, then the lowest standard deviation; the winner gets a
/// small boost.
#[derive(Debug, Clone)]
pub struct Election<C> {
  max_rank: usize,
  votes: Vec<Vote<C>>,
}

impl<C: Clone + Eq + Hash> Election<C> {
  /// Election counting ranks `1..=max_rank`.
  pub fn new(max_rank: usize) -> Self {
    Self {
      max_rank,
      votes: Vec::new(),
    }
  }

  /// Adds a vote of weight 1.
  pub fn add(&mut self, candidate: C, rank: usize) {
    self.add_weighted(candidate, rank, 1.0);
  }

  /// Adds a weighted vote.
  pub fn add_weighted(&mut self, candidate: C, rank: usize, weight: f64) {
    self.votes.push(Vote {
      candidate,
      rank,
      weight,
    });
  }

  /// Number of votes cast.
  pub fn len(&self) -> usize {
    self.votes.len()
  }

  /// Whether no vote was cast.
  pub fn is_empty(&self) -> bool {
    self.votes.is_empty()
  }

  /// Candidates with their share, best first.
  pub fn results(&self) -> Vec<(C, f64)> {
    // group by candidate, first vote order
    let mut order: Vec<C> = Vec::new();
    let mut by_candidate: HashMap<C, Vec<&Vote<C>>> = HashMap::new();
    for vote in &self.votes {
      by_candidate
        .entry(vote.candidate.clone())
        .or_insert_with(|| {
          order.push(vote.candidate.clone());
          Vec::new()
        })
        .push(vote);
    }

    let mut total = 0.0;
    let mut scored: Vec<(C, f64)> = order
      .into_iter()
      .map(|candidate| {
        let score: f64 = by_candidate[&candidate]
          .iter()
          .filter(|vote| vote.rank <= self.max_rank)
          .map(|vote| vote.points(self.max_rank))
          .sum();
        total += score;
        (candidate, score)
      })
      .collect();
    if total > 0.0 {
      for (_, score) in &mut scored {
        *score /= total;
      }
    }
    sort_best_first(&mut scored);

    let Some(top) = scored.first().map(|(_, score)| *score) else {
      return scored;
    };
    let tied: Vec<usize> = (0..scored.len()).filter(|&i| scored[i].1 == top).collect();
    if tied.len() > 1 {
      let stats: Vec<(usize, VoteStats)> = tied
        .iter()
        .map(|&i| {
          let points = by_candidate[&scored[i].0].iter().map(|vote| vote.points(self.max_rank));
          (i, VoteStats::of(points))
        })
        .collect();
      let winner = best(&stats, |s| s.mean, true)
        .or_else(|| best(&stats, |s| s.max, true))
        .or_else(|| best(&stats, |s| s.std_dev, false));
      if let Some(winner) = winner {
        scored[winner].1 += TIE_BREAK_BOOST;
        sort_best_first(&mut scored);
      }
    }
    scored
  }

  /// Best candidate.
  pub fn winner(&self) -> Option<(C, f64)> {
    self.results().into_iter().next()
  }
}

fn sort_best_first<C>(scored: &mut [(C, f64)]) {
  scored.sort_by(|a, b| b.1.total_cmp(&a.1));
}

#[derive(Debug, Clone, Copy)]
struct VoteStats {
  mean: f64,
  max: f64,
  std_dev: f64,
}

impl VoteStats {
  fn of(points: impl Iterator<Item = f64>) -> Self {
    let points: Vec<f64> = points.collect();
    let count = points.len().max(1) as f64;
    let mean = points.iter().sum::<f64>() / count;
    let max = points.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = points.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / count;
    Self {
      mean,
      max,
      std_dev: variance.sqrt(),
    }
  }
}

/// Index of the best tied candidate by `metric`, if the top two differ.
fn best(stats: &[(usize, VoteStats)], metric: fn(&VoteStats) -> f64, high_wins: bool) -> Option<usize> {
  let mut sorted: Vec<&(usize, VoteStats)> = stats.iter().collect();
  sorted.sort_by(|a, b| {
    let ordering = metric(&a.1).total_cmp(&metric(&b.1));
    if high_wins { ordering.reverse() } else { ordering }
  });
  match sorted.as_slice() {
    [first, second, ..] if metric(&first.1) != metric(&second.1) => Some(first.0),
    _ => None,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// VotingAnalyzer
// ─────────────────────────────────────────────────────────────────────────────

/// Name used in ids.
pub const VOTING: &str = "voting";

/// Features the voting analyzer elects.
const ELECTED: [Feature; 3] = [Feature::Encoding, Feature::Language, Feature::Script];

/// Elects encoding, language and script from the rankings of child analyzers.
///
/// Each child votes with weight `1 / ballots`, its ranked results in order.
#[derive(Debug)]
pub struct VotingAnalyzer {
  id: AnalyzerId,
  capabilities: Capabilities,
  children: Vec<Arc<dyn Analyzer>>,
}

impl VotingAnalyzer {
  /// Voting over `children`.
  pub fn new(children: Vec<Arc<dyn Analyzer>>) -> Self {
    let mut capabilities = Capabilities::new().scored();
    for kind in [InputKind::Text, InputKind::Bytes] {
      if children.iter().any(|child| child.capabilities().accepts(kind)) {
        capabilities = capabilities.accepting(kind);
      }
    }
    for feature in ELECTED {
      if children.iter().any(|child| child.capabilities().produces(feature)) {
        capabilities = capabilities.producing(feature);
      }
    }
    let id = AnalyzerId::with_options(VOTING, children.iter().map(|child| child.id().to_string()));
    Self {
      id,
      capabilities,
      children,
    }
  }
}

impl Analyzer for VotingAnalyzer {
  fn id(&self) -> &AnalyzerId {
    &self.id
  }

  fn capabilities(&self) -> &Capabilities {
    &self.capabilities
  }

  fn detect(
    &self,
    input: &AnalyzerInput<'_>,
    known: &TextInfo,
  ) -> Result<Vec<Analysis>, AnalyzerError> {
    let mut ballots: Vec<(&AnalyzerId, Vec<Analysis>)> = Vec::new();
    for child in &self.children {
      match child.analyze_with(input, known) {
        Ok(analyses) => ballots.push((child.id(), analyses)),
        Err(e) => warn!(analyzer = %child.id(), error = %e, "voting child failed"),
      }
    }
    let mut ballots_per_analyzer: HashMap<&str, usize> = HashMap::new();
    for (id, _) in &ballots {
      *ballots_per_analyzer.entry(id.name()).or_default() += 1;
    }

    let mut elected = Analysis::new();
    let mut shares = Vec::new();
    for feature in ELECTED {
      let mut election: Election<FeatureValue> = Election::new(MAX_VOTES);
      for (id, analyses) in &ballots {
        let weight = 1.0 / ballots_per_analyzer[id.name()] as f64;
        for (rank, analysis) in analyses.iter().enumerate() {
          if let Some(value) = analysis.get(feature) {
            election.add_weighted(value.clone(), rank + 1, weight);
          }
        }
      }
      if let Some((value, share)) = election.winner() {
        elected.set(feature, value);
        shares.push(share);
      }
    }

    if elected.is_empty() {
      return Ok(Vec::new());
    }
    let score = shares.iter().sum::<f64>() / shares.len() as f64;
    Ok(vec![elected.with_score(score)])
  }

  fn dispose(&self) {
    for child in &self.children {
      child.dispose();
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
