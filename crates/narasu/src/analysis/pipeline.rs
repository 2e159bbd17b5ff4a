// crates/narasu/src/analysis/pipeline.rs

//! Runs analyzers in dependency order and merges their best results into a [`TextInfo`].
//!
//! - analyzers requiring a feature run after the analyzers producing it
//! - an analyzer whose required features are still unknown is skipped
//! - the first analyzer to set a feature wins, unless a later one is the
//!   configured priority analyzer for that feature
//! - a failing (or panicking) analyzer is logged and the others continue

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tracing::{debug, error, warn};

use super::analyzer::Analyzer;
use super::model::{Analysis, AnalyzerId, AnalyzerInput, Feature, TextInfo};
use crate::errors::AnalyzerError;

/// Name used in errors raised by the pipeline itself.
const PIPELINE: &str = "pipeline";

#[derive(Debug)]
struct Stage {
  analyzer: Arc<dyn Analyzer>,
  /// Serializes calls to exclusive analyzers
  lock: Mutex<()>,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineRun {
  /// Merged information
  pub info: TextInfo,
  /// Results of each analyzer that ran, best first
  pub results: BTreeMap<AnalyzerId, Vec<Analysis>>,
  /// Analyzers that failed
  pub failures: Vec<AnalyzerError>,
}

/// Ordered set of analyzers.
#[derive(Debug)]
pub struct AnalyzerPipeline {
  stages: Vec<Stage>,
  priorities: BTreeMap<Feature, String>,
  parallelism: usize,
  disposed: AtomicBool,
}

impl AnalyzerPipeline {
  /// Starts a builder.
  pub fn builder() -> AnalyzerPipelineBuilder {
    AnalyzerPipelineBuilder::default()
  }

  /// Ids of the analyzers, in execution order.
  pub fn analyzer_ids(&self) -> Vec<AnalyzerId> {
    self.stages.iter().map(|stage| stage.analyzer.id().clone()).collect()
  }

  /// Whether [`dispose`](Self::dispose) has run.
  pub fn is_disposed(&self) -> bool {
    self.disposed.load(Ordering::SeqCst)
  }

  fn ensure_live(&self) -> Result<(), AnalyzerError> {
    if self.is_disposed() {
      return Err(AnalyzerError::Disposed {
        analyzer: PIPELINE.to_string(),
      });
    }
    Ok(())
  }

  /// Analyzes text.
  ///
  /// # Errors
  /// `AnalyzerError::Disposed` once the pipeline is disposed.
  pub fn analyze(&self, text: &str) -> Result<TextInfo, AnalyzerError> {
    self.run(&AnalyzerInput::Text(text)).map(|run| run.info)
  }

  /// Runs every applicable analyzer on `input`.
  ///
  /// Empty input yields an empty [`TextInfo`].
  ///
  /// # Errors
  /// `AnalyzerError::Disposed` once the pipeline is disposed. Analyzer failures
  /// are reported in [`PipelineRun::failures`].
  pub fn run(&self, input: &AnalyzerInput<'_>) -> Result<PipelineRun, AnalyzerError> {
    self.ensure_live()?;
    let mut run = PipelineRun::default();
    if input.is_empty() {
      return Ok(run);
    }

    for stage in &self.stages {
      let analyzer = stage.analyzer.as_ref();
      let id = analyzer.id();
      let capabilities = analyzer.capabilities();
      if !capabilities.accepts(input.kind()) {
        continue;
      }
      if let Some(missing) = capabilities.requires().iter().find(|f| !run.info.has(**f)) {
        debug!(analyzer = %id, missing = %missing, "required feature unknown; analyzer skipped");
        continue;
      }

      let outcome = {
        let _guard = capabilities
          .is_exclusive()
          .then(|| stage.lock.lock().unwrap_or_else(PoisonError::into_inner));
        catch_unwind(AssertUnwindSafe(|| analyzer.analyze_with(input, &run.info)))
      };
      let analyses = match outcome {
        Ok(Ok(analyses)) => analyses,
        Ok(Err(e)) => {
          warn!(analyzer = %id, error = %e, "analyzer failed");
          run.failures.push(e);
          continue;
        }
        Err(payload) => {
          let reason = panic_reason(payload.as_ref());
          warn!(analyzer = %id, reason = %reason, "analyzer panicked");
          run.failures.push(AnalyzerError::Failure {
            analyzer: id.to_string(),
            reason,
          });
          continue;
        }
      };

      if let Some(best) = analyses.first() {
        self.merge(&mut run.info, best, id);
      }
      run.results.insert(id.clone(), analyses);
    }
    Ok(run)
  }

  fn merge(&self, info: &mut TextInfo, best: &Analysis, id: &AnalyzerId) {
    for (feature, value) in best.features() {
      let is_priority = self.priorities.get(feature).is_some_and(|name| name == id.name());
      if !info.has(*feature) || is_priority {
        info.set(*feature, value.clone(), id.clone());
      }
    }
  }

  /// Analyzes several texts on parallel scoped threads; results keep the input order.
  ///
  /// # Errors
  /// `AnalyzerError::Disposed` once the pipeline is disposed, or `Failure` if a
  /// worker thread dies.
  pub fn analyze_batch(&self, texts: &[&str]) -> Result<Vec<TextInfo>, AnalyzerError> {
    self.ensure_live()?;
    let chunk_size = texts.len().div_ceil(self.parallelism).max(1);
    let mut infos = Vec::with_capacity(texts.len());
    thread::scope(|scope| {
      let workers: Vec<_> = texts
        .chunks(chunk_size)
        .map(|chunk| {
          scope.spawn(move || {
            chunk.iter().map(|text| self.analyze(text)).collect::<Result<Vec<_>, _>>()
          })
        })
        .collect();
      for worker in workers {
        let chunk = worker.join().map_err(|payload| AnalyzerError::Failure {
          analyzer: PIPELINE.to_string(),
          reason: panic_reason(payload.as_ref()),
        })??;
        infos.extend(chunk);
      }
      Ok::<(), AnalyzerError>(())
    })?;
    Ok(infos)
  }

  /// Disposes every analyzer. Only the first call has an effect.
  pub fn dispose(&self) {
    if self.disposed.swap(true, Ordering::SeqCst) {
      return;
    }
    for stage in &self.stages {
      stage.analyzer.dispose();
    }
    debug!(analyzers = self.stages.len(), "analyzer pipeline disposed");
  }
}

impl Drop for AnalyzerPipeline {
  fn drop(&mut self) {
    self.dispose();
  }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
  if let Some(reason) = payload.downcast_ref::<&str>() {
    (*reason).to_string()
  } else if let Some(reason) = payload.downcast_ref::<String>() {
    reason.clone()
  } else {
    "unknown panic".to_string()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for [`AnalyzerPipeline`].
#[derive(Debug)]
pub struct AnalyzerPipelineBuilder {
  analyzers: Vec<Arc<dyn Analyzer>>,
  priorities: BTreeMap<Feature, String>,
  parallelism: usize,
}

impl Default for AnalyzerPipelineBuilder {
  fn default() -> Self {
    Self {
      analyzers: Vec::new(),
      priorities: BTreeMap::new(),
      parallelism: 1,
    }
  }
}

impl AnalyzerPipelineBuilder {
  /// Registers an analyzer. An analyzer with an id already registered is ignored.
  pub fn analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
    if self.analyzers.iter().any(|a| a.id() == analyzer.id()) {
      error!(analyzer = %analyzer.id(), "duplicate analyzer id; analyzer ignored");
      return self;
    }
    self.analyzers.push(analyzer);
    self
  }

  /// Results of the analyzer named `analyzer` override earlier values of `feature`.
  pub fn priority(mut self, feature: Feature, analyzer: impl Into<String>) -> Self {
    self.priorities.insert(feature, analyzer.into());
    self
  }

  /// Worker threads used by [`AnalyzerPipeline::analyze_batch`] (at least 1).
  pub fn parallelism(mut self, parallelism: usize) -> Self {
    self.parallelism = parallelism.max(1);
    self
  }

  /// Orders the analyzers and builds the pipeline.
  pub fn build(self) -> AnalyzerPipeline {
    let ordered = order_by_requirements(self.analyzers);
    debug!(
      analyzers = ?ordered.iter().map(|a| a.id().to_string()).collect::<Vec<_>>(),
      "analyzer pipeline built"
    );
    AnalyzerPipeline {
      stages: ordered
        .into_iter()
        .map(|analyzer| Stage {
          analyzer,
          lock: Mutex::new(()),
        })
        .collect(),
      priorities: self.priorities,
      parallelism: self.parallelism,
      disposed: AtomicBool::new(false),
    }
  }
}

/// Stable ordering: an analyzer is placed once every feature it requires that
/// some other analyzer produces has been produced. Cycles keep registration order.
fn order_by_requirements(mut pending: Vec<Arc<dyn Analyzer>>) -> Vec<Arc<dyn Analyzer>> {
  let mut ordered: Vec<Arc<dyn Analyzer>> = Vec::with_capacity(pending.len());
  let mut produced: BTreeSet<Feature> = BTreeSet::new();
  while !pending.is_empty() {
    let ready = pending.iter().position(|candidate| {
      candidate.capabilities().requires().iter().all(|feature| {
        produced.contains(feature)
          || !pending.iter().any(|other| {
            !Arc::ptr_eq(other, candidate) && other.capabilities().produces(*feature)
          })
      })
    });
    let next = pending.remove(ready.unwrap_or(0));
    produced.extend(next.capabilities().produced().iter().copied());
    ordered.push(next);
  }
  ordered
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
