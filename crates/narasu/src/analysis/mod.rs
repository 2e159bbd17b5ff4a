//! analysis module
//!
//! Analyzers inspect raw input and report features (size, encoding, script,
//! language); the pipeline merges their results into a [`TextInfo`].

pub mod analyzer;
pub mod election;
pub mod language;
pub mod model;
pub mod pipeline;
pub mod script_profile;
pub mod text_stats;

pub use analyzer::Analyzer;
pub use election::{Election, MAX_VOTES, VOTING, VotingAnalyzer};
pub use language::{LANGUAGE, LanguageAnalyzer};
pub use model::{
  Analysis, AnalyzerId, AnalyzerInput, Capabilities, Feature, FeatureValue, InputKind, TextInfo,
};
pub use pipeline::{AnalyzerPipeline, AnalyzerPipelineBuilder, PipelineRun};
pub use script_profile::{
  CharFilter, SCRIPT_PROFILE, ScriptProfile, ScriptProfileAnalyzer, ScriptProfiler, ScriptShare,
};
pub use text_stats::{TEXT_STATS, TextStatsAnalyzer};
