//! normalize module
//!
//! Index / scoring / display normal forms.

pub mod profile;
pub mod string_normalizer;

use std::fmt;

pub use profile::{NormalizerProfile, ProfileNormalizer};
pub use string_normalizer::{NormalizeOptions, OutputForm};

/// Produces the normal forms of a language.
///
/// Implementations never fail: empty input yields empty output.
pub trait Normalizer: Send + Sync + fmt::Debug {
  /// Form used for uniqueness comparison in a search index. Idempotent.
  fn normalize_for_index(&self, text: &str, remove_spaces: bool) -> String;

  /// Decomposed form used for fuzzy matching.
  fn normalize_for_scoring(&self, text: &str) -> String;

  /// Composed form used for rendering.
  fn normalize_for_display(&self, text: &str) -> String;

  /// Default `remove_spaces` policy for [`normalize_for_index`](Self::normalize_for_index).
  fn remove_spaces_for_index(&self) -> bool;
}
