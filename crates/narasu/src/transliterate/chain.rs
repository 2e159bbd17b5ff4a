// crates/narasu/src/transliterate/chain.rs

//! Ordered transliterators of one language, keyed by [`TextType`].

use std::sync::Arc;

use tracing::debug;

use super::Transliterator;
use crate::models::TextType;
use crate::reference::Script;

/// One transliteration a language offers.
#[derive(Debug, Clone)]
pub struct ChainEntry {
  /// Output variant produced
  pub text_type: TextType,
  /// Script of the input
  pub source_script: Script,
  /// Script of the output
  pub target_script: Script,
  /// The transliterator
  pub transliterator: Arc<dyn Transliterator>,
}

/// Transliterators in declaration order; at most one per [`TextType`].
#[derive(Debug, Clone, Default)]
pub struct TransliteratorChain {
  entries: Vec<ChainEntry>,
}

impl TransliteratorChain {
  /// Empty chain.
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends an entry. A second entry for the same text type is ignored.
  pub fn push(&mut self, entry: ChainEntry) {
    if self.get(entry.text_type).is_some() {
      debug!(text_type = %entry.text_type, "duplicate chain entry ignored");
      return;
    }
    self.entries.push(entry);
  }

  /// Entry producing `text_type`.
  pub fn get(&self, text_type: TextType) -> Option<&ChainEntry> {
    self.entries.iter().find(|entry| entry.text_type == text_type)
  }

  /// Entries in order.
  pub fn entries(&self) -> &[ChainEntry] {
    &self.entries
  }

  /// Text types in order.
  pub fn text_types(&self) -> Vec<TextType> {
    self.entries.iter().map(|entry| entry.text_type).collect()
  }

  /// Number of entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the chain has no entry.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
