//! transliterate module
//!
//! Script conversion: built-in tables, Chinese character sets and romanization, custom JSON tables
//! and the per-language chain.

pub mod chain;
pub mod key;
pub mod registry;
pub mod tables;
pub mod transliterator;
pub mod zho;

use std::fmt;

pub use chain::{ChainEntry, TransliteratorChain};
pub use key::{EndPoint, TransformKey};
pub use registry::TransliteratorRegistry;
pub use transliterator::{AnyLatinTransliterator, ExceptionTransliterator, MapTransliterator};
pub use zho::{ChineseVariant, ChineseVariantTransliterator, PinyinStyle, PinyinTransliterator};

/// Converts text from one script to another.
///
/// Characters the transliterator does not know pass through unchanged.
pub trait Transliterator: Send + Sync + fmt::Debug {
  /// The key this transliterator is registered under.
  fn key(&self) -> &TransformKey;

  /// Transliterates `text`.
  fn transliterate(&self, text: &str) -> String;
}
