// crates/narasu/src/stem/mod.rs

//! Stemmers
//!
//! Snowball stemmers come from `rust-stemmers`; Ukrainian uses a small suffix stemmer.
//! Languages without an algorithm simply have no stemmer.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer as SnowballAlgorithm};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Reduces inflected words to a root form.
pub trait Stemmer: Send + Sync + fmt::Debug {
  /// Stems a single word.
  fn stem(&self, word: &str) -> String;
}

/// Languages covered by the Snowball stemmers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnowballLanguage {
  /// Arabic
  Arabic,
  /// English (Porter2)
  English,
  /// French
  French,
  /// Russian
  Russian,
  /// Spanish
  Spanish,
}

impl SnowballLanguage {
  fn algorithm(self) -> Algorithm {
    match self {
      SnowballLanguage::Arabic => Algorithm::Arabic,
      SnowballLanguage::English => Algorithm::English,
      SnowballLanguage::French => Algorithm::French,
      SnowballLanguage::Russian => Algorithm::Russian,
      SnowballLanguage::Spanish => Algorithm::Spanish,
    }
  }
}

/// Which stemmer a language pack uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemmerKind {
  /// Snowball algorithm
  Snowball(SnowballLanguage),
  /// Ukrainian suffix stemmer
  Ukrainian,
}

impl StemmerKind {
  /// Instantiates the stemmer.
  pub fn build(self) -> Box<dyn Stemmer> {
    match self {
      StemmerKind::Snowball(language) => Box::new(SnowballStemmer::new(language)),
      StemmerKind::Ukrainian => Box::new(SuffixStemmer::ukrainian()),
    }
  }
}

/// `rust-stemmers` wrapper.
pub struct SnowballStemmer {
  language: SnowballLanguage,
  inner: SnowballAlgorithm,
}

impl SnowballStemmer {
  /// Creates the stemmer for `language`.
  pub fn new(language: SnowballLanguage) -> Self {
    Self {
      language,
      inner: SnowballAlgorithm::create(language.algorithm()),
    }
  }
}

impl fmt::Debug for SnowballStemmer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SnowballStemmer").field("language", &self.language).finish()
  }
}

impl Stemmer for SnowballStemmer {
  fn stem(&self, word: &str) -> String {
    self.inner.stem(&word.to_lowercase()).into_owned()
  }
}

/// Longest-suffix-first stemmer with an exception list.
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
  exceptions: &'static [(&'static str, &'static str)],
  suffixes: Vec<&'static str>,
}

impl SuffixStemmer {
  /// Creates a stemmer; suffixes are tried longest first.
  pub fn new(
    exceptions: &'static [(&'static str, &'static str)],
    suffixes: &[&'static str],
  ) -> Self {
    let mut suffixes = suffixes.to_vec();
    suffixes.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    Self {
      exceptions,
      suffixes,
    }
  }

  /// Ukrainian nominal endings.
  pub fn ukrainian() -> Self {
    Self::new(&[("істьість", "іс")], &["ість", "і", "ь", "и"])
  }
}

impl Stemmer for SuffixStemmer {
  fn stem(&self, word: &str) -> String {
    let word = word.nfkc().collect::<String>().to_lowercase();
    if let Some((_, stem)) = self.exceptions.iter().find(|(from, _)| *from == word) {
      return (*stem).to_string();
    }
    for suffix in &self.suffixes {
      // a suffix that is the whole word is not stripped
      if word.len() > suffix.len() && word.ends_with(suffix) {
        return word[..word.len() - suffix.len()].to_string();
      }
    }
    word
  }
}

/// Stems every word of `text`, keeping separators as they are.
pub fn stem_words(stemmer: &dyn Stemmer, text: &str) -> String {
  text
    .split_word_bounds()
    .map(|segment| {
      if segment.chars().any(char::is_alphanumeric) {
        stemmer.stem(segment)
      } else {
        segment.to_string()
      }
    })
    .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn english_snowball() {
    let stemmer = StemmerKind::Snowball(SnowballLanguage::English).build();
    assert_eq!(stemmer.stem("running"), "run");
    assert_eq!(stemmer.stem("Connections"), "connect");
  }

  #[test]
  fn russian_snowball() {
    let stemmer = SnowballStemmer::new(SnowballLanguage::Russian);
    assert_eq!(stemmer.stem("книгами"), "книг");
  }

  #[test]
  fn ukrainian_suffixes() {
    let stemmer = SuffixStemmer::ukrainian();
    assert_eq!(stemmer.stem("радість"), "рад");
    assert_eq!(stemmer.stem("Книги"), "книг");
    assert_eq!(stemmer.stem("міста"), "міста");
  }

  #[test]
  fn ukrainian_exception_wins() {
    let stemmer = SuffixStemmer::ukrainian();
    assert_eq!(stemmer.stem("істьість"), "іс");
  }

  #[test]
  fn whole_word_suffix_is_kept() {
    let stemmer = SuffixStemmer::ukrainian();
    assert_eq!(stemmer.stem("і"), "і");
  }

  #[test]
  fn stem_words_keeps_separators() {
    let stemmer = SnowballStemmer::new(SnowballLanguage::English);
    assert_eq!(stem_words(&stemmer, "running dogs, jumping"), "run dog, jump");
  }
}
