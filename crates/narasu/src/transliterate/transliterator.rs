// crates/narasu/src/transliterate/transliterator.rs

//! Table-driven transliterators.

use std::collections::HashMap;
use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::tables::MapTable;
use super::{TransformKey, Transliterator};
use crate::normalize::string_normalizer::squinch;

// ─────────────────────────────────────────────────────────────────────────────
// MapTransliterator
// ─────────────────────────────────────────────────────────────────────────────

/// Greedy longest-match table transliterator.
///
/// Lookups are case-insensitive; the case of the source is carried over to the
/// replacement (`Щука` → `Shchuka`, `США` → `SSHA`).
#[derive(Debug, Clone)]
pub struct MapTransliterator {
  key: TransformKey,
  mappings: HashMap<String, String>,
  positional: HashMap<String, String>,
  context: Vec<char>,
  max_len: usize,
}

impl MapTransliterator {
  /// Builds a transliterator from a built-in table.
  pub fn new(key: TransformKey, table: &MapTable) -> Self {
    Self::from_entries(
      key,
      table.mappings.iter().map(|(from, to)| ((*from).to_string(), (*to).to_string())),
      table.positional.iter().map(|(from, to)| ((*from).to_string(), (*to).to_string())),
      table.context,
    )
  }

  /// Builds a transliterator from owned entries (custom tables).
  pub fn from_entries(
    key: TransformKey,
    mappings: impl IntoIterator<Item = (String, String)>,
    positional: impl IntoIterator<Item = (String, String)>,
    context: &str,
  ) -> Self {
    let prepare = |(from, to): (String, String)| (from.nfc().collect::<String>().to_lowercase(), to);
    let mappings: HashMap<String, String> = mappings.into_iter().map(prepare).collect();
    let positional: HashMap<String, String> = positional.into_iter().map(prepare).collect();
    let max_len = mappings
      .keys()
      .chain(positional.keys())
      .map(|from| from.chars().count())
      .max()
      .unwrap_or(0);
    Self {
      key,
      mappings,
      positional,
      context: context.nfc().flat_map(char::to_lowercase).collect(),
      max_len,
    }
  }

  /// Word start, or right after a context letter.
  fn is_positional(&self, chars: &[char], index: usize) -> bool {
    if index == 0 {
      return true;
    }
    let previous = chars[index - 1];
    !previous.is_alphabetic() || previous.to_lowercase().any(|c| self.context.contains(&c))
  }

  fn lookup(&self, segment: &str, positional: bool) -> Option<&String> {
    if positional && let Some(replacement) = self.positional.get(segment) {
      return Some(replacement);
    }
    self.mappings.get(segment)
  }
}

impl Transliterator for MapTransliterator {
  fn key(&self) -> &TransformKey {
    &self.key
  }

  fn transliterate(&self, text: &str) -> String {
    let chars: Vec<char> = text.nfc().collect();
    let mut out = String::with_capacity(text.len());
    let mut index = 0;
    while index < chars.len() {
      let positional = self.is_positional(&chars, index);
      let longest = self.max_len.min(chars.len() - index);
      let matched = (1..=longest).rev().find_map(|len| {
        let segment: String = chars[index..index + len].iter().collect::<String>().to_lowercase();
        self.lookup(&segment, positional).map(|replacement| (len, replacement))
      });
      match matched {
        Some((len, replacement)) => {
          out.push_str(&restore_case(&chars, index, len, replacement));
          index += len;
        }
        None => {
          out.push(chars[index]);
          index += 1;
        }
      }
    }
    out
  }
}

/// Applies the case of `chars[index..index + len]` to `replacement`.
fn restore_case(chars: &[char], index: usize, len: usize, replacement: &str) -> String {
  if !chars[index].is_uppercase() {
    return replacement.to_string();
  }
  let all_upper = if len > 1 {
    chars[index..index + len].iter().all(|c| !c.is_lowercase())
  } else {
    // single letter: look at the neighbours (acronyms)
    chars.get(index + 1).is_some_and(|c| c.is_uppercase())
      || (index > 0 && chars[index - 1].is_uppercase())
  };
  if all_upper {
    return replacement.to_uppercase();
  }
  let mut rest = replacement.chars();
  match rest.next() {
    Some(first) => first.to_uppercase().chain(rest).collect(),
    None => String::new(),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// ExceptionTransliterator
// ─────────────────────────────────────────────────────────────────────────────

/// Whole-word exceptions in front of another transliterator.
#[derive(Debug, Clone)]
pub struct ExceptionTransliterator {
  key: TransformKey,
  exceptions: HashMap<String, String>,
  base: Arc<dyn Transliterator>,
}

impl ExceptionTransliterator {
  /// Wraps `base`; exception words are matched case-insensitively.
  pub fn new(
    key: TransformKey,
    exceptions: impl IntoIterator<Item = (String, String)>,
    base: Arc<dyn Transliterator>,
  ) -> Self {
    Self {
      key,
      exceptions: exceptions
        .into_iter()
        .map(|(word, replacement)| (word.nfc().collect::<String>().to_lowercase(), replacement))
        .collect(),
      base,
    }
  }
}

impl Transliterator for ExceptionTransliterator {
  fn key(&self) -> &TransformKey {
    &self.key
  }

  fn transliterate(&self, text: &str) -> String {
    let text: String = text.nfc().collect();
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    for segment in text.split_word_bounds() {
      match self.exceptions.get(&segment.to_lowercase()) {
        Some(replacement) => {
          if !pending.is_empty() {
            out.push_str(&self.base.transliterate(&pending));
            pending.clear();
          }
          out.push_str(replacement);
        }
        None => pending.push_str(segment),
      }
    }
    if !pending.is_empty() {
      out.push_str(&self.base.transliterate(&pending));
    }
    out
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// AnyLatinTransliterator
// ─────────────────────────────────────────────────────────────────────────────

/// Generic romanization of any script (via `deunicode`).
///
/// Used for the undetermined language, where no dedicated table applies.
#[derive(Debug, Clone)]
pub struct AnyLatinTransliterator {
  key: TransformKey,
}

impl AnyLatinTransliterator {
  /// Creates the transliterator.
  pub fn new(key: TransformKey) -> Self {
    Self { key }
  }
}

impl Transliterator for AnyLatinTransliterator {
  fn key(&self) -> &TransformKey {
    &self.key
  }

  fn transliterate(&self, text: &str) -> String {
    if text.is_ascii() {
      return text.to_string();
    }
    // deunicode pads ideographs with spaces
    squinch(&deunicode::deunicode(text))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
