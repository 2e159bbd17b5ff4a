//! Data Model Definition
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::NarasuError;

/// Named output variant of transformed text.
///
/// Every variant has a machine key (unique) and a human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextType {
  /// The input text as given
  Original,
  /// BGN/PCGN romanization
  Bgn,
  /// GOST romanization
  Gost,
  /// Plain ASCII romanization used for key-term matching
  KeyTerms,
  /// Letter-by-letter romanization of acronyms
  KeyTermsAcronym,
  /// Composed form for rendering
  NormalizedDisplay,
  /// Uniqueness form for search indexes
  NormalizedIndex,
  /// Decomposed form for fuzzy scoring
  NormalizedScoring,
  /// Hanyu Pinyin with tone marks
  ZhoPinyin,
  /// Hanyu Pinyin with tone numbers
  ZhoPinyinNumeric,
  /// Hanyu Pinyin without tones
  ZhoPinyinNoTone,
  /// Wade-Giles with tone numbers
  ZhoWadeGiles,
  /// Wade-Giles without tones
  ZhoWadeGilesNoTone,
  /// Simplified Han characters
  ZhoSimplified,
  /// Traditional Han characters
  ZhoTraditional,
}

impl TextType {
  /// All variants, in declaration order.
  pub const ALL: [TextType; 15] = [
    TextType::Original,
    TextType::Bgn,
    TextType::Gost,
    TextType::KeyTerms,
    TextType::KeyTermsAcronym,
    TextType::NormalizedDisplay,
    TextType::NormalizedIndex,
    TextType::NormalizedScoring,
    TextType::ZhoPinyin,
    TextType::ZhoPinyinNumeric,
    TextType::ZhoPinyinNoTone,
    TextType::ZhoWadeGiles,
    TextType::ZhoWadeGilesNoTone,
    TextType::ZhoSimplified,
    TextType::ZhoTraditional,
  ];

  /// Machine key (unique across variants).
  pub fn key(&self) -> &'static str {
    match self {
      TextType::Original => "textOriginal",
      TextType::Bgn => "BGN",
      TextType::Gost => "GOST",
      TextType::KeyTerms => "KeyTerms",
      TextType::KeyTermsAcronym => "KeyTerms_acronym",
      TextType::NormalizedDisplay => "textDisplay",
      TextType::NormalizedIndex => "textIndex",
      TextType::NormalizedScoring => "textScoring",
      TextType::ZhoPinyin => "zho_pinyin",
      TextType::ZhoPinyinNumeric => "zho_pinyin_numeric",
      TextType::ZhoPinyinNoTone => "zho_pinyin_noTone",
      TextType::ZhoWadeGiles => "zho_wadeGiles",
      TextType::ZhoWadeGilesNoTone => "zho_wadeGiles_noTone",
      TextType::ZhoSimplified => "zho_simplified",
      TextType::ZhoTraditional => "zho_traditional",
    }
  }

  /// Human-readable label.
  pub fn label(&self) -> &'static str {
    match self {
      TextType::Original => "Original Text",
      TextType::Bgn => "BGN Standard",
      TextType::Gost => "GOST Standard",
      TextType::KeyTerms => "Key Terms",
      TextType::KeyTermsAcronym => "Key Terms-Acronym",
      TextType::NormalizedDisplay => "Text",
      TextType::NormalizedIndex => "Index Text",
      TextType::NormalizedScoring => "Scoring Text",
      TextType::ZhoPinyin => "Pinyin",
      TextType::ZhoPinyinNumeric => "Pinyin-Numeric",
      TextType::ZhoPinyinNoTone => "Pinyin-NoTone",
      TextType::ZhoWadeGiles => "Wade-Giles",
      TextType::ZhoWadeGilesNoTone => "Wade-Giles-NoTone",
      TextType::ZhoSimplified => "Simplified",
      TextType::ZhoTraditional => "Traditional",
    }
  }

  /// Resolves a variant from its machine key (case-insensitive).
  ///
  /// # Errors
  /// `NarasuError::UnknownTextType` if no variant has the key.
  pub fn from_key(key: &str) -> Result<TextType, NarasuError> {
    let key = key.trim();
    TextType::ALL
      .iter()
      .find(|text_type| text_type.key().eq_ignore_ascii_case(key))
      .copied()
      .ok_or_else(|| NarasuError::UnknownTextType {
        key: key.to_string(),
      })
  }

  /// Whether the variant is produced by the normalizer rather than a transliterator.
  pub fn is_normal_form(&self) -> bool {
    matches!(
      self,
      TextType::Original
        | TextType::NormalizedDisplay
        | TextType::NormalizedIndex
        | TextType::NormalizedScoring
    )
  }
}

impl fmt::Display for TextType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.key())
  }
}

/// One row of the available-transforms listing of a text.
///
/// Row 0 is always the original text in its source script; the following rows
/// are the registered transliterations, in chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transliteration {
  /// Whether `text` is still in the source script
  pub is_source_script: bool,

  /// Position in the listing
  pub order: usize,

  /// Script code of `text`
  pub script: String,

  /// Label of the variant (`TextType::label`)
  pub transform_type: String,

  /// Display form
  pub text: String,

  /// Index form
  pub text_index: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
