// crates/narasu/src/transliterate/zho.rs

//! Chinese transliterators: Simplified/Traditional conversion (via `zhconv`),
//! Hanyu Pinyin (via the `pinyin` crate) and Wade-Giles.
//!
//! Romanized syllables are separated by single spaces; non-Han characters pass through.

use pinyin::ToPinyin;
use zhconv::{Variant, zhconv};

use super::{TransformKey, Transliterator};
use crate::normalize::string_normalizer::{is_punctuation, squinch};

/// Output style of [`PinyinTransliterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinyinStyle {
  /// `běi jīng`
  ToneMarks,
  /// `bei3 jing1`
  ToneNumbers,
  /// `bei jing`
  NoTone,
  /// `pei3 ching1`
  WadeGiles,
  /// `pei ching`
  WadeGilesNoTone,
}

/// Han → Latin romanization.
#[derive(Debug, Clone)]
pub struct PinyinTransliterator {
  key: TransformKey,
  style: PinyinStyle,
}

impl PinyinTransliterator {
  /// Creates a transliterator producing `style`.
  pub fn new(key: TransformKey, style: PinyinStyle) -> Self {
    Self { key, style }
  }

  /// The output style.
  pub fn style(&self) -> PinyinStyle {
    self.style
  }

  fn syllable(&self, pinyin: pinyin::Pinyin) -> String {
    match self.style {
      PinyinStyle::ToneMarks => pinyin.with_tone().to_string(),
      PinyinStyle::ToneNumbers => pinyin.with_tone_num_end().to_string(),
      PinyinStyle::NoTone => pinyin.plain().to_string(),
      PinyinStyle::WadeGiles => {
        let mut syllable = pinyin_to_wade_giles(pinyin.plain());
        if let Some(tone) = pinyin.with_tone_num_end().chars().last().filter(char::is_ascii_digit) {
          syllable.push(tone);
        }
        syllable
      }
      PinyinStyle::WadeGilesNoTone => pinyin_to_wade_giles(pinyin.plain()),
    }
  }
}

impl Transliterator for PinyinTransliterator {
  fn key(&self) -> &TransformKey {
    &self.key
  }

  fn transliterate(&self, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
      match c.to_pinyin() {
        Some(pinyin) => {
          if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
          }
          out.push_str(&self.syllable(pinyin));
          out.push(' ');
        }
        None => {
          // punctuation attaches to the preceding syllable
          if is_punctuation(c) || c.is_whitespace() {
            while out.ends_with(' ') {
              out.pop();
            }
          }
          out.push(c);
        }
      }
    }
    squinch(&out)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Simplified / Traditional
// ─────────────────────────────────────────────────────────────────────────────

/// Han character set produced by [`ChineseVariantTransliterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChineseVariant {
  /// `国语`
  Simplified,
  /// `國語`
  Traditional,
}

impl ChineseVariant {
  fn zhconv_variant(self) -> Variant {
    match self {
      ChineseVariant::Simplified => Variant::ZhHans,
      ChineseVariant::Traditional => Variant::ZhHant,
    }
  }
}

/// Han → Han conversion between the simplified and traditional character sets.
#[derive(Debug, Clone)]
pub struct ChineseVariantTransliterator {
  key: TransformKey,
  variant: ChineseVariant,
}

impl ChineseVariantTransliterator {
  /// Creates a transliterator converting to `variant`.
  pub fn new(key: TransformKey, variant: ChineseVariant) -> Self {
    Self { key, variant }
  }

  /// The output character set.
  pub fn variant(&self) -> ChineseVariant {
    self.variant
  }
}

impl Transliterator for ChineseVariantTransliterator {
  fn key(&self) -> &TransformKey {
    &self.key
  }

  fn transliterate(&self, text: &str) -> String {
    zhconv(text, self.variant.zhconv_variant())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wade-Giles
// ─────────────────────────────────────────────────────────────────────────────

/// Initials, longest first.
const INITIALS: &[(&str, &str)] = &[
  ("zh", "ch"),
  ("ch", "ch`"),
  ("sh", "sh"),
  ("b", "p"),
  ("p", "p`"),
  ("m", "m"),
  ("f", "f"),
  ("d", "t"),
  ("t", "t`"),
  ("n", "n"),
  ("l", "l"),
  ("g", "k"),
  ("k", "k`"),
  ("h", "h"),
  ("j", "ch"),
  ("q", "ch`"),
  ("x", "hs"),
  ("r", "j"),
  ("z", "ts"),
  ("c", "ts`"),
  ("s", "s"),
  ("y", "y"),
  ("w", "w"),
];

/// Converts one toneless Pinyin syllable to Wade-Giles.
///
/// The aspiration mark is written as a backtick (`ch`ing`).
pub fn pinyin_to_wade_giles(syllable: &str) -> String {
  let syllable = syllable.to_lowercase().replace('v', "ü");
  let whole = match syllable.as_str() {
    "zhi" => Some("chih"),
    "chi" => Some("ch`ih"),
    "shi" => Some("shih"),
    "ri" => Some("jih"),
    "zi" => Some("tzu"),
    "ci" => Some("tz`u"),
    "si" => Some("ssu"),
    "er" => Some("erh"),
    "yi" => Some("i"),
    "you" => Some("yu"),
    "yan" => Some("yen"),
    "ye" => Some("yeh"),
    "yong" => Some("yung"),
    "guo" => Some("kuo"),
    "kuo" => Some("k`uo"),
    "huo" => Some("huo"),
    "shuo" => Some("shuo"),
    _ => None,
  };
  if let Some(whole) = whole {
    return whole.to_string();
  }

  let (pinyin_initial, initial) = INITIALS
    .iter()
    .find(|(from, _)| syllable.starts_with(from))
    .map_or(("", ""), |(from, to)| (*from, *to));
  let mut fin = syllable[pinyin_initial.len()..].to_string();

  // after j/q/x/y a written `u` is `ü`
  if matches!(pinyin_initial, "j" | "q" | "x" | "y") && fin.starts_with('u') {
    fin.replace_range(0..1, "ü");
  }

  let fin = match fin.as_str() {
    "e" if matches!(pinyin_initial, "g" | "k" | "h") => "o".to_string(),
    "ui" if matches!(pinyin_initial, "g" | "k") => "uei".to_string(),
    "uo" => "o".to_string(),
    "ong" => "ung".to_string(),
    "iong" => "iung".to_string(),
    "ian" => "ien".to_string(),
    "ie" => "ieh".to_string(),
    "üe" => "üeh".to_string(),
    _ => fin,
  };
  format!("{initial}{fin}")
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
