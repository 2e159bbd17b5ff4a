// crates/narasu/src/normalize/profile.rs

//! Per-language normalizer profiles.
//!
//! A profile only carries the data in which a language differs from the baseline;
//! the algorithm is always [`normalize`](super::string_normalizer::normalize).

use super::Normalizer;
use super::string_normalizer::{NormalizeOptions, OutputForm, normalize};

/// Language-specific normalization data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerProfile {
  /// Whether index forms drop whitespace by default
  pub remove_spaces_for_index: bool,
  /// Letters kept intact when diacritics are stripped for the index form
  pub preserved: &'static [char],
  /// Character folds applied to index forms
  pub folds: &'static [(char, &'static str)],
}

impl NormalizerProfile {
  /// Baseline Unicode normalization (English, French, Spanish, undetermined).
  pub const BASELINE: NormalizerProfile = NormalizerProfile {
    remove_spaces_for_index: true,
    preserved: &[],
    folds: &[],
  };

  /// Russian: `й` is a letter of its own, `ё` folds to `е`.
  pub const RUSSIAN: NormalizerProfile = NormalizerProfile {
    remove_spaces_for_index: false,
    preserved: &['й', 'Й'],
    folds: &[],
  };

  /// Ukrainian: `й` and `ї` are letters of their own.
  pub const UKRAINIAN: NormalizerProfile = NormalizerProfile {
    remove_spaces_for_index: true,
    preserved: &['й', 'Й', 'ї', 'Ї'],
    folds: &[('\u{2019}', ""), ('\u{02BC}', "")],
  };

  /// Arabic: harakat are dropped with the diacritics, letter variants are folded.
  pub const ARABIC: NormalizerProfile = NormalizerProfile {
    remove_spaces_for_index: false,
    preserved: &[],
    folds: &[('ة', "ه"), ('ى', "ي"), ('\u{0640}', "")],
  };

  /// Chinese: words are not space separated, so spaces are kept.
  pub const CHINESE: NormalizerProfile = NormalizerProfile {
    remove_spaces_for_index: false,
    preserved: &[],
    folds: &[],
  };

  /// Options for the index form.
  pub fn index_options(&self, remove_spaces: bool) -> NormalizeOptions {
    NormalizeOptions {
      remove_line_breaks: true,
      remove_spaces,
      remove_control: true,
      remove_punctuation: true,
      normalize_punctuation: false,
      remove_diacritics: true,
      lowercase: true,
      preserved: self.preserved,
      folds: self.folds,
      form: OutputForm::Nfkd,
    }
  }

  /// Options for the scoring form.
  pub fn scoring_options(&self) -> NormalizeOptions {
    NormalizeOptions {
      remove_line_breaks: true,
      remove_control: true,
      normalize_punctuation: true,
      ..NormalizeOptions::passthrough(OutputForm::Nfkd)
    }
  }

  /// Options for the display form.
  pub fn display_options(&self) -> NormalizeOptions {
    NormalizeOptions::passthrough(OutputForm::Nfkc)
  }
}

/// [`Normalizer`] driven by a [`NormalizerProfile`].
#[derive(Debug, Clone, Copy)]
pub struct ProfileNormalizer {
  profile: NormalizerProfile,
}

impl ProfileNormalizer {
  /// Creates a normalizer for `profile`.
  pub fn new(profile: NormalizerProfile) -> Self {
    Self { profile }
  }

  /// The profile in use.
  pub fn profile(&self) -> &NormalizerProfile {
    &self.profile
  }
}

impl Normalizer for ProfileNormalizer {
  fn normalize_for_index(&self, text: &str, remove_spaces: bool) -> String {
    normalize(text, &self.profile.index_options(remove_spaces))
  }

  fn normalize_for_scoring(&self, text: &str) -> String {
    normalize(text, &self.profile.scoring_options())
  }

  fn normalize_for_display(&self, text: &str) -> String {
    normalize(text, &self.profile.display_options())
  }

  fn remove_spaces_for_index(&self) -> bool {
    self.profile.remove_spaces_for_index
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use unicode_normalization::UnicodeNormalization;

  fn all_profiles() -> Vec<NormalizerProfile> {
    vec![
      NormalizerProfile::BASELINE,
      NormalizerProfile::RUSSIAN,
      NormalizerProfile::UKRAINIAN,
      NormalizerProfile::ARABIC,
      NormalizerProfile::CHINESE,
    ]
  }

  const SAMPLES: &[&str] = &[
    "",
    "I have no special chars",
    "Crème Brûlée, s'il vous plaît!",
    "  Ｆｕｌｌ－width\tand\nlines ",
    "Москва — столица России. Ёлка, йогурт.",
    "Київ: Україна, м’ята, їжак",
    "مَدْرَسَةٌ الأولى",
    "北京市，中华人民共和国。",
    "ﬁ ㈱ ½ ß ǅ İstanbul",
  ];

  // ─── Index form ────────────────────────────────────────────────────────

  #[test]
  fn index_form_is_idempotent() {
    for profile in all_profiles() {
      let normalizer = ProfileNormalizer::new(profile);
      for remove_spaces in [false, true] {
        for sample in SAMPLES {
          let once = normalizer.normalize_for_index(sample, remove_spaces);
          let twice = normalizer.normalize_for_index(&once, remove_spaces);
          assert_eq!(once, twice, "profile={profile:?}, sample={sample:?}");
        }
      }
    }
  }

  #[test]
  fn russian_index_keeps_short_i_and_folds_yo() {
    let normalizer = ProfileNormalizer::new(NormalizerProfile::RUSSIAN);
    let index = normalizer.normalize_for_index("Ёлка, йогурт", false);
    let composed: String = index.nfc().collect();
    assert_eq!(composed, "елка йогурт");
  }

  #[test]
  fn arabic_index_strips_harakat_and_folds_letters() {
    let normalizer = ProfileNormalizer::new(NormalizerProfile::ARABIC);
    let index = normalizer.normalize_for_index("مَدْرَسَةٌ", false);
    assert_eq!(index, "مدرسه");
  }

  #[test]
  fn index_remove_spaces() {
    let normalizer = ProfileNormalizer::new(NormalizerProfile::BASELINE);
    assert_eq!(normalizer.normalize_for_index("New York", true), "newyork");
    assert_eq!(normalizer.normalize_for_index("New York", false), "new york");
    assert!(normalizer.remove_spaces_for_index());
  }

  // ─── Display / scoring forms ───────────────────────────────────────────

  #[test]
  fn display_form_is_stable() {
    for profile in all_profiles() {
      let normalizer = ProfileNormalizer::new(profile);
      for sample in SAMPLES {
        let once = normalizer.normalize_for_display(sample);
        assert_eq!(normalizer.normalize_for_display(&once), once, "sample={sample:?}");
      }
    }
  }

  #[test]
  fn display_form_composes_diacritics() {
    let normalizer = ProfileNormalizer::new(NormalizerProfile::BASELINE);
    assert_eq!(normalizer.normalize_for_display("Cre\u{0300}me"), "Crème");
    assert_eq!(
      normalizer.normalize_for_display("I have no special chars"),
      "I have no special chars"
    );
  }

  #[test]
  fn scoring_form_is_decomposed_and_keeps_spaces() {
    let normalizer = ProfileNormalizer::new(NormalizerProfile::BASELINE);
    let scoring = normalizer.normalize_for_scoring("Crème “Brûlée”");
    assert_eq!(scoring, "Cre\u{0300}me \"Bru\u{0302}le\u{0301}e\"");
  }
}
