// crates/narasu/src/normalize/string_normalizer.rs

//! Generic string normalization shared by every language profile.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Delimiter used to pad n-grams at word edges.
pub const DEFAULT_NGRAM_DELIMITER: char = '#';

/// Unicode normalization form applied as the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputForm {
  /// Canonical composition
  Nfc,
  /// Canonical decomposition
  Nfd,
  /// Compatibility composition
  Nfkc,
  /// Compatibility decomposition
  Nfkd,
}

impl OutputForm {
  /// Whether the form folds compatibility characters (ligatures, full-width forms, ...).
  pub fn is_compatibility(self) -> bool {
    matches!(self, OutputForm::Nfkc | OutputForm::Nfkd)
  }

  /// Applies the form to `input`.
  pub fn apply(self, input: &str) -> String {
    match self {
      OutputForm::Nfc => input.nfc().collect(),
      OutputForm::Nfd => input.nfd().collect(),
      OutputForm::Nfkc => input.nfkc().collect(),
      OutputForm::Nfkd => input.nfkd().collect(),
    }
  }
}

/// Switches for [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
  /// Line breaks become a space (or are dropped when `remove_spaces` is set)
  pub remove_line_breaks: bool,
  /// Drop whitespace
  pub remove_spaces: bool,
  /// Drop control characters
  pub remove_control: bool,
  /// Drop punctuation
  pub remove_punctuation: bool,
  /// Map typographic punctuation to ASCII
  pub normalize_punctuation: bool,
  /// Drop combining marks
  pub remove_diacritics: bool,
  /// Lowercase the result
  pub lowercase: bool,
  /// Letters kept composed when diacritics are removed (e.g. Cyrillic `й`)
  pub preserved: &'static [char],
  /// Character folds applied after filtering
  pub folds: &'static [(char, &'static str)],
  /// Final normalization form
  pub form: OutputForm,
}

impl NormalizeOptions {
  /// Options that only apply `form`.
  pub const fn passthrough(form: OutputForm) -> Self {
    Self {
      remove_line_breaks: false,
      remove_spaces: false,
      remove_control: false,
      remove_punctuation: false,
      normalize_punctuation: false,
      remove_diacritics: false,
      lowercase: false,
      preserved: &[],
      folds: &[],
      form,
    }
  }
}

/// Normalizes `input` according to `options`.
///
/// Steps: compose, decompose everything except preserved letters, turn `·` into a
/// space, filter, fold, compose, lowercase, apply the output form.
pub fn normalize(input: &str, options: &NormalizeOptions) -> String {
  if input.is_empty() {
    return String::new();
  }

  let composed: String = if options.form.is_compatibility() {
    input.nfkc().collect()
  } else {
    input.nfc().collect()
  };

  let mut decomposed = String::with_capacity(composed.len());
  for c in composed.chars() {
    if options.preserved.contains(&c) {
      decomposed.push(c);
    } else {
      decomposed.extend(std::iter::once(c).nfd());
    }
  }

  let mut filtered = String::with_capacity(decomposed.len());
  for c in decomposed.chars() {
    // U+00B7 separates the parts of foreign names written in Chinese
    let c = if c == '\u{00B7}' { ' ' } else { c };

    if options.remove_line_breaks && is_line_break(c) {
      if !options.remove_spaces {
        filtered.push(' ');
      }
      continue;
    }
    if (options.remove_control && c.is_control())
      || (options.remove_spaces && c.is_whitespace())
      || (options.remove_punctuation && is_punctuation(c))
      || (options.remove_diacritics && is_combining_mark(c))
    {
      continue;
    }
    if options.normalize_punctuation
      && let Some(replacement) = punctuation_replacement(c)
    {
      filtered.push_str(replacement);
      continue;
    }
    filtered.push(c);
  }

  let folded = if options.folds.is_empty() {
    filtered
  } else {
    fold(&filtered, options.folds)
  };

  let mut output: String = folded.nfc().collect();
  if options.lowercase {
    output = output.to_lowercase();
  }
  options.form.apply(&output)
}

fn fold(input: &str, folds: &[(char, &str)]) -> String {
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    match folds.iter().find(|(from, _)| *from == c) {
      Some((_, to)) => out.push_str(to),
      None => out.push(c),
    }
  }
  out
}

/// Whether `c` ends a line.
pub fn is_line_break(c: char) -> bool {
  matches!(
    c,
    '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
  )
}

/// Whether `c` is punctuation (Unicode `P*` categories, including the
/// half-width and full-width forms).
pub fn is_punctuation(c: char) -> bool {
  if c.is_ascii() {
    return c.is_ascii_punctuation()
      && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
  }
  matches!(c,
    '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
    | '\u{037E}' | '\u{0387}'
    | '\u{055A}'..='\u{055F}' | '\u{0589}' | '\u{058A}'
    | '\u{05BE}' | '\u{05C0}' | '\u{05C3}' | '\u{05C6}' | '\u{05F3}' | '\u{05F4}'
    | '\u{0609}' | '\u{060A}' | '\u{060C}' | '\u{060D}' | '\u{061B}'
    | '\u{061D}'..='\u{061F}' | '\u{066A}'..='\u{066D}' | '\u{06D4}'
    | '\u{0964}' | '\u{0965}' | '\u{0970}'
    | '\u{0E4F}' | '\u{0E5A}' | '\u{0E5B}'
    | '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{2043}' | '\u{2045}'..='\u{2051}'
    | '\u{2053}'..='\u{205E}' | '\u{207D}' | '\u{207E}' | '\u{208D}' | '\u{208E}'
    | '\u{2308}'..='\u{230B}' | '\u{2329}' | '\u{232A}' | '\u{2768}'..='\u{2775}'
    | '\u{27C5}' | '\u{27C6}' | '\u{27E6}'..='\u{27EF}' | '\u{2983}'..='\u{2998}'
    | '\u{29D8}'..='\u{29DB}' | '\u{29FC}' | '\u{29FD}'
    | '\u{2E00}'..='\u{2E4F}'
    | '\u{3001}'..='\u{3003}' | '\u{3008}'..='\u{3011}' | '\u{3014}'..='\u{301F}'
    | '\u{3030}' | '\u{303D}' | '\u{30A0}' | '\u{30FB}'
    | '\u{FE10}'..='\u{FE19}' | '\u{FE30}'..='\u{FE52}' | '\u{FE54}'..='\u{FE61}'
    | '\u{FE63}' | '\u{FE68}' | '\u{FE6A}' | '\u{FE6B}'
    | '\u{FF01}'..='\u{FF03}' | '\u{FF05}'..='\u{FF0A}' | '\u{FF0C}'..='\u{FF0F}'
    | '\u{FF1A}' | '\u{FF1B}' | '\u{FF1F}' | '\u{FF20}' | '\u{FF3B}'..='\u{FF3D}'
    | '\u{FF3F}' | '\u{FF5B}' | '\u{FF5D}' | '\u{FF5F}'..='\u{FF65}'
  )
}

/// ASCII replacement for typographic punctuation.
fn punctuation_replacement(c: char) -> Option<&'static str> {
  let replacement = match c {
    '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '\u{2039}' | '\u{203A}' => "'",
    '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' | '\u{00AB}' | '\u{00BB}' => "\"",
    '\u{300C}' | '\u{300D}' | '\u{300E}' | '\u{300F}' => "\"",
    '\u{2010}'..='\u{2015}' | '\u{2212}' => "-",
    '\u{2026}' => "...",
    '\u{060C}' | '\u{3001}' => ",",
    '\u{061B}' => ";",
    '\u{061F}' => "?",
    '\u{066A}' => "%",
    '\u{06D4}' | '\u{3002}' => ".",
    _ => return None,
  };
  Some(replacement)
}

/// Collapses every run of whitespace into a single space and trims both ends.
pub fn squinch(input: &str) -> String {
  input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes all whitespace.
pub fn scrunch(input: &str) -> String {
  input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Removes combining marks (accents, harakat, ...) and recomposes.
pub fn remove_diacritics(input: &str) -> String {
  input.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Removes punctuation characters.
pub fn remove_punctuation(input: &str) -> String {
  input.chars().filter(|c| !is_punctuation(*c)).collect()
}

/// Keeps only letters and digits (plus single spaces unless `remove_spaces`).
///
/// Ligatures are expanded first (`ß`→`ss`, `æ`→`ae`, `œ`→`oe`, `ᵫ`→`ue`) and
/// diacritics are dropped.
pub fn remove_all_non_word_chars(input: &str, remove_spaces: bool) -> String {
  const LIGATURES: &[(char, &str)] = &[
    ('ß', "ss"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('ᵫ', "ue"),
  ];

  let expanded = fold(input, LIGATURES);
  let stripped = remove_diacritics(&expanded);
  let kept: String = stripped
    .chars()
    .map(|c| if c.is_whitespace() { ' ' } else { c })
    .filter(|c| c.is_alphanumeric() || (*c == ' ' && !remove_spaces))
    .collect();
  squinch(&kept)
}

/// Character n-grams of `input`, padded with `delimiter` on both ends.
///
/// Returns an empty list for empty input or `n == 0`.
pub fn ngrams(input: &str, n: usize, delimiter: char) -> Vec<String> {
  if input.is_empty() || n == 0 {
    return Vec::new();
  }
  let padded: Vec<char> =
    std::iter::once(delimiter).chain(input.chars()).chain(std::iter::once(delimiter)).collect();
  if padded.len() < n {
    return vec![padded.into_iter().collect()];
  }
  padded.windows(n).map(|window| window.iter().collect()).collect()
}

/// Padded character bigrams.
pub fn bigrams(input: &str) -> Vec<String> {
  ngrams(input, 2, DEFAULT_NGRAM_DELIMITER)
}

/// Padded character trigrams.
pub fn trigrams(input: &str) -> Vec<String> {
  ngrams(input, 3, DEFAULT_NGRAM_DELIMITER)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const INDEX: NormalizeOptions = NormalizeOptions {
    remove_line_breaks: true,
    remove_spaces: false,
    remove_control: true,
    remove_punctuation: true,
    normalize_punctuation: false,
    remove_diacritics: true,
    lowercase: true,
    preserved: &[],
    folds: &[],
    form: OutputForm::Nfkd,
  };

  // ─── normalize() ───────────────────────────────────────────────────────

  #[test]
  fn empty_input_returns_empty() {
    assert_eq!(normalize("", &INDEX), "");
  }

  #[test]
  fn index_options_strip_case_punctuation_and_accents() {
    assert_eq!(normalize("Crème Brûlée!", &INDEX), "creme brulee");
  }

  #[test]
  fn line_breaks_become_spaces_when_spaces_are_kept() {
    assert_eq!(normalize("one\ntwo", &INDEX), "one two");
  }

  #[test]
  fn line_breaks_are_dropped_when_spaces_are_removed() {
    let options = NormalizeOptions {
      remove_spaces: true,
      ..INDEX
    };
    assert_eq!(normalize("one\ntwo three", &options), "onetwothree");
  }

  #[test]
  fn middle_dot_becomes_space() {
    let options = NormalizeOptions::passthrough(OutputForm::Nfc);
    assert_eq!(normalize("列夫\u{00B7}托尔斯泰", &options), "列夫 托尔斯泰");
  }

  #[test]
  fn preserved_letters_keep_their_marks() {
    let options = NormalizeOptions {
      preserved: &['й', 'Й'],
      form: OutputForm::Nfkc,
      ..INDEX
    };
    assert_eq!(normalize("Чайка ёж", &options), "чайка еж");
  }

  #[test]
  fn compatibility_characters_fold_before_filtering() {
    // ㈱ decomposes to "(株)"; the parentheses must go in the first pass
    let once = normalize("㈱ＡＢＣ", &INDEX);
    assert_eq!(once, "株abc");
    assert_eq!(normalize(&once, &INDEX), once);
  }

  #[test]
  fn punctuation_is_mapped_to_ascii() {
    let options = NormalizeOptions {
      normalize_punctuation: true,
      ..NormalizeOptions::passthrough(OutputForm::Nfkd)
    };
    assert_eq!(normalize("“quoted” – text", &options), "\"quoted\" - text");
  }

  #[test]
  fn folds_are_applied() {
    let options = NormalizeOptions {
      folds: &[('ة', "ه")],
      ..NormalizeOptions::passthrough(OutputForm::Nfc)
    };
    assert_eq!(normalize("مدرسة", &options), "مدرسه");
  }

  // ─── helpers ───────────────────────────────────────────────────────────

  #[test]
  fn punctuation_classification() {
    assert!(is_punctuation('!'));
    assert!(is_punctuation('،'));
    assert!(is_punctuation('。'));
    assert!(is_punctuation('«'));
    assert!(!is_punctuation('$'));
    assert!(!is_punctuation('a'));
    assert!(!is_punctuation(' '));
  }

  #[test]
  fn squinch_and_scrunch() {
    assert_eq!(squinch("  a \t b\n\nc  "), "a b c");
    assert_eq!(scrunch(" a b\tc "), "abc");
  }

  #[test]
  fn remove_diacritics_keeps_base_letters() {
    assert_eq!(remove_diacritics("Ångström"), "Angstrom");
  }

  #[test]
  fn remove_punctuation_keeps_symbols() {
    assert_eq!(remove_punctuation("a-b, c$"), "ab c$");
  }

  #[test]
  fn remove_all_non_word_chars_expands_ligatures() {
    assert_eq!(remove_all_non_word_chars("Straße, Æsop & œuvre", false), "Strasse AEsop oeuvre");
    assert_eq!(remove_all_non_word_chars("Straße, Æsop", true), "StrasseAEsop");
  }

  #[test]
  fn ngrams_are_padded() {
    assert_eq!(bigrams("ab"), vec!["#a", "ab", "b#"]);
    assert_eq!(trigrams("ab"), vec!["#ab", "ab#"]);
    assert!(bigrams("").is_empty());
  }
}
