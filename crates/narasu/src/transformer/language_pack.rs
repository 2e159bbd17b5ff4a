// crates/narasu/src/transformer/language_pack.rs

//! Language packs: the data that makes a [`TextTransformer`](super::TextTransformer)
//! language specific.

use crate::models::TextType;
use crate::normalize::NormalizerProfile;
use crate::reference::{Language, Script};
use crate::stem::{SnowballLanguage, StemmerKind};
use crate::transliterate::{EndPoint, TransformKey};

/// One transliteration a pack offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationSpec {
  /// Output variant
  pub text_type: TextType,
  /// Registry key (the target is replaced by the factory's target language)
  pub key: TransformKey,
  /// Script of the output
  pub target_script: Script,
}

impl TransliterationSpec {
  /// Romanization of `source` into English under `scheme`.
  pub fn to_english(text_type: TextType, source: &Language, scheme: &str) -> Self {
    Self {
      text_type,
      key: TransformKey::new(
        EndPoint::language(source.code()),
        EndPoint::language(Language::ENGLISH.code()),
        Some(scheme),
      ),
      target_script: Script::LATIN,
    }
  }

  /// Conversion of `source` into another `script` under `scheme`; independent of the
  /// target language.
  pub fn to_script(text_type: TextType, source: &Language, script: Script, scheme: &str) -> Self {
    Self {
      text_type,
      key: TransformKey::new(
        EndPoint::language(source.code()),
        EndPoint::script(script.code()),
        Some(scheme),
      ),
      target_script: script,
    }
  }

  /// Key to look up for `target`. Script targets are kept as they are.
  pub fn key_for(&self, target: &Language) -> TransformKey {
    match self.key.target() {
      EndPoint::Language(_) => self.key.with_target(EndPoint::language(target.code())),
      EndPoint::Any | EndPoint::Script(_) => self.key.clone(),
    }
  }
}

/// Everything language specific about a transformer.
#[derive(Debug, Clone)]
pub struct LanguagePack {
  language: Language,
  profile: NormalizerProfile,
  stemmer: Option<StemmerKind>,
  source_script: Script,
  transliterations: Vec<TransliterationSpec>,
}

impl LanguagePack {
  /// Pack without stemmer or transliterations.
  pub fn new(language: Language, source_script: Script, profile: NormalizerProfile) -> Self {
    Self {
      language,
      profile,
      stemmer: None,
      source_script,
      transliterations: Vec::new(),
    }
  }

  /// Sets the stemmer.
  pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
    self.stemmer = Some(stemmer);
    self
  }

  /// Appends a transliteration; declaration order is chain order.
  pub fn with_transliteration(mut self, spec: TransliterationSpec) -> Self {
    self.transliterations.push(spec);
    self
  }

  fn with_romanizations(self, schemes: &[(TextType, &str)]) -> Self {
    let language = self.language;
    schemes.iter().fold(self, |pack, (text_type, scheme)| {
      pack.with_transliteration(TransliterationSpec::to_english(*text_type, &language, scheme))
    })
  }

  // ===== Accessor Methods =====

  /// Language of the pack.
  pub fn language(&self) -> Language {
    self.language
  }

  /// Normalizer profile.
  pub fn profile(&self) -> NormalizerProfile {
    self.profile
  }

  /// Stemmer, if the language has one.
  pub fn stemmer(&self) -> Option<StemmerKind> {
    self.stemmer
  }

  /// Script the language is written in.
  pub fn source_script(&self) -> Script {
    self.source_script
  }

  /// Transliterations in chain order.
  pub fn transliterations(&self) -> &[TransliterationSpec] {
    &self.transliterations
  }

  // ===== Built-in Packs =====

  /// English
  pub fn english() -> Self {
    Self::new(Language::ENGLISH, Script::LATIN, NormalizerProfile::BASELINE)
      .with_stemmer(StemmerKind::Snowball(SnowballLanguage::English))
  }

  /// French
  pub fn french() -> Self {
    Self::new(Language::FRENCH, Script::LATIN, NormalizerProfile::BASELINE)
      .with_stemmer(StemmerKind::Snowball(SnowballLanguage::French))
  }

  /// Spanish
  pub fn spanish() -> Self {
    Self::new(Language::SPANISH, Script::LATIN, NormalizerProfile::BASELINE)
      .with_stemmer(StemmerKind::Snowball(SnowballLanguage::Spanish))
  }

  /// Russian: KeyTerms, BGN, GOST
  pub fn russian() -> Self {
    Self::new(Language::RUSSIAN, Script::CYRILLIC, NormalizerProfile::RUSSIAN)
      .with_stemmer(StemmerKind::Snowball(SnowballLanguage::Russian))
      .with_romanizations(&[
        (TextType::KeyTerms, "KeyTerms"),
        (TextType::Bgn, "BGN"),
        (TextType::Gost, "GOST"),
      ])
  }

  /// Ukrainian: KeyTerms, BGN
  pub fn ukrainian() -> Self {
    Self::new(Language::UKRAINIAN, Script::CYRILLIC, NormalizerProfile::UKRAINIAN)
      .with_stemmer(StemmerKind::Ukrainian)
      .with_romanizations(&[(TextType::KeyTerms, "KeyTerms"), (TextType::Bgn, "BGN")])
  }

  /// Arabic: KeyTerms, BGN
  pub fn arabic() -> Self {
    Self::new(Language::ARABIC, Script::ARABIC, NormalizerProfile::ARABIC)
      .with_stemmer(StemmerKind::Snowball(SnowballLanguage::Arabic))
      .with_romanizations(&[(TextType::KeyTerms, "KeyTerms"), (TextType::Bgn, "BGN")])
  }

  /// Chinese: Simplified, Traditional, Pinyin and Wade-Giles variants, no stemmer
  pub fn chinese() -> Self {
    let chinese = Language::CHINESE;
    Self::new(chinese, Script::HAN, NormalizerProfile::CHINESE)
      .with_transliteration(TransliterationSpec::to_script(
        TextType::ZhoSimplified,
        &chinese,
        Script::SIMPLIFIED_HAN,
        "Simplified",
      ))
      .with_transliteration(TransliterationSpec::to_script(
        TextType::ZhoTraditional,
        &chinese,
        Script::TRADITIONAL_HAN,
        "Traditional",
      ))
      .with_romanizations(&[
      (TextType::ZhoPinyin, "Pinyin"),
      (TextType::ZhoPinyinNumeric, "Pinyin-Numeric"),
      (TextType::ZhoPinyinNoTone, "Pinyin-NoTone"),
      (TextType::ZhoWadeGiles, "Wade-Giles"),
      (TextType::ZhoWadeGilesNoTone, "Wade-Giles-NoTone"),
    ])
  }

  /// Undetermined language: generic romanization of any script.
  pub fn undetermined() -> Self {
    Self::new(Language::UNDETERMINED, Script::COMMON, NormalizerProfile::BASELINE)
      .with_transliteration(TransliterationSpec {
        text_type: TextType::Bgn,
        key: TransformKey::new(EndPoint::Any, EndPoint::script(Script::LATIN.code()), Some("BGN")),
        target_script: Script::LATIN,
      })
  }

  /// Every built-in pack.
  pub fn builtin() -> Vec<LanguagePack> {
    vec![
      Self::arabic(),
      Self::english(),
      Self::french(),
      Self::russian(),
      Self::spanish(),
      Self::ukrainian(),
      Self::chinese(),
      Self::undetermined(),
    ]
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_codes() {
    let codes: Vec<&str> = LanguagePack::builtin().iter().map(|p| p.language().code()).collect();
    assert_eq!(codes, vec!["ara", "eng", "fra", "rus", "spa", "ukr", "zho", "und"]);
  }

  #[test]
  fn russian_chain_order() {
    let pack = LanguagePack::russian();
    let keys: Vec<String> = pack.transliterations().iter().map(|s| s.key.to_string()).collect();
    assert_eq!(keys, vec!["rus-eng/KeyTerms", "rus-eng/BGN", "rus-eng/GOST"]);
  }

  #[test]
  fn chinese_chain_order() {
    let pack = LanguagePack::chinese();
    let keys: Vec<String> = pack.transliterations().iter().map(|s| s.key.to_string()).collect();
    assert_eq!(&keys[..3], ["zho-Hans/Simplified", "zho-Hant/Traditional", "zho-eng/Pinyin"]);
    assert_eq!(pack.transliterations()[0].target_script, Script::SIMPLIFIED_HAN);
    assert_eq!(pack.transliterations()[1].target_script, Script::TRADITIONAL_HAN);
    // script conversions ignore the target language
    assert_eq!(
      pack.transliterations()[0].key_for(&Language::FRENCH).to_string(),
      "zho-Hans/Simplified"
    );
  }

  #[test]
  fn stemmer_presence() {
    assert!(LanguagePack::english().stemmer().is_some());
    assert!(LanguagePack::ukrainian().stemmer().is_some());
    assert!(LanguagePack::chinese().stemmer().is_none());
    assert!(LanguagePack::undetermined().stemmer().is_none());
  }

  #[test]
  fn key_for_retargets_languages_only() {
    let russian_pack = LanguagePack::russian();
    let russian = &russian_pack.transliterations()[1];
    assert_eq!(russian.key_for(&Language::FRENCH).to_string(), "rus-fra/BGN");

    let und_pack = LanguagePack::undetermined();
    let und = &und_pack.transliterations()[0];
    assert_eq!(und.key_for(&Language::FRENCH).to_string(), "Any-Latn/BGN");
  }
}
