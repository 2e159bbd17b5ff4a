// crates/narasu/src/transformer/text_transformer.rs

//! Per-language text transformer.
//!
//! Composes the normalizer, the optional stemmer and the transliterator chain of
//! one [`LanguagePack`]. Sub-components are built on first use:
//! `Uninitialized → NormalizerReady → FullyReady`.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::{debug, warn};
use unicode_script::{Script as UnicodeScriptValue, UnicodeScript};

use super::language_pack::LanguagePack;
use crate::analysis::ScriptProfiler;
use crate::errors::TransformError;
use crate::models::{TextType, Transliteration};
use crate::normalize::{Normalizer, ProfileNormalizer};
use crate::reference::{Language, ReferenceTables, Script};
use crate::stem::{Stemmer, stem_words};
use crate::transliterate::{ChainEntry, TransliteratorChain, TransliteratorRegistry};

/// Initialization stage of a [`TextTransformer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransformerState {
  /// Nothing built yet
  Uninitialized,
  /// Normalizer (and stemmer) available
  NormalizerReady,
  /// Transliterator chain available
  FullyReady,
}

/// Language-specific normalization, stemming and transliteration.
#[derive(Debug)]
pub struct TextTransformer {
  pack: LanguagePack,
  target: Language,
  registry: Arc<TransliteratorRegistry>,
  normalizer: OnceLock<Box<dyn Normalizer>>,
  stemmer: OnceLock<Option<Box<dyn Stemmer>>>,
  chain: OnceLock<TransliteratorChain>,
  /// Serializes chain construction; a failed build is not cached
  chain_guard: Mutex<()>,
}

impl TextTransformer {
  /// Creates a transformer; nothing is built until first use.
  pub fn new(pack: LanguagePack, target: Language, registry: Arc<TransliteratorRegistry>) -> Self {
    Self {
      pack,
      target,
      registry,
      normalizer: OnceLock::new(),
      stemmer: OnceLock::new(),
      chain: OnceLock::new(),
      chain_guard: Mutex::new(()),
    }
  }

  // ===== Accessor Methods =====

  /// Language handled by this transformer.
  pub fn language(&self) -> Language {
    self.pack.language()
  }

  /// Target language of the transliterations.
  pub fn target_language(&self) -> Language {
    self.target
  }

  /// The underlying pack.
  pub fn pack(&self) -> &LanguagePack {
    &self.pack
  }

  /// Current initialization stage.
  pub fn state(&self) -> TransformerState {
    if self.chain.get().is_some() {
      TransformerState::FullyReady
    } else if self.normalizer.get().is_some() {
      TransformerState::NormalizerReady
    } else {
      TransformerState::Uninitialized
    }
  }

  // ===== Lazy Stages =====

  fn normalizer(&self) -> &dyn Normalizer {
    self
      .normalizer
      .get_or_init(|| {
        debug!(language = %self.language(), "normalizer initialized");
        Box::new(ProfileNormalizer::new(self.pack.profile()))
      })
      .as_ref()
  }

  fn stemmer(&self) -> Option<&dyn Stemmer> {
    self.normalizer();
    self.stemmer.get_or_init(|| self.pack.stemmer().map(|kind| kind.build())).as_deref()
  }

  fn chain(&self) -> Result<&TransliteratorChain, TransformError> {
    if let Some(chain) = self.chain.get() {
      return Ok(chain);
    }
    let _guard = self.chain_guard.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(chain) = self.chain.get() {
      return Ok(chain);
    }
    self.normalizer();
    let chain = self.build_chain()?;
    Ok(self.chain.get_or_init(move || chain))
  }

  fn build_chain(&self) -> Result<TransliteratorChain, TransformError> {
    let language = self.language();
    let mut chain = TransliteratorChain::new();
    for spec in self.pack.transliterations() {
      let key = spec.key_for(&self.target);
      if !self.registry.contains(&key) {
        warn!(
          language = %language,
          key = %key,
          text_type = %spec.text_type,
          "transliterator not registered; text type omitted"
        );
        continue;
      }
      let transliterator =
        self.registry.load(&key).map_err(|source| TransformError::Initialization {
          language: language.code().to_string(),
          source,
        })?;
      chain.push(ChainEntry {
        text_type: spec.text_type,
        source_script: self.pack.source_script(),
        target_script: spec.target_script,
        transliterator,
      });
    }
    debug!(language = %language, entries = chain.len(), "transliterator chain initialized");
    Ok(chain)
  }

  // ===== Normalization =====

  /// Index form using the language's remove-spaces default.
  pub fn normalize_for_index(&self, text: &str) -> String {
    let normalizer = self.normalizer();
    normalizer.normalize_for_index(text, normalizer.remove_spaces_for_index())
  }

  /// Index form with an explicit remove-spaces policy.
  pub fn normalize_for_index_with(&self, text: &str, remove_spaces: bool) -> String {
    self.normalizer().normalize_for_index(text, remove_spaces)
  }

  /// Scoring form.
  pub fn normalize_for_scoring(&self, text: &str) -> String {
    self.normalizer().normalize_for_scoring(text)
  }

  /// Display form.
  pub fn normalize_for_display(&self, text: &str) -> String {
    self.normalizer().normalize_for_display(text)
  }

  /// Default remove-spaces policy of the index form.
  pub fn remove_spaces_for_index(&self) -> bool {
    self.normalizer().remove_spaces_for_index()
  }

  // ===== Stemming =====

  /// Whether the language has a stemmer.
  pub fn has_stemmer(&self) -> bool {
    self.stemmer().is_some()
  }

  /// Stems `text` word by word.
  ///
  /// # Errors
  /// `TransformError::UnsupportedOperation` when the language has no stemmer.
  pub fn stem(&self, text: &str) -> Result<String, TransformError> {
    self.stemmer().map(|stemmer| stem_words(stemmer, text)).ok_or_else(|| {
      TransformError::UnsupportedOperation {
        language: self.language().code().to_string(),
        operation: "stem",
      }
    })
  }

  /// Stemmed index form: index (spaces kept) → stem → index (language default).
  ///
  /// Without a stemmer, or when stemming leaves nothing, the plain index form is used.
  pub fn index_form(&self, text: &str) -> String {
    let spaced = self.normalize_for_index_with(text, false);
    let stemmed = match self.stemmer() {
      Some(stemmer) => {
        let stemmed = stem_words(stemmer, &spaced);
        if stemmed.trim().is_empty() { spaced } else { stemmed }
      }
      None => spaced,
    };
    self.normalize_for_index(&stemmed)
  }

  // ===== Transformation =====

  /// Produces the `text_type` variant of raw `text`.
  ///
  /// Transliterations are applied to the display form.
  ///
  /// # Errors
  /// - `TransformError::UnsupportedTextType` if the chain has no such entry
  /// - `TransformError::Initialization` if the chain cannot be built
  pub fn transform(&self, text: &str, text_type: TextType) -> Result<String, TransformError> {
    match text_type {
      TextType::Original => Ok(text.to_string()),
      TextType::NormalizedDisplay => Ok(self.normalize_for_display(text)),
      TextType::NormalizedIndex => Ok(self.normalize_for_index(text)),
      TextType::NormalizedScoring => Ok(self.normalize_for_scoring(text)),
      _ => self.transliterate(&self.normalize_for_display(text), text_type),
    }
  }

  /// Applies the `text_type` transliterator to already normalized text.
  ///
  /// # Errors
  /// Same as [`transform`](Self::transform).
  pub fn transliterate(
    &self,
    normalized: &str,
    text_type: TextType,
  ) -> Result<String, TransformError> {
    let entry = self.chain()?.get(text_type).ok_or_else(|| TransformError::UnsupportedTextType {
      language: self.language().code().to_string(),
      text_type,
    })?;
    Ok(entry.transliterator.transliterate(normalized))
  }

  /// Every supported text type: the normal forms, then the chain in order.
  ///
  /// # Errors
  /// `TransformError::Initialization` if the chain cannot be built.
  pub fn text_types(&self) -> Result<Vec<TextType>, TransformError> {
    let mut text_types = vec![
      TextType::Original,
      TextType::NormalizedDisplay,
      TextType::NormalizedIndex,
      TextType::NormalizedScoring,
    ];
    text_types.extend(self.chain()?.text_types());
    Ok(text_types)
  }

  /// Whether `text_type` can be produced. A chain that fails to build supports nothing
  /// beyond the normal forms.
  pub fn supports(&self, text_type: TextType) -> bool {
    if text_type.is_normal_form() {
      return true;
    }
    match self.chain() {
      Ok(chain) => chain.get(text_type).is_some(),
      Err(e) => {
        warn!(language = %self.language(), error = %e, "transliterator chain unavailable");
        false
      }
    }
  }

  /// Every variant of `text`: the original (order 0) followed by each chain entry.
  ///
  /// Row 0 carries the dominant script of `text` and whether the language is written
  /// in it (always for the undetermined language). Index texts are stemmed
  /// ([`index_form`](Self::index_form)). The undetermined language only romanizes
  /// text containing non-Latin letters.
  ///
  /// # Errors
  /// `TransformError::Initialization` if the chain cannot be built.
  pub fn available_transforms(&self, text: &str) -> Result<Vec<Transliteration>, TransformError> {
    let display = self.normalize_for_display(text);
    let index = self.index_form(&display);
    let script = script_profiler().profile(text).dominant().unwrap_or(Script::COMMON);
    let mut rows = vec![Transliteration {
      is_source_script: self.is_source_script(script),
      order: 0,
      script: script.code().to_string(),
      transform_type: TextType::Original.label().to_string(),
      text: display.clone(),
      text_index: index.clone(),
    }];

    if self.language().is_undetermined() && !has_non_latin_letters(&display) {
      return Ok(rows);
    }

    for (position, entry) in self.chain()?.entries().iter().enumerate() {
      rows.push(Transliteration {
        is_source_script: false,
        order: position + 1,
        script: entry.target_script.code().to_string(),
        transform_type: entry.text_type.label().to_string(),
        text: entry.transliterator.transliterate(&display),
        text_index: entry.transliterator.transliterate(&index),
      });
    }
    Ok(rows)
  }

  fn is_source_script(&self, script: Script) -> bool {
    self.language().is_undetermined() || script == self.pack.source_script()
  }
}

/// Profiler shared by every transformer.
fn script_profiler() -> &'static ScriptProfiler {
  static PROFILER: OnceLock<ScriptProfiler> = OnceLock::new();
  PROFILER.get_or_init(|| ScriptProfiler::new(Arc::new(ReferenceTables::builtin())))
}

fn has_non_latin_letters(text: &str) -> bool {
  text.chars().any(|c| c.is_alphabetic() && c.script() != UnicodeScriptValue::Latin)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
