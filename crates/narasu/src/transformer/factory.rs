// crates/narasu/src/transformer/factory.rs

//! Resolves a language to its [`TextTransformer`].
//!
//! Transformers are built on first request, one per language code, and cached
//! for the lifetime of the factory. Unknown languages share the undetermined
//! transformer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::language_pack::LanguagePack;
use super::text_transformer::TextTransformer;
use crate::reference::Language;
use crate::transliterate::TransliteratorRegistry;

/// A registered pack and its cached transformer.
#[derive(Debug)]
struct PackSlot {
  pack: LanguagePack,
  transformer: OnceLock<Arc<TextTransformer>>,
  guard: Mutex<()>,
}

impl PackSlot {
  fn new(pack: LanguagePack) -> Self {
    Self {
      pack,
      transformer: OnceLock::new(),
      guard: Mutex::new(()),
    }
  }
}

/// Language → transformer registry.
#[derive(Debug)]
pub struct TextTransformerFactory {
  slots: HashMap<&'static str, PackSlot>,
  fallback: PackSlot,
  target: Language,
  registry: Arc<TransliteratorRegistry>,
  constructions: AtomicUsize,
}

impl TextTransformerFactory {
  /// Starts an empty builder (only the undetermined pack is registered).
  pub fn builder() -> TextTransformerFactoryBuilder {
    TextTransformerFactoryBuilder::default()
  }

  /// Factory with every built-in pack, targeting English.
  pub fn with_builtin_packs() -> Self {
    Self::builder().builtin_packs().build()
  }

  /// Transformer for `language`; the undetermined transformer when no pack matches.
  ///
  /// The first request per language constructs the transformer; concurrent
  /// first requests construct it exactly once.
  pub fn get_transformer(&self, language: &Language) -> Arc<TextTransformer> {
    let slot = self.slots.get(language.code()).unwrap_or(&self.fallback);
    if let Some(transformer) = slot.transformer.get() {
      return Arc::clone(transformer);
    }

    let _guard = slot.guard.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(transformer) = slot.transformer.get() {
      return Arc::clone(transformer);
    }
    let transformer = Arc::new(TextTransformer::new(
      slot.pack.clone(),
      self.target,
      Arc::clone(&self.registry),
    ));
    self.constructions.fetch_add(1, Ordering::SeqCst);
    debug!(
      requested = %language,
      resolved = %slot.pack.language(),
      "text transformer constructed"
    );
    Arc::clone(slot.transformer.get_or_init(move || transformer))
  }

  /// Whether a pack is registered for `language` (the undetermined language always is).
  pub fn has_pack(&self, language: &Language) -> bool {
    language.is_undetermined() || self.slots.contains_key(language.code())
  }

  /// Languages with a registered pack, sorted by code (undetermined excluded).
  pub fn languages(&self) -> Vec<Language> {
    let mut languages: Vec<Language> = self.slots.values().map(|slot| slot.pack.language()).collect();
    languages.sort();
    languages
  }

  /// Target language of the transliterations.
  pub fn target_language(&self) -> Language {
    self.target
  }

  /// Shared transliterator registry.
  pub fn registry(&self) -> &Arc<TransliteratorRegistry> {
    &self.registry
  }

  /// Number of transformers constructed so far.
  pub fn construction_count(&self) -> usize {
    self.constructions.load(Ordering::SeqCst)
  }
}

impl Default for TextTransformerFactory {
  fn default() -> Self {
    Self::with_builtin_packs()
  }
}

/// Builder for [`TextTransformerFactory`].
#[derive(Debug, Clone)]
pub struct TextTransformerFactoryBuilder {
  packs: Vec<LanguagePack>,
  undetermined: LanguagePack,
  target: Language,
  registry: Option<TransliteratorRegistry>,
}

impl Default for TextTransformerFactoryBuilder {
  fn default() -> Self {
    Self {
      packs: Vec::new(),
      undetermined: LanguagePack::undetermined(),
      target: Language::ENGLISH,
      registry: None,
    }
  }
}

impl TextTransformerFactoryBuilder {
  /// Registers a pack. A later pack for the same language replaces the earlier one;
  /// an undetermined pack replaces the fallback.
  pub fn pack(mut self, pack: LanguagePack) -> Self {
    if pack.language().is_undetermined() {
      self.undetermined = pack;
    } else {
      self.packs.retain(|p| p.language() != pack.language());
      self.packs.push(pack);
    }
    self
  }

  /// Registers every built-in pack.
  pub fn builtin_packs(self) -> Self {
    LanguagePack::builtin().into_iter().fold(self, Self::pack)
  }

  /// Target language of the transliterations (English by default).
  pub fn target_language(mut self, target: Language) -> Self {
    self.target = target;
    self
  }

  /// Transliterator registry (built-ins by default).
  pub fn registry(mut self, registry: TransliteratorRegistry) -> Self {
    self.registry = Some(registry);
    self
  }

  /// Builds the factory. No transformer is constructed yet.
  pub fn build(self) -> TextTransformerFactory {
    let slots: HashMap<&'static str, PackSlot> = self
      .packs
      .into_iter()
      .map(|pack| (pack.language().code(), PackSlot::new(pack)))
      .collect();
    debug!(packs = slots.len(), target = %self.target, "text transformer factory built");
    TextTransformerFactory {
      slots,
      fallback: PackSlot::new(self.undetermined),
      target: self.target,
      registry: Arc::new(self.registry.unwrap_or_else(TransliteratorRegistry::builtin)),
      constructions: AtomicUsize::new(0),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::TextType;

  #[test]
  fn exact_match_and_fallback() {
    let factory = TextTransformerFactory::with_builtin_packs();
    assert_eq!(factory.get_transformer(&Language::RUSSIAN).language(), Language::RUSSIAN);

    let greek = crate::reference::ReferenceTables::builtin().language_by_code("ell").unwrap();
    let fallback = factory.get_transformer(&greek);
    assert!(fallback.language().is_undetermined());
    assert!(!factory.has_pack(&greek));
  }

  #[test]
  fn transformers_are_cached() {
    let factory = TextTransformerFactory::with_builtin_packs();
    assert_eq!(factory.construction_count(), 0);
    let first = factory.get_transformer(&Language::ENGLISH);
    let second = factory.get_transformer(&Language::ENGLISH);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(factory.construction_count(), 1);

    factory.get_transformer(&Language::UNDETERMINED);
    assert_eq!(factory.construction_count(), 2);
  }

  #[test]
  fn builder_with_selected_packs() {
    let factory = TextTransformerFactory::builder().pack(LanguagePack::english()).build();
    assert_eq!(factory.languages(), vec![Language::ENGLISH]);
    assert!(factory.get_transformer(&Language::RUSSIAN).language().is_undetermined());
  }

  #[test]
  fn builtin_languages() {
    let factory = TextTransformerFactory::default();
    let codes: Vec<&str> = factory.languages().iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["ara", "eng", "fra", "rus", "spa", "ukr", "zho"]);
    assert!(factory.get_transformer(&Language::CHINESE).supports(TextType::ZhoPinyin));
  }
}
