//! crates/narasu/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: Analyze text -> Resolve transformer by detected language ->
//! Normalize -> Transliterate.

use std::sync::{Arc, Barrier};
use std::thread;

use narasu::analysis::{
  AnalyzerPipeline, Feature, LanguageAnalyzer, ScriptProfileAnalyzer, TextStatsAnalyzer,
};
use narasu::reference::{Language, ReferenceTables, Script};
use narasu::transformer::TextTransformerFactory;
use narasu::{NarasuConfig, NarasuService, TextType};

/// Pipeline with statistics, script profile and language identification.
fn create_pipeline() -> AnalyzerPipeline {
  let reference = Arc::new(ReferenceTables::builtin());
  AnalyzerPipeline::builder()
    .analyzer(Arc::new(TextStatsAnalyzer::new()))
    .analyzer(Arc::new(ScriptProfileAnalyzer::new(Arc::clone(&reference))))
    .analyzer(Arc::new(LanguageAnalyzer::new(
      reference,
      &[Language::ENGLISH, Language::RUSSIAN, Language::ARABIC, Language::CHINESE],
    )))
    .build()
}

#[test]
fn english_end_to_end() {
  let pipeline = create_pipeline();
  let factory = TextTransformerFactory::with_builtin_packs();

  let input = "I have no special chars";
  let info = pipeline.analyze(input).unwrap();
  assert_eq!(info.language(), Language::ENGLISH);
  assert_eq!(info.script(), Script::LATIN);
  assert_eq!(info.length(), Some(23));

  let transformer = factory.get_transformer(&info.language());
  assert_eq!(transformer.language(), Language::ENGLISH);
  assert_eq!(transformer.normalize_for_display(input), input);
}

#[test]
fn cyrillic_end_to_end() {
  let pipeline = create_pipeline();
  let factory = TextTransformerFactory::with_builtin_packs();

  let input = "Москва";
  let info = pipeline.analyze(input).unwrap();
  assert_eq!(info.script(), Script::CYRILLIC);
  assert_eq!(info.source(Feature::Script).map(|id| id.name()), Some("script_profile"));

  let transformer = factory.get_transformer(&Language::RUSSIAN);
  let normalized = transformer.normalize_for_display(input);
  let first = transformer.transliterate(&normalized, TextType::Bgn).unwrap();
  let second = transformer.transliterate(&normalized, TextType::Bgn).unwrap();
  assert_eq!(first, "Moskva");
  assert_eq!(first, second);
  assert!(first.is_ascii());
}

#[test]
fn empty_input_is_undetermined() {
  let pipeline = create_pipeline();
  for input in ["", "   "] {
    let info = pipeline.analyze(input).unwrap();
    assert!(info.is_empty());
    assert_eq!(info.written(), (Language::UNDETERMINED, Script::UNKNOWN));
  }
}

#[test]
fn concurrent_first_access_constructs_once() {
  const THREADS: usize = 16;
  let factory = Arc::new(TextTransformerFactory::with_builtin_packs());
  let barrier = Arc::new(Barrier::new(THREADS));

  let handles: Vec<_> = (0..THREADS)
    .map(|_| {
      let factory = Arc::clone(&factory);
      let barrier = Arc::clone(&barrier);
      thread::spawn(move || {
        barrier.wait();
        factory.get_transformer(&Language::UKRAINIAN)
      })
    })
    .collect();
  let transformers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

  assert_eq!(factory.construction_count(), 1);
  assert!(transformers.iter().all(|t| Arc::ptr_eq(t, &transformers[0])));
  assert_eq!(transformers[0].transform("Київ", TextType::Bgn).unwrap(), "Kyiv");
}

#[test]
fn normal_forms_are_stable() {
  let factory = TextTransformerFactory::with_builtin_packs();
  let samples = ["Crème Brûlée", "  Ёлки-палки! ", "القُدْس", "北京 市", "Straße"];
  for language in [Language::FRENCH, Language::RUSSIAN, Language::ARABIC, Language::CHINESE] {
    let transformer = factory.get_transformer(&language);
    for sample in samples {
      let index = transformer.normalize_for_index(sample);
      assert_eq!(transformer.normalize_for_index(&index), index, "{language}: {sample}");
      let display = transformer.normalize_for_display(sample);
      assert_eq!(transformer.normalize_for_display(&display), display, "{language}: {sample}");
    }
  }
}

#[test]
fn undetermined_romanizes_any_script() {
  let factory = TextTransformerFactory::with_builtin_packs();
  let transformer = factory.get_transformer(&Language::UNDETERMINED);
  for sample in ["Ελλάδα", "東京", "ქართული", "Ñandú"] {
    let latin = transformer.transform(sample, TextType::Bgn).unwrap();
    assert!(!latin.is_empty(), "{sample}");
    assert!(latin.is_ascii(), "{sample} -> {latin}");
  }
}

#[test]
fn service_from_toml() {
  let config = NarasuConfig::from_toml_str(
    r#"
      [transform]
      languages = ["rus", "ukr"]

      [analysis]
      analyzers = ["text_stats", "script_profile", "language"]
      languages = ["rus", "ukr", "eng"]
      parallelism = 2
    "#,
  )
  .unwrap();
  let service = NarasuService::new(&config).unwrap();

  let infos = service.analyze_batch(&["Hello there, how are you today?", "Слава Україні"]).unwrap();
  assert_eq!(infos[0].written(), (Language::ENGLISH, Script::LATIN));
  assert_eq!(infos[1].script(), Script::CYRILLIC);

  // Chinese has no pack here: und fallback romanizes it
  let zho = service.transformer("zho").unwrap();
  assert!(zho.language().is_undetermined());
  let latin = service.transform("zho", "北京", "BGN").unwrap();
  assert!(latin.to_ascii_lowercase().starts_with("bei"), "{latin}");
}
