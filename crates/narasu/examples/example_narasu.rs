//! narasu crate example
//!
//! Analyzes a few texts, then prints every available transform of each one.

use anyhow::Context;
use narasu::analysis::Feature;
use narasu::{NarasuConfig, NarasuService, logging};

/// Sample texts in several scripts.
const SAMPLES: &[&str] = &[
  "I have no special chars",
  "Москва является столицей Российской Федерации",
  "Київ розташований на берегах Дніпра",
  "القدس مدينة قديمة",
  "北京是中华人民共和国的首都",
  "Ελληνική Δημοκρατία",
];

fn main() -> anyhow::Result<()> {
  // Use the path given as the first argument, or the defaults
  let config = match std::env::args().nth(1) {
    Some(path) => NarasuConfig::from_path(&path).with_context(|| format!("loading {path}"))?,
    None => NarasuConfig::default(),
  };

  // RUST_LOG overrides the configured level
  logging::init(&config.logging);

  let service = NarasuService::new(&config).context("initializing narasu")?;

  for (info, text) in service.analyze_batch(SAMPLES)?.iter().zip(SAMPLES) {
    println!(
      "\n{text}\n  language={} script={} length={:?} (language by {:?})",
      info.language(),
      info.script(),
      info.length(),
      info.source(Feature::Language).map(ToString::to_string),
    );

    let transformer = service.transformer_for(info);
    println!("  index form: {}", transformer.index_form(text));
    for row in service.transforms(text)? {
      println!("  [{}] {:<28} {} | {}", row.order, row.transform_type, row.text, row.text_index);
    }
  }

  service.shutdown();
  Ok(())
}
