//! transformer module
//!
//! Per-language text transformers and the factory that resolves them.

pub mod factory;
pub mod language_pack;
pub mod text_transformer;

pub use factory::{TextTransformerFactory, TextTransformerFactoryBuilder};
pub use language_pack::{LanguagePack, TransliterationSpec};
pub use text_transformer::{TextTransformer, TransformerState};
