// crates/narasu/src/service.rs

//! NarasuService: narasu クレートの統合ファサード。
//!
//! - 参照テーブル (ReferenceTables)
//! - 解析パイプライン (AnalyzerPipeline) - 言語・文字体系・サイズ等の判定
//! - 変換器ファクトリー (TextTransformerFactory) - 言語ごとの正規化・翻字
//!
//! 外部からは、この構造体だけを意識すればよい。

use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::{
  Analyzer, AnalyzerInput, AnalyzerPipeline, Feature, LanguageAnalyzer, ScriptProfileAnalyzer,
  TextInfo, TextStatsAnalyzer, VotingAnalyzer,
};
use crate::config::{AnalyzerKind, NarasuConfig};
use crate::errors::{NarasuError, NarasuResult};
use crate::models::{TextType, Transliteration};
use crate::reference::{Language, ReferenceTables};
use crate::transformer::{TextTransformer, TextTransformerFactory};
use crate::transliterate::TransliteratorRegistry;

/// narasu クレートの統合ファサード。
///
/// 解析 → 言語に応じた変換器の選択 → 正規化・翻字、の流れをまとめて提供する。
#[derive(Debug)]
pub struct NarasuService {
  /// 参照テーブル（言語・文字体系）
  reference: Arc<ReferenceTables>,

  /// 解析パイプライン
  pipeline: AnalyzerPipeline,

  /// 言語ごとの変換器
  factory: TextTransformerFactory,
}

impl NarasuService {
  /// 初期化（設定検証 + 翻字テーブル登録 + パイプライン・ファクトリー構築）
  ///
  /// 変換器は初回利用時に構築されるため、ここでは翻字テーブルを読み込まない。
  ///
  /// # エラー
  /// - 設定が不正（未知の言語コード、アナライザーが空、並列度 0 等）
  pub fn new(config: &NarasuConfig) -> NarasuResult<Self> {
    // ConfigError は #[from] で NarasuError に自動変換
    config.validate()?;

    let reference = Arc::new(ReferenceTables::builtin());

    let mut registry = TransliteratorRegistry::builtin();
    for (key, path) in config.custom_tables()? {
      registry.register_table(key, path);
    }

    let mut factory = TextTransformerFactory::builder()
      .target_language(config.target_language(&reference)?)
      .registry(registry);
    for pack in config.language_packs(&reference)? {
      factory = factory.pack(pack);
    }

    let candidates = config.candidate_languages(&reference)?;
    let mut pipeline = AnalyzerPipeline::builder().parallelism(config.parallelism());
    for kind in config.analyzers() {
      pipeline = pipeline.analyzer(build_analyzer(*kind, &reference, &candidates));
    }
    for (feature, kind) in config.priorities() {
      pipeline = pipeline.priority(*feature, kind.name());
    }

    let service = Self {
      reference,
      pipeline: pipeline.build(),
      factory: factory.build(),
    };
    info!(
      languages = ?service.factory.languages().iter().map(Language::code).collect::<Vec<_>>(),
      analyzers = ?service.pipeline.analyzer_ids().iter().map(ToString::to_string).collect::<Vec<_>>(),
      "narasu service initialized"
    );
    Ok(service)
  }

  /// テキストを解析する。
  ///
  /// 空文字列は空の `TextInfo` になる（言語は未判定 `und`）。
  ///
  /// # エラー
  /// - shutdown 済み
  pub fn analyze(&self, text: &str) -> NarasuResult<TextInfo> {
    Ok(self.pipeline.analyze(text)?)
  }

  /// 複数のテキストを並列に解析する。結果は入力順。
  ///
  /// # エラー
  /// - shutdown 済み
  pub fn analyze_batch(&self, texts: &[&str]) -> NarasuResult<Vec<TextInfo>> {
    Ok(self.pipeline.analyze_batch(texts)?)
  }

  /// バイト列を解析する。
  ///
  /// UTF-8、または BOM 付き UTF-16 としてデコードしてから解析する。
  /// サイズとエンコーディングはバイト列そのものから判定する。
  ///
  /// # エラー
  /// - デコードできないバイト列（`MalformedInput`）
  /// - shutdown 済み
  pub fn analyze_bytes(&self, bytes: &[u8]) -> NarasuResult<TextInfo> {
    let raw = self.pipeline.run(&AnalyzerInput::Bytes(bytes))?.info;
    let Some(text) = decode(bytes) else {
      return Err(NarasuError::MalformedInput {
        reason: format!("UTF-8 でも BOM 付き UTF-16 でもないバイト列です ({} bytes)", bytes.len()),
      });
    };

    let mut info = self.pipeline.analyze(&text)?;
    for feature in [Feature::Size, Feature::Encoding] {
      if let (Some(value), Some(source)) = (raw.get(feature), raw.source(feature)) {
        info.set(feature, value.clone(), source.clone());
      }
    }
    Ok(info)
  }

  /// 言語コード（"rus", "ru" 等）に対応する変換器を返す。
  ///
  /// 言語パックのない既知の言語は未判定 (`und`) の変換器になる。
  ///
  /// # エラー
  /// - 参照テーブルにない言語コード（`UnknownLanguage`）
  pub fn transformer(&self, code: &str) -> NarasuResult<Arc<TextTransformer>> {
    let language = self.reference.language_by_code(code).ok_or_else(|| {
      NarasuError::UnknownLanguage {
        code: code.to_string(),
      }
    })?;
    Ok(self.factory.get_transformer(&language))
  }

  /// 解析結果の言語に対応する変換器を返す。
  pub fn transformer_for(&self, info: &TextInfo) -> Arc<TextTransformer> {
    self.factory.get_transformer(&info.language())
  }

  /// テキストを解析し、判定された言語で利用可能な全ての表記を返す。
  ///
  /// # エラー
  /// - shutdown 済み
  /// - 翻字テーブルの初期化失敗
  pub fn transforms(&self, text: &str) -> NarasuResult<Vec<Transliteration>> {
    let info = self.analyze(text)?;
    let transformer = self.transformer_for(&info);
    debug!(language = %transformer.language(), "listing transforms");
    Ok(transformer.available_transforms(text)?)
  }

  /// 言語コードと TextType キー（"BGN", "textIndex" 等、大文字小文字は区別しない）を指定して変換する。
  ///
  /// # エラー
  /// - 未知の言語コード / TextType キー
  /// - その言語で利用できない TextType
  pub fn transform(&self, code: &str, text: &str, text_type: &str) -> NarasuResult<String> {
    let text_type = TextType::from_key(text_type)?;
    Ok(self.transformer(code)?.transform(text, text_type)?)
  }

  /// 解析パイプラインを破棄する。2 回目以降の呼び出しは何もしない。
  ///
  /// 以降の解析は `AnalyzerError::Disposed` になる。変換器は引き続き利用できる。
  pub fn shutdown(&self) {
    self.pipeline.dispose();
  }

  /// 参照テーブルを返す。
  pub fn reference(&self) -> &Arc<ReferenceTables> {
    &self.reference
  }

  /// 変換器ファクトリーを返す。
  pub fn factory(&self) -> &TextTransformerFactory {
    &self.factory
  }

  /// 解析パイプラインを返す。
  pub fn pipeline(&self) -> &AnalyzerPipeline {
    &self.pipeline
  }
}

fn build_analyzer(
  kind: AnalyzerKind,
  reference: &Arc<ReferenceTables>,
  candidates: &[Language],
) -> Arc<dyn Analyzer> {
  match kind {
    AnalyzerKind::TextStats => Arc::new(TextStatsAnalyzer::new()),
    AnalyzerKind::ScriptProfile => Arc::new(ScriptProfileAnalyzer::new(Arc::clone(reference))),
    AnalyzerKind::Language => Arc::new(LanguageAnalyzer::new(Arc::clone(reference), candidates)),
    AnalyzerKind::Voting => Arc::new(VotingAnalyzer::new(vec![
      build_analyzer(AnalyzerKind::ScriptProfile, reference, candidates),
      build_analyzer(AnalyzerKind::Language, reference, candidates),
    ])),
  }
}

/// UTF-8、または BOM 付き UTF-16 をデコードする。
fn decode(bytes: &[u8]) -> Option<String> {
  if let Ok(text) = std::str::from_utf8(bytes) {
    return Some(text.to_string());
  }
  let decode_unit: fn([u8; 2]) -> u16 = match bytes {
    [0xFF, 0xFE, ..] => u16::from_le_bytes,
    [0xFE, 0xFF, ..] => u16::from_be_bytes,
    _ => return None,
  };
  let body = &bytes[2..];
  if body.len() % 2 != 0 {
    return None;
  }
  let units = body.chunks_exact(2).map(|pair| decode_unit([pair[0], pair[1]]));
  char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::AnalyzerError;
  use crate::reference::Script;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  fn create_service() -> NarasuService {
    NarasuService::new(&NarasuConfig::default()).unwrap()
  }

  // ─── Initialization ────────────────────────────────────────────────────

  #[test]
  fn service_initializes_with_defaults() {
    let service = create_service();
    assert_eq!(service.factory().languages().len(), 7);
    let ids: Vec<String> =
      service.pipeline().analyzer_ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids[0], "text_stats");
    assert_eq!(ids[1], "script_profile");
    assert!(ids[2].starts_with("language_"));
  }

  #[test]
  fn service_init_validates_config() {
    let mut config = NarasuConfig::default();
    config.analysis.parallelism = 0;
    assert!(matches!(NarasuService::new(&config), Err(NarasuError::Config(_))));
  }

  #[test]
  fn service_builds_voting_pipeline() {
    let config = NarasuConfig::from_toml_str(
      "[analysis]\nanalyzers = [\"voting\"]\nlanguages = [\"rus\", \"eng\"]\n",
    )
    .unwrap();
    let service = NarasuService::new(&config).unwrap();
    let info = service.analyze("Москва является столицей Российской Федерации").unwrap();
    assert_eq!(info.written(), (Language::RUSSIAN, Script::CYRILLIC));
  }

  // ─── Analysis ──────────────────────────────────────────────────────────

  #[test]
  fn service_analyze_empty() {
    let service = create_service();
    let info = service.analyze("").unwrap();
    assert!(info.is_empty());
    assert_eq!(info.language(), Language::UNDETERMINED);
  }

  #[test]
  fn service_analyze_bytes_utf16() {
    let service = create_service();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "Москва".encode_utf16() {
      bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let info = service.analyze_bytes(&bytes).unwrap();
    assert_eq!(info.encoding(), Some("UTF-16LE"));
    assert_eq!(info.size(), Some(14));
    assert_eq!(info.length(), Some(6));
    assert_eq!(info.script(), Script::CYRILLIC);
  }

  #[test]
  fn service_analyze_bytes_rejects_garbage() {
    let service = create_service();
    let err = service.analyze_bytes(&[0xC3, 0x28, 0xA0]).unwrap_err();
    assert!(matches!(err, NarasuError::MalformedInput { .. }));
  }

  #[test]
  fn service_shutdown_disposes_pipeline() {
    let service = create_service();
    service.shutdown();
    service.shutdown();
    assert!(matches!(
      service.analyze("text"),
      Err(NarasuError::Analyzer(AnalyzerError::Disposed { .. }))
    ));
    // transformers stay usable
    assert_eq!(service.transform("rus", "Москва", "bgn").unwrap(), "Moskva");
  }

  // ─── Transformers ──────────────────────────────────────────────────────

  #[test]
  fn service_transformer_lookup() {
    let service = create_service();
    assert_eq!(service.transformer("ru").unwrap().language(), Language::RUSSIAN);
    // known language without a pack falls back to und
    assert_eq!(service.transformer("jpn").unwrap().language(), Language::UNDETERMINED);
    assert!(matches!(
      service.transformer("qq"),
      Err(NarasuError::UnknownLanguage { code }) if code == "qq"
    ));
  }

  #[test]
  fn service_transform_rejects_unknown_text_type() {
    let service = create_service();
    assert!(matches!(
      service.transform("rus", "Москва", "klingon"),
      Err(NarasuError::UnknownTextType { .. })
    ));
    assert!(matches!(
      service.transform("eng", "London", "bgn"),
      Err(NarasuError::Transform(_))
    ));
  }

  #[test]
  fn service_transforms_follow_detected_language() {
    let service = create_service();
    let rows = service.transforms("Москва является столицей Российской Федерации").unwrap();
    assert_eq!(rows[0].order, 0);
    assert!(rows[0].is_source_script);
    assert!(rows.iter().any(|row| row.transform_type == TextType::Bgn.label()));
  }
}
