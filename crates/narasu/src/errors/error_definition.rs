//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::models::TextType;

/// 設定ファイル（NarasuConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// 参照テーブルに存在しない言語コード
  #[error("未知の言語コードです: section={section}, code={code}")]
  UnknownLanguageCode {
    /// 問題のあるセクション名
    section: &'static str,
    /// 指定されたコード
    code: String,
  },

  /// 言語パックが登録されていない言語
  #[error("言語パックが登録されていません: code={code}")]
  MissingLanguagePack {
    /// 指定されたコード
    code: String,
  },

  /// analysis.analyzers が空
  #[error("analysis.analyzers に少なくとも1つのアナライザーを指定してください")]
  EmptyAnalyzers,

  /// analysis.priorities で指定されたアナライザーが analysis.analyzers に含まれていない
  #[error("優先アナライザー ({analyzer}) は analysis.analyzers に含まれている必要があります")]
  PriorityAnalyzerNotEnabled {
    /// 指定されたアナライザー名
    analyzer: String,
  },

  /// analysis.parallelism < 1
  #[error("analysis.parallelism は 1 以上である必要があります: actual={actual}")]
  InvalidParallelism {
    /// 実際に指定された値
    actual: usize,
  },

  /// transform.custom_tables のキーが不正
  #[error("変換テーブルのキーが不正です: key={key}, reason={reason}")]
  InvalidTableKey {
    /// 指定されたキー
    key: String,
    /// 不正の理由
    reason: String,
  },

  /// 設定ファイルの読み込みに失敗
  #[error("設定ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 設定ファイル（TOML）の解析に失敗
  #[error("設定ファイルの解析に失敗しました: {reason}")]
  Parse {
    /// 解析エラーの内容
    reason: String,
  },
}

/// 翻字テーブルの初期化エラー
///
/// 言語パック単位で致命的となるが、ファクトリー全体や他の言語には波及しない。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TransliterationError {
  /// 翻字キーの書式が不正
  #[error("翻字キーの書式が不正です: key={key}, reason={reason}")]
  InvalidKey {
    /// 指定されたキー
    key: String,
    /// 不正の理由
    reason: String,
  },

  /// 指定キーに対応する翻字器が登録されていない
  #[error("翻字器が登録されていません: key={key}")]
  NotRegistered {
    /// 指定されたキー
    key: String,
  },

  /// カスタムテーブルの読み込みに失敗
  #[error("翻字テーブルの読み込みに失敗しました: key={key}, path={path:?}, error={source}")]
  TableRead {
    /// 翻字キー
    key: String,
    /// テーブルファイルのパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// カスタムテーブル（JSON）の解析に失敗
  #[error("翻字テーブルの解析に失敗しました: key={key}, path={path:?}, error={source}")]
  TableParse {
    /// 翻字キー
    key: String,
    /// テーブルファイルのパス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// テキスト変換（正規化・ステミング・翻字）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TransformError {
  /// 言語に登録されていない TextType が要求された
  #[error("この言語ではサポートされていない変換種別です: language={language}, text_type={text_type}")]
  UnsupportedTextType {
    /// 言語コード
    language: String,
    /// 要求された変換種別
    text_type: TextType,
  },

  /// 言語に存在しない処理が要求された（ステマー未定義など）
  #[error("この言語ではサポートされていない操作です: language={language}, operation={operation}")]
  UnsupportedOperation {
    /// 言語コード
    language: String,
    /// 操作名
    operation: &'static str,
  },

  /// 翻字チェーンの初期化に失敗（キャッシュされず、次回要求時に再試行される）
  #[error("翻字チェーンの初期化に失敗しました: language={language}: {source}")]
  Initialization {
    /// 言語コード
    language: String,
    /// 元となった翻字エラー
    #[source]
    source: TransliterationError,
  },
}

/// アナライザー関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// 解析処理中の失敗
  #[error("アナライザーが失敗しました: analyzer={analyzer}, reason={reason}")]
  Failure {
    /// アナライザーID
    analyzer: String,
    /// 失敗の理由
    reason: String,
  },

  /// 破棄済みのアナライザーが呼び出された
  #[error("アナライザーは破棄済みです: analyzer={analyzer}")]
  Disposed {
    /// アナライザーID
    analyzer: String,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `NarasuResult<T>` = `Result<T, NarasuError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum NarasuError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 翻字テーブル関連エラー
  #[error(transparent)]
  Transliteration(#[from] TransliterationError),

  /// テキスト変換関連エラー
  #[error(transparent)]
  Transform(#[from] TransformError),

  /// アナライザー関連エラー
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// 参照テーブルに存在しない言語コード
  #[error("未知の言語コードです: {code}")]
  UnknownLanguage {
    /// 指定されたコード
    code: String,
  },

  /// 存在しない TextType キー
  #[error("未知の変換種別キーです: {key}")]
  UnknownTextType {
    /// 指定されたキー
    key: String,
  },

  /// 入力が不正（デコード不能なバイト列など）
  #[error("入力が不正です: {reason}")]
  MalformedInput {
    /// 不正の理由
    reason: String,
  },
}

/// narasu クレートの標準 Result 型エイリアス
pub type NarasuResult<T> = Result<T, NarasuError>;
