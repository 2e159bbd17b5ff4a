//! narasu 多言語テキスト解析・正規化ライブラリー
//!
//! テキストの言語・文字体系を判定し、言語ごとの正規化・語幹抽出・翻字
//! (BGN, GOST, ピンイン, ウェード式) を行う

/// 解析モジュール - Analyzer, AnalyzerPipeline, TextInfo 等の言語・文字体系判定
pub mod analysis;

/// 設定モジュール - NarasuConfig 等の設定構造体を定義
pub mod config;

/// エラーモジュール - NarasuError, NarasuResult 等のエラー型を定義
pub mod errors;

/// ロギングモジュール - tracing-subscriber の初期化
pub mod logging;

/// データモデルモジュール - TextType, Transliteration 等のデータ構造を定義
pub mod models;

/// 正規化モジュール - インデックス用・スコアリング用・表示用の正規形
pub mod normalize;

/// 参照テーブルモジュール - 言語・文字体系の定義
pub mod reference;

/// サービスモジュール - NarasuService 等の上位レベルAPIを提供
pub mod service;

/// 語幹抽出モジュール - Snowball 及び接尾辞ベースのステマー
pub mod stem;

/// 変換器モジュール - 言語ごとの TextTransformer とファクトリー
pub mod transformer;

/// 翻字モジュール - 翻字テーブル・レジストリー・チェーン
pub mod transliterate;

/// 再エクスポート
pub use analysis::TextInfo;
pub use config::NarasuConfig;
pub use errors::{NarasuError, NarasuResult};
pub use models::{TextType, Transliteration};
pub use reference::{Language, ReferenceTables, Script};
pub use service::NarasuService;
pub use transformer::{TextTransformer, TextTransformerFactory};
