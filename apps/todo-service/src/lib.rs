//! # Todo Service ライブラリ
//!
//! マルチユーザー Todo API のハンドラ、ユースケース、ルーター構築を公開する。
//! 統合テストから [`build_app`] で実際の構成を組み立てられる。
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラーと HTTP レスポンスへの変換
//! - [`extract`] - JSON ボディ抽出と入力値の存在判定
//! - [`handler`] - HTTP ハンドラ
//! - [`middleware`] - 操作ユーザー解決ミドルウェア
//! - [`usecase`] - ユースケース

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod usecase;

pub use app::build_app;
