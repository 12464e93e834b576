//! # リポジトリ
//!
//! ユーザー集約を保管するリポジトリのトレイトと実装を提供する。
//!
//! ## 設計方針
//!
//! - **共有ストアの注入**: グローバル変数を使わず、`Arc<dyn UserRepository>` として状態に保持する
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserMutation, UserRepository};
