//! # TodoList インフラ層
//!
//! ユーザー集約の保管を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、その具体的な実装（インメモリ）を提供する。
//! 保管方式の詳細をカプセル化し、ユースケース層をストアの変更から保護する。
//!
//! ## 依存関係
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use todolist_infra::repository::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! # let _ = repo;
//! ```

pub mod error;
pub mod repository;

pub use error::InfraError;
