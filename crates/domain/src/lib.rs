//! # TodoList ドメイン層
//!
//! ユーザーと Todo のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//!        ↘
//!          shared
//! ```
//!
//! ドメイン層はインフラ層（ストア、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティと期限
//! - [`user`] - ユーザー集約
//! - [`value_objects`] - 表示名、ユーザー名

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod todo;
pub mod user;
pub mod value_objects;

pub use error::DomainError;
