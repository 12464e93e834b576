//! # ユースケース層
//!
//! Todo Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時刻を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の変換のみを行い、ロジックはユースケースに集約
//! - **アトミックな変更**: Todo の変更はユーザー集約への変更関数としてリポジトリに渡し、ストアのロック内で適用する
//!
//! ## モジュール構成
//!
//! - `todo`: Todo の作成・更新・完了・削除
//! - `user`: ユーザー登録と `username` による解決

pub mod todo;
pub mod user;

pub use todo::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput};
pub use user::{RegisterUserInput, UserUseCaseImpl};
