//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは入力の存在判定と型変換のみを行い、ロジックはユースケースに委譲

pub mod health;
pub mod todo;
pub mod user;

pub use health::health_check;
pub use todo::{TodoData, TodoState, complete_todo, create_todo, delete_todo, list_todos, update_todo};
pub use user::{UserState, register_user};
