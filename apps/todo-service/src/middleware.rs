//! # ミドルウェア
//!
//! - [`user_lookup`] - `username` ヘッダーから操作ユーザーを解決する

pub mod user_lookup;

pub use user_lookup::{CurrentUser, UserLookupState, resolve_current_user};
