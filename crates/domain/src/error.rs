//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落、ID の形式不正 |
//! | `NotFound` | 400 Bad Request | ユーザーの Todo 一覧に該当 ID が存在しない |
//!
//! この API は「見つからない」も 400 で返す。ステータスへの変換は API 層の責務。
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::DomainError;
//!
//! let error = DomainError::NotFound {
//!     entity_type: "Todo",
//!     id:          "0190d1c2-0000-7000-8000-000000000000".to_string(),
//! };
//! assert!(error.to_string().contains("Todo"));
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須項目が未入力、または識別子の表記が不正な場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    ///
    /// 所有者のスコープ内で指定 ID のエンティティが存在しない場合に使用する。
    /// 他ユーザーの Todo ID を指定した場合もこのエラーになる。
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Todo" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
