//! # API レスポンスエンベロープ
//!
//! 一覧系 API の統一レスポンス形式 `{ "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 統一レスポンス型
///
/// ## 使用例
///
/// ```
/// use todolist_shared::ApiResponse;
///
/// let response = ApiResponse::new(vec!["a"]);
/// assert_eq!(response.data, vec!["a"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
