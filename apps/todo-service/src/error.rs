//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! クライアント起因のエラー（未登録ユーザー、必須項目の欠落、Todo の不在）は
//! すべて 400 に集約し、本文は `{ "error": "<message>" }` とする。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todolist_domain::DomainError;
use todolist_infra::InfraError;
use todolist_shared::ErrorResponse;
use thiserror::Error;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 不正なリクエスト（メッセージはそのままクライアントに返す）
    #[error("{0}")]
    BadRequest(String),

    /// 内部エラー（ストア操作の失敗）
    #[error("内部エラー: {0}")]
    Internal(#[from] InfraError),
}

impl ApiError {
    /// `username` ヘッダーに該当するユーザーが存在しない
    pub fn user_not_found(username: &str) -> Self {
        Self::BadRequest(format!("user not found with username {username}."))
    }

    /// 操作ユーザーの Todo 一覧に該当 ID が存在しない
    pub fn todo_not_found(id: &str) -> Self {
        Self::BadRequest(format!("Todo not found with id {id} for received user."))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { id, .. } => Self::todo_not_found(&id),
            DomainError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            ApiError::Internal(e) => {
                tracing::error!(span_trace = %e.span_trace(), "内部エラー: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal_error())
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    async fn into_parts(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_bad_requestは400とメッセージを返す() {
        let (status, body) = into_parts(ApiError::user_not_found("ghost")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "user not found with username ghost." }));
    }

    #[tokio::test]
    async fn test_domain_errorのnot_foundはtodo_not_foundメッセージになる() {
        let err: ApiError = DomainError::NotFound {
            entity_type: "Todo",
            id:          "abc".to_string(),
        }
        .into();

        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Todo not found with id abc for received user." })
        );
    }

    #[tokio::test]
    async fn test_インフラエラーは内部情報を含まない500を返す() {
        let err: ApiError = InfraError::unexpected("lock poisoned at 0xdeadbeef").into();

        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error." }));
    }
}
