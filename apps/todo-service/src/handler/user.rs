//! # ユーザーハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /users` - ユーザー登録

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::Value;
use todolist_domain::value_objects::{DisplayName, Username};

use crate::{
    error::ApiError,
    extract::{JsonBody, present_text},
    usecase::{RegisterUserInput, UserUseCaseImpl},
};

/// ユーザー API の共有状態
pub struct UserState {
    pub usecase: Arc<UserUseCaseImpl>,
}

/// ユーザー登録リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct RegisterUserRequest {
    pub name:     Option<Value>,
    pub username: Option<Value>,
}

/// POST /users
///
/// ## レスポンス
///
/// - `201 Created`: 本文なし
/// - `400 Bad Request`: `name` または `username` が未指定
#[tracing::instrument(skip_all)]
pub async fn register_user(
    State(state): State<Arc<UserState>>,
    JsonBody(req): JsonBody<RegisterUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(username)) = (present_text(req.name), present_text(req.username))
    else {
        return Err(ApiError::BadRequest(
            "The fields 'name' and 'username' can't be null.".to_string(),
        ));
    };

    let input = RegisterUserInput {
        name:     DisplayName::new(name)?,
        username: Username::new(username)?,
    };
    state.usecase.register_user(input).await?;

    Ok(StatusCode::CREATED)
}
