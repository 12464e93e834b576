//! # 操作ユーザー解決ミドルウェア
//!
//! `username` リクエストヘッダーから操作ユーザーを解決し、
//! リクエスト extensions に [`CurrentUser`] として格納する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! Router::new()
//!     .route("/todos", get(list_todos))
//!     .layer(from_fn_with_state(lookup_state, resolve_current_user))
//! ```
//!
//! 解決できない場合は 400 を返し、後続のハンドラは実行しない。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use todolist_domain::user::User;

use crate::{error::ApiError, usecase::UserUseCaseImpl};

/// 操作ユーザーを示すヘッダー名
pub const USERNAME_HEADER: &str = "username";

/// ヘッダーがない場合にエラーメッセージへ埋め込む値
const MISSING_USERNAME: &str = "undefined";

/// ミドルウェアの状態
#[derive(Clone)]
pub struct UserLookupState {
    pub usecase: Arc<UserUseCaseImpl>,
}

/// 解決済みの操作ユーザー
///
/// ミドルウェア実行時点のユーザー集約のスナップショット。
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// 操作ユーザー解決ミドルウェア
///
/// ヘッダーがない場合はメッセージのユーザー名を `undefined` とする。
/// UTF-8 として読めない値は空のユーザー名として扱う。
pub async fn resolve_current_user(
    State(state): State<UserLookupState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(value) = request.headers().get(USERNAME_HEADER) else {
        tracing::debug!("username ヘッダーがありません");
        return ApiError::user_not_found(MISSING_USERNAME).into_response();
    };
    let username = value.to_str().unwrap_or_default().to_owned();

    let user = match state.usecase.resolve_user(&username).await {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!(%username, "操作ユーザーを解決できませんでした");
            return e.into_response();
        }
    };

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}
