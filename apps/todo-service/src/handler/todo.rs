//! # Todo ハンドラ
//!
//! すべてのエンドポイントは操作ユーザー解決ミドルウェアの内側で実行される。
//!
//! ## エンドポイント
//!
//! - `GET /todos` - 操作ユーザーの Todo 一覧
//! - `POST /todos` - Todo 作成
//! - `PUT /todos/{id}` - タイトルと期限の置き換え
//! - `PATCH /todos/{id}/done` - 完了にする
//! - `DELETE /todos/{id}` - 削除

use std::sync::Arc;

use axum::{
    Extension,
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use todolist_domain::todo::{Deadline, Todo, TodoId, TodoTitle, to_iso_string};
use todolist_shared::ApiResponse;

use crate::{
    error::ApiError,
    extract::{JsonBody, is_present, present_text, supplied},
    middleware::CurrentUser,
    usecase::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput},
};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成・更新リクエスト
///
/// `deadline` は未指定なら `None`、`null` が指定されたら `Some(Value::Null)`。
#[derive(Debug, Default, Deserialize)]
pub struct TodoRequest {
    pub title:    Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    pub deadline: Option<Value>,
}

/// Todo DTO
///
/// タイトルのない Todo は `title` フィールド自体を出力しない。
/// 解釈できなかった期限は `null` になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoData {
    pub id:         String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title:      Option<String>,
    pub done:       bool,
    pub deadline:   Option<String>,
    pub created_at: String,
}

impl From<&Todo> for TodoData {
    fn from(todo: &Todo) -> Self {
        Self {
            id:         todo.id().to_string(),
            title:      todo.title().map(|t| t.as_str().to_string()),
            done:       todo.done(),
            deadline:   todo.deadline().to_iso_string(),
            created_at: to_iso_string(&todo.created_at()),
        }
    }
}

/// JSON の値から期限を作る
///
/// 文字列は日時として解釈し、数値は Unix エポックからのミリ秒とみなす。
/// `null` は 0 ミリ秒、真偽値は 0 / 1 ミリ秒として扱う。
fn deadline_from(value: Value) -> Deadline {
    match value {
        Value::String(s) => Deadline::parse(&s),
        Value::Number(n) => n.as_f64().map_or(Deadline::Invalid, Deadline::from_epoch_millis),
        Value::Null => Deadline::from_epoch_millis(0.0),
        Value::Bool(b) => Deadline::from_epoch_millis(if b { 1.0 } else { 0.0 }),
        Value::Array(_) | Value::Object(_) => Deadline::Invalid,
    }
}

/// パスの ID を解釈する
///
/// 正規形の UUID 以外は「見つからない」扱い。
fn parse_todo_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse().map_err(|_| ApiError::todo_not_found(raw))
}

// --- ハンドラ ---

/// GET /todos
///
/// 操作ユーザーの Todo を追加順で返す。
#[tracing::instrument(skip_all, fields(user.id = %user.id()))]
pub async fn list_todos(Extension(CurrentUser(user)): Extension<CurrentUser>) -> impl IntoResponse {
    let items: Vec<TodoData> = user.todos().iter().map(TodoData::from).collect();

    (StatusCode::OK, Json(ApiResponse::new(items)))
}

/// POST /todos
///
/// ## レスポンス
///
/// - `201 Created`: 本文なし
/// - `400 Bad Request`: `title` または `deadline` が未指定
#[tracing::instrument(skip_all, fields(user.id = %user.id()))]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    JsonBody(req): JsonBody<TodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(title), true) = (present_text(req.title), is_present(req.deadline.as_ref())) else {
        return Err(ApiError::BadRequest(
            "Fields 'title' and 'deadline' can't be null.".to_string(),
        ));
    };

    let input = CreateTodoInput {
        title:    TodoTitle::new(title)?,
        deadline: req.deadline.map_or(Deadline::Invalid, deadline_from),
    };
    state.usecase.create_todo(user.id(), input).await?;

    Ok(StatusCode::CREATED)
}

/// PUT /todos/{id}
///
/// タイトルと期限を両方とも置き換える。省略した項目は消去される。
/// 期限は `null` や `0` を含め、指定された値をそのまま解釈して保存する。
///
/// ## レスポンス
///
/// - `204 No Content`: 本文なし
/// - `400 Bad Request`: `title` と `deadline` がどちらも未指定、または Todo が存在しない
#[tracing::instrument(skip_all, fields(user.id = %user.id(), todo.id = %id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<TodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = present_text(req.title);

    if title.is_none() && !is_present(req.deadline.as_ref()) {
        return Err(ApiError::BadRequest(
            "Some field should be informed.".to_string(),
        ));
    }

    let todo_id = parse_todo_id(&id)?;
    let input = UpdateTodoInput {
        title:    title.map(TodoTitle::new).transpose()?,
        deadline: req.deadline.map_or(Deadline::Invalid, deadline_from),
    };
    state.usecase.update_todo(user.id(), &todo_id, input).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /todos/{id}/done
///
/// ## レスポンス
///
/// - `204 No Content`: 本文なし（完了済みでも成功）
/// - `400 Bad Request`: Todo が存在しない
#[tracing::instrument(skip_all, fields(user.id = %user.id(), todo.id = %id))]
pub async fn complete_todo(
    State(state): State<Arc<TodoState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    state.usecase.complete_todo(user.id(), &todo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todos/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 本文なし
/// - `400 Bad Request`: Todo が存在しない
#[tracing::instrument(skip_all, fields(user.id = %user.id(), todo.id = %id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    state.usecase.delete_todo(user.id(), &todo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
