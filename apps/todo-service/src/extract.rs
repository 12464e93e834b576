//! # リクエスト抽出
//!
//! JSON ボディの抽出と、入力値の存在判定を提供する。
//!
//! ## 存在判定
//!
//! 必須項目は「値が存在するか」だけを検査する。次の値は未指定として扱う:
//!
//! - フィールドなし、`null`
//! - 空文字列 `""`
//! - `false`、数値の `0`

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::error::ApiError;

/// JSON ボディ抽出器
///
/// `axum::Json` との違い:
/// - `Content-Type` が JSON でないリクエストや空ボディは `T::default()` として扱う
/// - 構文エラー・型エラーは [`ApiError::BadRequest`] として `{ "error": ... }` を返す
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// 値が「存在する」とみなせるかを判定する
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// JSON に含まれるフィールドを `null` も含めて `Some` として取り出す
///
/// `Option<Value>` の既定の挙動では `null` と未指定を区別できないため、
/// `#[serde(default, deserialize_with = "supplied")]` として使う。
pub fn supplied<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 存在する値を文字列として取り出す
///
/// 文字列以外の値は JSON 表記の文字列にする。未指定なら `None`。
pub fn present_text(value: Option<Value>) -> Option<String> {
    if !is_present(value.as_ref()) {
        return None;
    }

    value.map(|v| match v {
        Value::String(s) => s,
        other => other.to_string(),
    })
}
