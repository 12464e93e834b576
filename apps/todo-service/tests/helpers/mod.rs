//! 統合テスト用ヘルパー
//!
//! 実際の `build_app` 構成（ミドルウェア込み）に対してリクエストを送る。

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use todolist_domain::clock::SystemClock;
use todolist_infra::repository::InMemoryUserRepository;
use todolist_service::{build_app, handler::TodoData};
use tower::ServiceExt;

/// テスト対象のアプリケーション
#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

/// レスポンスの要約
#[derive(Debug)]
pub struct TestResponse {
    pub status:  StatusCode,
    pub headers: HeaderMap,
    pub body:    Vec<u8>,
}

impl TestResponse {
    /// 本文を JSON として解釈する
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("JSON として解釈できること: {e}"))
    }

    /// `{ "error": ... }` のメッセージを取り出す
    pub fn error_message(&self) -> String {
        self.json()["error"]
            .as_str()
            .expect("error フィールドが文字列であること")
            .to_string()
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: build_app(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(SystemClock),
            ),
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        username: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(username) = username {
            builder = builder.header("username", username);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send_request(request).await
    }

    /// 組み立て済みのリクエストを送る
    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// ユーザーを登録する（201 を検証）
    pub async fn register(&self, name: &str, username: &str) {
        let response = self
            .send(
                Method::POST,
                "/users",
                None,
                Some(serde_json::json!({ "name": name, "username": username })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    /// Todo を作成する（201 を検証）
    pub async fn create_todo(&self, username: &str, title: &str, deadline: &str) {
        let response = self
            .send(
                Method::POST,
                "/todos",
                Some(username),
                Some(serde_json::json!({ "title": title, "deadline": deadline })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    /// Todo 一覧を取得する（200 を検証）
    pub async fn list_todos(&self, username: &str) -> Vec<TodoData> {
        let response = self
            .send(Method::GET, "/todos", Some(username), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        serde_json::from_value(response.json()["data"].clone()).unwrap()
    }
}
