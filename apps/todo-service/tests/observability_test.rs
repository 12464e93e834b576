//! ヘルスチェックと Request ID の統合テスト
//!
//! - `/health` は `username` ヘッダーなしで応答する
//! - レスポンスに `x-request-id` ヘッダーが含まれる
//! - クライアント提供の `x-request-id` がそのまま返される
//! - CORS は任意のオリジンを許可する

mod helpers;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use helpers::TestApp;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_healthはusernameなしでhealthyを返す() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "status": "healthy", "version": env!("CARGO_PKG_VERSION") })
    );
}

#[tokio::test]
async fn test_自動生成のx_request_idがuuid_v7形式である() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/todos", Some("ghost"), None).await;

    let request_id = response
        .headers
        .get("x-request-id")
        .expect("レスポンスに x-request-id ヘッダーが含まれること")
        .to_str()
        .unwrap();
    let uuid = uuid::Uuid::parse_str(request_id)
        .unwrap_or_else(|_| panic!("有効な UUID であること: {request_id}"));
    assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
    let app = TestApp::new();
    let custom_id = "client-provided-request-id-123";

    let response = app
        .send_request(
            Request::builder()
                .uri("/health")
                .header("x-request-id", custom_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get("x-request-id").unwrap().to_str().unwrap(),
        custom_id
    );
}

#[tokio::test]
async fn test_corsプリフライトは任意のオリジンを許可する() {
    let app = TestApp::new();

    let response = app
        .send_request(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/todos")
                .header("origin", "https://example.com")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "username,content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .headers
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "*"
    );
}
