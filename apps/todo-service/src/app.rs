//! # ルーター構築
//!
//! 依存コンポーネントを受け取り、ミドルウェアを含むアプリケーション全体の
//! `Router` を組み立てる。`main` と統合テストで同じ構成を使う。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
};
use todolist_domain::clock::Clock;
use todolist_infra::repository::UserRepository;
use todolist_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        TodoState,
        UserState,
        complete_todo,
        create_todo,
        delete_todo,
        health_check,
        list_todos,
        register_user,
        update_todo,
    },
    middleware::{UserLookupState, resolve_current_user},
    usecase::{TodoUseCaseImpl, UserUseCaseImpl},
};

/// アプリケーションの `Router` を構築する
///
/// `/todos` 配下のルートはすべて操作ユーザー解決ミドルウェアを通す。
pub fn build_app(user_repository: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Router {
    let user_usecase = Arc::new(UserUseCaseImpl::new(Arc::clone(&user_repository)));
    let user_state = Arc::new(UserState {
        usecase: Arc::clone(&user_usecase),
    });
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(user_repository, clock),
    });
    let lookup_state = UserLookupState {
        usecase: user_usecase,
    };

    let todo_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .route("/todos/{id}/done", patch(complete_todo))
        .route_layer(from_fn_with_state(lookup_state, resolve_current_user))
        .with_state(todo_state);

    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(register_user))
        .with_state(user_state)
        .merge(todo_routes)
        .layer(CorsLayer::permissive())
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. CanonicalLogLineLayer: リクエスト完了時に1行サマリログを出力（スパン内）
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
