//! # Todo Service サーバー
//!
//! マルチユーザー Todo API の HTTP サーバー。
//!
//! 操作ユーザーは `username` リクエストヘッダーで識別する（認証はない）。
//! 状態はプロセスのメモリ上にのみ保持し、再起動で失われる。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `3333`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todolist=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p todolist-service
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use todolist_domain::clock::SystemClock;
use todolist_infra::repository::InMemoryUserRepository;
use todolist_service::{build_app, config::TodoConfig};
use todolist_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("todo-service");
    init_tracing(&tracing_config);

    let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

    let app = build_app(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(SystemClock),
    );

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("{addr} にバインドできませんでした"))?;
    tracing::info!(
        service = %tracing_config.service_name,
        "Todo Service サーバーが起動しました: {}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
