//! # Dish API サーバー
//!
//! 料理カタログの HTTP サービスのエントリーポイント。
//!
//! ## 起動手順
//!
//! 1. `.env` の読み込み（存在する場合）
//! 2. トレーシング初期化
//! 3. 設定読み込み
//! 4. SQLite ストアへの接続とスキーマ・シードの初期化
//! 5. ルーター構築とサーバー起動（Ctrl-C で graceful shutdown）

use anyhow::Context as _;
use dishes_dish_api::{
    app::{AppState, build_router},
    config::AppConfig,
};
use dishes_infra::db::Store;
use dishes_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("dish-api");
    observability::init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

    let store = Store::connect(&config.store)
        .await
        .with_context(|| format!("ストアを開けません: {}", config.store.path.display()))?;
    store
        .initialize()
        .await
        .context("スキーマの初期化に失敗しました")?;
    tracing::info!(path = %config.store.path.display(), "SQLite ストアの準備が完了しました");

    let state = AppState::new(store.clone()).context("テンプレートの読み込みに失敗しました")?;
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("{addr} にバインドできません"))?;
    tracing::info!("Dish API サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Dish API サーバーを停止しました");

    Ok(())
}

/// Ctrl-C を待つ
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルハンドラの登録に失敗しました: {}", e);
        // 待機できない場合は停止しない
        std::future::pending::<()>().await;
    }
    tracing::info!("シャットダウンを開始します");
}
