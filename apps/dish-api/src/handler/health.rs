//! # ヘルスチェックハンドラ
//!
//! ストアへの疎通を確認するエンドポイント。
//!
//! ```text
//! GET /health
//! ```
//!
//! 成功時はプレーンテキスト `OK`（200）、失敗時は `DB ERROR: <message>`（500）。

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use dishes_infra::db::Store;

/// ヘルスチェックの共有状態
pub struct HealthState {
    pub store: Store,
}

/// GET /health
#[tracing::instrument(skip_all)]
pub async fn health_check(State(state): State<Arc<HealthState>>) -> (StatusCode, String) {
    match state.store.check_health().await {
        Ok(count) => {
            tracing::debug!(dish_count = count, "ヘルスチェック成功");
            (StatusCode::OK, "OK".to_string())
        }
        Err(e) => {
            tracing::error!(error.span_trace = %e.span_trace(), "ヘルスチェック失敗: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("DB ERROR: {}", e.store_message()),
            )
        }
    }
}
