//! # Dish API エラー定義
//!
//! ハンドラ境界のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | HTTP ステータス | ボディ |
//! |-----------|----------------|--------|
//! | `Validation` | 400 | `{"error": "<検証メッセージ>"}` |
//! | `Persistence` | 400 | `{"error": "DB ERROR: <ストアのメッセージ>"}` |
//! | `NotFound` | 404 | `{"error": "Not found"}` |
//! | `Database` / `Template` | 500 | `{"error": "Internal server error"}` |
//!
//! 500 系の詳細はログにのみ出力し、レスポンスには含めない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dishes_domain::DomainError;
use dishes_infra::InfraError;
use dishes_shared::ErrorResponse;
use thiserror::Error;

/// Dish API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストボディの検証失敗
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// 書き込み時のストアエラー（重複 ID を含む）
    #[error("DB ERROR: {0}")]
    Persistence(String),

    /// 削除対象が存在しない
    #[error("Not found")]
    NotFound,

    /// 読み取り時のストアエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),

    /// HTML の生成失敗
    #[error("テンプレートエラー: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(_) | ApiError::Persistence(_) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(self.to_string()))
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::not_found()),
            ApiError::Database(e) => {
                tracing::error!(
                    error.kind = "database",
                    error.span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
            ApiError::Template(e) => {
                tracing::error!(error.kind = "template", "テンプレートエラー: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
