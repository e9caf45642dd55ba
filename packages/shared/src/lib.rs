//! # Dishes 共有ユーティリティ
//!
//! ワークスペース内のすべてのクレートから利用される共通部品を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各アプリの責務）
//! - トレーシング関連は `observability` feature の背後に置き、
//!   domain / infra から不要な依存を引き込まない

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod observability;

pub use error_response::ErrorResponse;
