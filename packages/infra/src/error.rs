//! # ストアのエラー
//!
//! SQLite への接続・クエリで失敗したときのエラー。
//!
//! 種別（[`InfraErrorKind`]）に加え、生成時点のスパン経路（[`SpanTrace`]）を持つ。
//! `?` で `sqlx::Error` から変換した瞬間にキャプチャされるため、ハンドラで
//! ログに出すと、どのリポジトリ操作で失敗したかが分かる。
//! キャプチャには subscriber に `tracing_error::ErrorLayer` が必要。

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// ストア操作のエラー
#[derive(Debug, Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// ストア操作エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// ファイルを開けない、SQL の実行失敗、制約違反、プールが閉じている など
    #[error("SQLite エラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 保存済みの行がドメインの不変条件を満たさない
    #[error("不正な行: {0}")]
    InvalidRow(String),
}

impl InfraError {
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 読み出した行をドメインモデルに変換できなかった
    pub fn invalid_row(reason: impl Into<String>) -> Self {
        Self::with_trace(InfraErrorKind::InvalidRow(reason.into()))
    }

    fn with_trace(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    /// 主キー・UNIQUE 制約違反かどうか
    pub fn is_unique_violation(&self) -> bool {
        match &self.kind {
            InfraErrorKind::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }

    /// クライアントに返すためのストア側メッセージ
    ///
    /// データベースが返したエラーはドライバの装飾を除いた本文
    /// （例: `UNIQUE constraint failed: dishes.id`）を返す。
    pub fn store_message(&self) -> String {
        match &self.kind {
            InfraErrorKind::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            InfraErrorKind::Database(other) => other.to_string(),
            InfraErrorKind::InvalidRow(reason) => reason.clone(),
        }
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self::with_trace(InfraErrorKind::Database(source))
    }
}
