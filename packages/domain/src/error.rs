//! # ドメイン層エラー定義
//!
//! 料理の登録リクエストを検証する際に発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **検証順序の保持**: 最初に失敗した規則だけを返す（短絡評価）
//! - **メッセージはそのままレスポンスに載る**: `Display` の文言は API 契約の一部
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | メッセージ |
//! |-----------|----------------|-----------|
//! | `MissingField` | 400 Bad Request | `Missing field: id` |
//! | `MissingOrEmptyField` | 400 Bad Request | `Missing or empty field: dish` |
//! | `InvalidType` | 400 Bad Request | `Field 'id' must be an integer` |

use derive_more::Display;
use thiserror::Error;

/// 期待されるフィールドの型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ExpectedType {
    #[display("an integer")]
    Integer,
    #[display("a string")]
    String,
}

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、400 Bad Request に変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須キーがリクエストボディに存在しない
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// 必須の文字列フィールドが存在しない、またはトリム後に空
    #[error("Missing or empty field: {0}")]
    MissingOrEmptyField(&'static str),

    /// フィールドの値を期待する型に変換できない
    #[error("Field '{field}' must be {expected}")]
    InvalidType {
        field:    &'static str,
        expected: ExpectedType,
    },
}
