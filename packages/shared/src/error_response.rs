//! # エラーレスポンス
//!
//! JSON API が返すエラーボディ `{ "error": "..." }` を提供する。
//!
//! `error` の文言は人間向けであり、機械判読用の安定したコードではない。
//! クライアントはステータスコードで分岐すること。

use serde::{Deserialize, Serialize};

/// `DELETE` 対象が存在しない場合の固定メッセージ
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// 内部エラー時の固定メッセージ（詳細はログにのみ出力する）
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// 任意のメッセージでエラーレスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 404 Not Found 用
    pub fn not_found() -> Self {
        Self::new(NOT_FOUND_MESSAGE)
    }

    /// 500 Internal Server Error 用
    ///
    /// 内部情報を漏らさないよう、メッセージは固定。
    pub fn internal_error() -> Self {
        Self::new(INTERNAL_ERROR_MESSAGE)
    }
}
