//! # Dish API 設定
//!
//! 環境変数からサーバーとストアの設定を読み込む。
//!
//! | 変数 | 既定値 |
//! |------|--------|
//! | `DISHES_HOST` | `0.0.0.0` |
//! | `DISHES_PORT` | `5000` |
//! | `SQLITE_DB_PATH` | `app.db` |
//! | `SQLITE_MAX_CONNECTIONS` | `5` |

use std::env;

use dishes_infra::db::{DEFAULT_MAX_CONNECTIONS, StoreConfig};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_PATH: &str = "app.db";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} の値が不正です: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Dish API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// バインドアドレス
    pub host:  String,
    /// ポート番号
    pub port:  u16,
    /// SQLite ストアの設定
    pub store: StoreConfig,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 未設定の項目は既定値を使う。数値として解釈できない値はエラー。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("DISHES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_number(&lookup, "DISHES_PORT", DEFAULT_PORT)?;
        let path = lookup("SQLITE_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let max_connections =
            parse_number(&lookup, "SQLITE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        Ok(Self {
            host,
            port,
            store: StoreConfig::new(path).with_max_connections(max_connections),
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
