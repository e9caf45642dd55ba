//! # SQLite ストア
//!
//! 料理テーブルを保持する SQLite ファイルへの接続を管理する。
//!
//! ## 設計方針
//!
//! - **接続プール**: リクエストごとにファイルを開き直さず、接続を再利用する
//! - **スコープ付きコネクション**: [`Store::open`] が返す [`ScopedConnection`] は
//!   ドロップ時にプールへ返却される。成功・失敗・パニックのいずれでも解放される
//! - **WAL + busy timeout**: 同時書き込みは即座に失敗せず、ロック解放を待つ
//! - **冪等な初期化**: スキーマは `CREATE TABLE IF NOT EXISTS`、シードは
//!   `PRAGMA user_version` で投入済みかを判定し、一度だけ投入する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use dishes_infra::db::{Store, StoreConfig};
//!
//! let store = Store::connect(&StoreConfig::new("app.db")).await?;
//! store.initialize().await?;
//!
//! let mut conn = store.open().await?;
//! let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dishes")
//!     .fetch_one(&mut *conn)
//!     .await?;
//! ```

use std::{
    ops::{Deref, DerefMut},
    path::PathBuf,
    time::Duration,
};

use sqlx::{
    Sqlite,
    SqliteConnection,
    SqlitePool,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

use crate::error::InfraError;

/// 料理テーブルのスキーマ
const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// 初回起動時に投入する料理
const SEED_SQL: &str = include_str!("../sql/seed.sql");

/// シード投入済みを表す `PRAGMA user_version` の値
const SEEDED_VERSION: i64 = 1;

/// プールの既定の最大接続数
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// ストアの接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite ファイルのパス（存在しなければ作成する）
    pub path:            PathBuf,
    /// プールの最大接続数
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:            path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// 料理テーブルを所有する永続化コンポーネント
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// 接続プールを作成する
    ///
    /// ファイルを開けない場合は `InfraErrorKind::Database` を返す。
    pub async fn connect(config: &StoreConfig) -> Result<Self, InfraError> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        tracing::debug!(path = %config.path.display(), "SQLite ストアに接続しました");

        Ok(Self { pool })
    }

    /// 既存のプールからストアを作成する
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// プールからコネクションを 1 本取得する
    pub async fn open(&self) -> Result<ScopedConnection, InfraError> {
        let conn = self.pool.acquire().await?;
        Ok(ScopedConnection { conn })
    }

    /// スキーマを作成し、未投入であればシードを投入する
    ///
    /// 何度呼んでもよい。前回の起動で削除されたシード行は復活しない。
    #[tracing::instrument(skip_all, level = "debug", err)]
    pub async fn initialize(&self) -> Result<(), InfraError> {
        let mut tx = self.pool.begin().await?;

        sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;

        let version: i64 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&mut *tx)
            .await?;

        if version < SEEDED_VERSION {
            sqlx::raw_sql(SEED_SQL).execute(&mut *tx).await?;
            // PRAGMA はバインド変数を受け付けない
            sqlx::raw_sql(&format!("PRAGMA user_version = {SEEDED_VERSION}"))
                .execute(&mut *tx)
                .await?;
            tracing::info!("シードデータを投入しました");
        }

        tx.commit().await?;
        Ok(())
    }

    /// 疎通確認を行い、料理の件数を返す
    ///
    /// 同一コネクション上で `SELECT 1` と `SELECT COUNT(*)` を実行する。
    #[tracing::instrument(skip_all, level = "debug", err)]
    pub async fn check_health(&self) -> Result<i64, InfraError> {
        let mut conn = self.open().await?;

        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&mut *conn)
            .await?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dishes")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }

    /// プールを閉じる
    ///
    /// 以降の [`open`](Store::open) はエラーになる。
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// スコープ付きコネクション
///
/// ドロップ時にプールへ返却される。`SqliteConnection` に deref するため、
/// `&mut *conn` をそのまま sqlx のクエリに渡せる。
pub struct ScopedConnection {
    conn: PoolConnection<Sqlite>,
}

impl Deref for ScopedConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}
