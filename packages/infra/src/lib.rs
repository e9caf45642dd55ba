//! # Dishes インフラ層
//!
//! SQLite ファイルへの接続と、料理テーブルの読み書きを担当する。
//!
//! ## 責務
//!
//! - **ストア管理**: 接続プール、スコープ付きコネクション、スキーマとシードの初期化
//! - **リポジトリ実装**: [`DishRepository`](repository::DishRepository) の SQLite 実装
//!
//! ## 依存関係
//!
//! ```text
//! dish-api → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use dishes_infra::{
//!     db::{Store, StoreConfig},
//!     repository::{DishRepository, SqliteDishRepository},
//! };
//!
//! async fn setup() -> Result<(), dishes_infra::InfraError> {
//!     let store = Store::connect(&StoreConfig::new("app.db")).await?;
//!     store.initialize().await?;
//!
//!     let repo = SqliteDishRepository::new(store);
//!     let dishes = repo.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
