//! # DishRepository
//!
//! 料理テーブルの一覧取得・登録・削除を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **行の明示的な型付け**: `DishRow` で読み出し、ストアの境界で `Dish` に変換する
//! - **制約違反はそのまま返す**: 重複 ID は主キー制約のエラーとして呼び出し側に渡す

use async_trait::async_trait;
use dishes_domain::dish::{Country, Dish, DishId, DishName};

use crate::{db::Store, error::InfraError};

/// 料理リポジトリトレイト
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// すべての料理を ID の昇順で取得する
    async fn find_all(&self) -> Result<Vec<Dish>, InfraError>;

    /// 料理を登録する
    ///
    /// 既存の ID と重複した場合は制約違反のデータベースエラーを返す。
    async fn insert(&self, dish: &Dish) -> Result<(), InfraError>;

    /// 料理を削除する
    ///
    /// 1 行削除できた場合のみ `true` を返す。
    async fn delete(&self, id: DishId) -> Result<bool, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct DishRow {
    id:      i64,
    dish:    String,
    country: String,
}

impl DishRow {
    fn into_dish(self) -> Result<Dish, InfraError> {
        let name = DishName::new(self.dish).map_err(|e| InfraError::invalid_row(e.to_string()))?;
        let country =
            Country::new(self.country).map_err(|e| InfraError::invalid_row(e.to_string()))?;

        Ok(Dish::from_db(DishId::new(self.id), name, country))
    }
}

/// SQLite 実装の DishRepository
#[derive(Debug, Clone)]
pub struct SqliteDishRepository {
    store: Store,
}

impl SqliteDishRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DishRepository for SqliteDishRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Dish>, InfraError> {
        let mut conn = self.store.open().await?;

        let rows = sqlx::query_as::<_, DishRow>(
            r#"
            SELECT id, dish, country
            FROM dishes
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter().map(DishRow::into_dish).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(dish_id = %dish.id()))]
    async fn insert(&self, dish: &Dish) -> Result<(), InfraError> {
        let mut conn = self.store.open().await?;

        sqlx::query(
            r#"
            INSERT INTO dishes (id, dish, country)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(dish.id().as_i64())
        .bind(dish.name().as_str())
        .bind(dish.country().as_str())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(dish_id = %id))]
    async fn delete(&self, id: DishId) -> Result<bool, InfraError> {
        let mut conn = self.store.open().await?;

        let result = sqlx::query("DELETE FROM dishes WHERE id = ?")
            .bind(id.as_i64())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
