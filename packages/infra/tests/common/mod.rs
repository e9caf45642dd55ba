//! テスト共通フィクスチャ
//!
//! テストごとに一時ディレクトリへ新しい SQLite ファイルを作成する。
//! `TempDir` がドロップされるとファイルも削除されるため、戻り値で保持すること。

#![allow(dead_code)]

use dishes_domain::dish::{Country, Dish, DishId, DishName};
use dishes_infra::db::{Store, StoreConfig};
use tempfile::TempDir;

/// 未初期化のストアを作成する
pub async fn empty_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("dishes.db"));
    let store = Store::connect(&config).await.unwrap();
    (dir, store)
}

/// スキーマとシードを投入済みのストアを作成する
pub async fn seeded_store() -> (TempDir, Store) {
    let (dir, store) = empty_store().await;
    store.initialize().await.unwrap();
    (dir, store)
}

pub fn dish(id: i64, name: &str, country: &str) -> Dish {
    Dish::new(
        DishId::new(id),
        DishName::new(name).unwrap(),
        Country::new(country).unwrap(),
    )
}

/// テーブルの全 ID を昇順で取得する
pub async fn all_ids(store: &Store) -> Vec<i64> {
    let mut conn = store.open().await.unwrap();
    sqlx::query_scalar("SELECT id FROM dishes ORDER BY id")
        .fetch_all(&mut *conn)
        .await
        .unwrap()
}
