//! DishRepository 統合テスト
//!
//! 実行方法:
//! ```bash
//! cargo test -p dishes-infra --test dish_repository_test
//! ```

mod common;

use common::{all_ids, dish, empty_store, seeded_store};
use dishes_domain::dish::DishId;
use dishes_infra::repository::{DishRepository, SqliteDishRepository};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_一覧はidの昇順で返る() {
    let (_dir, store) = seeded_store().await;
    let sut = SqliteDishRepository::new(store);
    sut.insert(&dish(0, "Paella", "Spain")).await.unwrap();
    sut.insert(&dish(42, "Pho", "Vietnam")).await.unwrap();

    let dishes = sut.find_all().await.unwrap();

    let ids: Vec<i64> = dishes.iter().map(|d| d.id().as_i64()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 42]);
    assert_eq!(dishes[1], dish(1, "Ceviche", "Peru"));
}

#[tokio::test]
async fn test_空のテーブルでは空の一覧を返す() {
    let (_dir, store) = empty_store().await;
    sqlx::raw_sql(
        "CREATE TABLE dishes (id INTEGER PRIMARY KEY, dish TEXT NOT NULL, country TEXT NOT NULL)",
    )
    .execute(store.pool())
    .await
    .unwrap();
    let sut = SqliteDishRepository::new(store);

    assert!(sut.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_登録した料理が一覧に含まれる() {
    let (_dir, store) = seeded_store().await;
    let sut = SqliteDishRepository::new(store);

    sut.insert(&dish(10, "Pizza", "Italy")).await.unwrap();

    let dishes = sut.find_all().await.unwrap();
    assert!(dishes.contains(&dish(10, "Pizza", "Italy")));
}

#[tokio::test]
async fn test_重複したidの登録は制約違反になりデータは変わらない() {
    let (_dir, store) = seeded_store().await;
    let sut = SqliteDishRepository::new(store.clone());

    let err = sut.insert(&dish(1, "Lomo Saltado", "Peru")).await.unwrap_err();

    assert!(err.is_unique_violation());
    assert!(err.store_message().contains("UNIQUE constraint failed"));
    let dishes = sut.find_all().await.unwrap();
    assert_eq!(dishes[0], dish(1, "Ceviche", "Peru"));
    assert_eq!(all_ids(&store).await, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_存在するidを削除するとtrueを返す() {
    let (_dir, store) = seeded_store().await;
    let sut = SqliteDishRepository::new(store.clone());

    assert!(sut.delete(DishId::new(2)).await.unwrap());
    assert_eq!(all_ids(&store).await, vec![1, 3, 4, 5]);
}

#[tokio::test]
async fn test_存在しないidの削除はfalseを返しデータは変わらない() {
    let (_dir, store) = seeded_store().await;
    let sut = SqliteDishRepository::new(store.clone());

    assert!(!sut.delete(DishId::new(9999)).await.unwrap());
    assert_eq!(all_ids(&store).await, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_閉じたストアではエラーを返す() {
    let (_dir, store) = seeded_store().await;
    store.close().await;
    let sut = SqliteDishRepository::new(store);

    assert!(sut.find_all().await.is_err());
    assert!(sut.insert(&dish(10, "Pizza", "Italy")).await.is_err());
    assert!(sut.delete(DishId::new(1)).await.is_err());
}
