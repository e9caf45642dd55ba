//! 料理カタログのユースケース

use std::sync::Arc;

use dishes_domain::{
    DomainError,
    dish::{Country, Dish, DishId, DishName},
};
use dishes_infra::repository::DishRepository;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// 登録リクエストのボディを検証し、料理を組み立てる
///
/// 検証は次の順に行い、最初の失敗で打ち切る:
///
/// 1. `id` キーが存在する
/// 2. `dish` がトリム後に空でない
/// 3. `country` がトリム後に空でない
/// 4. `id` を整数に変換できる
///
/// オブジェクトでないボディは空のオブジェクトとして扱う。
pub fn parse_new_dish(body: &Value) -> Result<Dish, DomainError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let raw_id = fields
        .get(DishId::FIELD)
        .ok_or(DomainError::MissingField(DishId::FIELD))?;
    let name = DishName::from_json(fields.get(DishName::FIELD))?;
    let country = Country::from_json(fields.get(Country::FIELD))?;
    let id = DishId::from_json(raw_id)?;

    Ok(Dish::new(id, name, country))
}

/// 料理カタログのユースケース
#[derive(Clone)]
pub struct DishUseCaseImpl {
    dish_repository: Arc<dyn DishRepository>,
}

impl DishUseCaseImpl {
    pub fn new(dish_repository: Arc<dyn DishRepository>) -> Self {
        Self { dish_repository }
    }

    /// すべての料理を ID の昇順で取得する
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, ApiError> {
        Ok(self.dish_repository.find_all().await?)
    }

    /// リクエストボディを検証して料理を登録する
    ///
    /// 検証はストアに触れる前に完了する。書き込み時のストアエラーは
    /// 重複 ID を含めて [`ApiError::Persistence`] になる。
    pub async fn add_dish(&self, body: &Value) -> Result<Dish, ApiError> {
        let dish = parse_new_dish(body)?;

        self.dish_repository.insert(&dish).await.map_err(|e| {
            if e.is_unique_violation() {
                tracing::info!(dish_id = %dish.id(), "ID が重複しているため登録を拒否しました");
            } else {
                tracing::warn!(
                    dish_id = %dish.id(),
                    error.span_trace = %e.span_trace(),
                    "料理の登録に失敗しました: {}",
                    e
                );
            }
            ApiError::Persistence(e.store_message())
        })?;

        Ok(dish)
    }

    /// 料理を削除する
    ///
    /// 該当する行が無い場合は [`ApiError::NotFound`]。
    pub async fn delete_dish(&self, id: DishId) -> Result<(), ApiError> {
        if self.dish_repository.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use dishes_domain::ExpectedType;
    use dishes_infra::InfraError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    // ===== parse_new_dish =====

    #[rstest]
    #[case(json!({}), DomainError::MissingField("id"))]
    #[case(json!({ "dish": "Pizza", "country": "Italy" }), DomainError::MissingField("id"))]
    #[case(json!({ "id": "abc" }), DomainError::MissingOrEmptyField("dish"))]
    #[case(
        json!({ "id": 1, "dish": "   ", "country": "Italy" }),
        DomainError::MissingOrEmptyField("dish")
    )]
    #[case(json!({ "id": 1, "dish": "Pizza" }), DomainError::MissingOrEmptyField("country"))]
    #[case(
        json!({ "id": 1, "dish": "Pizza", "country": null }),
        DomainError::MissingOrEmptyField("country")
    )]
    #[case(
        json!({ "id": 1, "dish": [], "country": "Italy" }),
        DomainError::MissingOrEmptyField("dish")
    )]
    #[case(
        json!({ "id": "abc", "dish": "Pizza", "country": "Italy" }),
        DomainError::InvalidType { field: "id", expected: ExpectedType::Integer }
    )]
    #[case(
        json!({ "id": null, "dish": "Pizza", "country": "Italy" }),
        DomainError::InvalidType { field: "id", expected: ExpectedType::Integer }
    )]
    #[case(
        json!({ "id": 1, "dish": 42, "country": "Italy" }),
        DomainError::InvalidType { field: "dish", expected: ExpectedType::String }
    )]
    #[case(json!([1, 2, 3]), DomainError::MissingField("id"))]
    #[case(json!("id"), DomainError::MissingField("id"))]
    #[case(Value::Null, DomainError::MissingField("id"))]
    fn test_最初に違反した規則のエラーを返す(
        #[case] body: Value,
        #[case] expected: DomainError,
    ) {
        assert_eq!(parse_new_dish(&body), Err(expected));
    }

    #[test]
    fn test_前後の空白を除去して料理を組み立てる() {
        let dish = parse_new_dish(&json!({ "id": "10", "dish": " Pizza ", "country": "Italy\n" }))
            .unwrap();

        assert_eq!(dish.id(), DishId::new(10));
        assert_eq!(dish.name().as_str(), "Pizza");
        assert_eq!(dish.country().as_str(), "Italy");
    }

    // ===== DishUseCaseImpl =====

    /// 呼び出しを記録するスタブ
    #[derive(Default)]
    struct StubDishRepository {
        inserted:     Mutex<Vec<Dish>>,
        fail_insert:  bool,
        delete_found: bool,
    }

    #[async_trait]
    impl DishRepository for StubDishRepository {
        async fn find_all(&self) -> Result<Vec<Dish>, InfraError> {
            Ok(self.inserted.lock().unwrap().clone())
        }

        async fn insert(&self, dish: &Dish) -> Result<(), InfraError> {
            if self.fail_insert {
                return Err(sqlx::Error::Protocol("database is locked".to_string()).into());
            }
            self.inserted.lock().unwrap().push(dish.clone());
            Ok(())
        }

        async fn delete(&self, _id: DishId) -> Result<bool, InfraError> {
            Ok(self.delete_found)
        }
    }

    fn sut(repo: StubDishRepository) -> (Arc<StubDishRepository>, DishUseCaseImpl) {
        let repo = Arc::new(repo);
        let usecase = DishUseCaseImpl::new(repo.clone());
        (repo, usecase)
    }

    #[tokio::test]
    async fn test_検証に失敗した場合はストアに書き込まない() {
        let (repo, usecase) = sut(StubDishRepository::default());

        let result = usecase
            .add_dish(&json!({ "id": "x", "dish": "Pizza", "country": "Italy" }))
            .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(repo.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_書き込みエラーはdb_errorメッセージになる() {
        let (_repo, usecase) = sut(StubDishRepository {
            fail_insert: true,
            ..Default::default()
        });

        let err = usecase
            .add_dish(&json!({ "id": 10, "dish": "Pizza", "country": "Italy" }))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("DB ERROR: "), "{message}");
        assert!(message.contains("database is locked"), "{message}");
    }

    #[tokio::test]
    async fn test_登録した料理が一覧に含まれる() {
        let (_repo, usecase) = sut(StubDishRepository::default());

        let added = usecase
            .add_dish(&json!({ "id": 10, "dish": "Pizza", "country": "Italy" }))
            .await
            .unwrap();

        assert_eq!(usecase.list_dishes().await.unwrap(), vec![added]);
    }

    #[tokio::test]
    async fn test_削除対象が無い場合はnot_foundを返す() {
        let (_repo, usecase) = sut(StubDishRepository::default());

        let result = usecase.delete_dish(DishId::new(9999)).await;

        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_削除対象がある場合は成功する() {
        let (_repo, usecase) = sut(StubDishRepository {
            delete_found: true,
            ..Default::default()
        });

        assert!(usecase.delete_dish(DishId::new(2)).await.is_ok());
    }
}
