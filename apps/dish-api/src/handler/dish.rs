//! # 料理ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /dishes` - 料理の一覧（ID の昇順）
//! - `POST /dishes` - 料理の登録
//! - `DELETE /dishes/{id}` - 料理の削除

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use dishes_domain::dish::{Dish, DishId};
use serde::Serialize;
use serde_json::Value;

use crate::{error::ApiError, usecase::DishUseCaseImpl};

/// 料理 API の共有状態
pub struct DishState {
    pub usecase: DishUseCaseImpl,
}

// --- レスポンス型 ---

/// 料理 DTO
#[derive(Debug, Serialize)]
pub struct DishDto {
    pub id:      i64,
    pub dish:    String,
    pub country: String,
}

impl From<Dish> for DishDto {
    fn from(dish: Dish) -> Self {
        Self {
            id:      dish.id().as_i64(),
            dish:    dish.name().to_string(),
            country: dish.country().to_string(),
        }
    }
}

/// 登録完了レスポンス
#[derive(Debug, Serialize)]
pub struct DishAddedResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub dish:   DishDto,
}

/// 削除完了レスポンス
#[derive(Debug, Serialize)]
pub struct DishDeletedResponse {
    pub status: &'static str,
    pub id:     i64,
}

// --- ハンドラ ---

/// GET /dishes
#[tracing::instrument(skip_all)]
pub async fn list_dishes(
    State(state): State<Arc<DishState>>,
) -> Result<impl IntoResponse, ApiError> {
    let dishes = state.usecase.list_dishes().await?;

    let items: Vec<DishDto> = dishes.into_iter().map(DishDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// `Content-Type` が JSON のメディアタイプか
///
/// `application/json` と `application/*+json` を受け付ける。パラメータ
/// （`; charset=utf-8` など）と大文字小文字は無視する。
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    media_type == "application/json"
        || media_type
            .strip_prefix("application/")
            .is_some_and(|subtype| subtype.ends_with("+json"))
}

/// POST /dishes
///
/// ボディは JSON として寛容に解釈する。`Content-Type` が JSON でない場合や
/// JSON として不正な場合は空のオブジェクトとして検証し、`Missing field: id` になる。
#[tracing::instrument(skip_all)]
pub async fn add_dish(
    State(state): State<Arc<DishState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload: Value = if has_json_content_type(&headers) {
        serde_json::from_slice(&body).unwrap_or_default()
    } else {
        Value::Null
    };

    let dish = state.usecase.add_dish(&payload).await?;
    tracing::info!(dish_id = %dish.id(), "料理を登録しました");

    let response = DishAddedResponse {
        status: "ADDED",
        dish:   DishDto::from(dish),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /dishes/{id}
///
/// `id` が整数でないパスはルートに一致しなかったものとみなし、
/// 未定義のパスと同じ空ボディの 404 を返す。
#[tracing::instrument(skip_all, fields(dish_id = tracing::field::Empty))]
pub async fn delete_dish(
    State(state): State<Arc<DishState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Ok(Path(id)) = path else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    tracing::Span::current().record("dish_id", id);

    state.usecase.delete_dish(DishId::new(id)).await?;
    tracing::info!("料理を削除しました");

    let response = DishDeletedResponse {
        status: "DELETED",
        id,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}
