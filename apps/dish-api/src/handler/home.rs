//! # ホーム画面ハンドラ
//!
//! 料理の一覧を HTML で返す。
//!
//! テンプレートは `include_str!` でバイナリに埋め込み、tera に `.html` 名で
//! 登録する（拡張子により HTML エスケープが有効になる）。

use std::sync::Arc;

use axum::{extract::State, response::Html};
use dishes_domain::dish::Dish;
use serde::Serialize;
use tera::{Context, Tera};

use crate::{error::ApiError, usecase::DishUseCaseImpl};

const HOME_TEMPLATE: &str = "home.html";

#[derive(Debug, Serialize)]
struct DishItem<'a> {
    dish:    &'a str,
    country: &'a str,
}

/// ホーム画面のレンダラー
pub struct HomeRenderer {
    engine: Tera,
}

impl HomeRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut engine = Tera::default();
        engine.add_raw_template(HOME_TEMPLATE, include_str!("../../templates/home.html"))?;
        Ok(Self { engine })
    }

    /// 料理の一覧を HTML に変換する
    pub fn render(&self, dishes: &[Dish]) -> Result<String, tera::Error> {
        let items: Vec<DishItem<'_>> = dishes
            .iter()
            .map(|d| DishItem {
                dish:    d.name().as_str(),
                country: d.country().as_str(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("dishes", &items);
        self.engine.render(HOME_TEMPLATE, &context)
    }
}

/// ホーム画面の共有状態
pub struct HomeState {
    pub usecase:  DishUseCaseImpl,
    pub renderer: HomeRenderer,
}

/// GET /
#[tracing::instrument(skip_all)]
pub async fn home(State(state): State<Arc<HomeState>>) -> Result<Html<String>, ApiError> {
    let dishes = state.usecase.list_dishes().await?;
    Ok(Html(state.renderer.render(&dishes)?))
}
