//! # アプリケーション構築
//!
//! 依存コンポーネント（ストア・リポジトリ・レンダラー）からルーターを組み立てる。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! ## ルート
//!
//! | メソッド | パス | ハンドラ |
//! |---------|------|---------|
//! | GET | `/health` | [`health_check`] |
//! | GET | `/` | [`home`] |
//! | GET | `/dishes` | [`list_dishes`] |
//! | POST | `/dishes` | [`add_dish`] |
//! | DELETE | `/dishes/{id}` | [`delete_dish`] |

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};
use dishes_infra::{
    db::Store,
    repository::{DishRepository, SqliteDishRepository},
};
use dishes_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        DishState,
        HealthState,
        HomeRenderer,
        HomeState,
        add_dish,
        delete_dish,
        health_check,
        home,
        list_dishes,
    },
    usecase::DishUseCaseImpl,
};

/// ルーターが依存するコンポーネント一式
pub struct AppState {
    pub store:           Store,
    pub dish_repository: Arc<dyn DishRepository>,
    pub renderer:        HomeRenderer,
}

impl AppState {
    /// ストアから SQLite 実装のリポジトリを組み立てる
    pub fn new(store: Store) -> Result<Self, tera::Error> {
        let dish_repository = Arc::new(SqliteDishRepository::new(store.clone()));
        Ok(Self {
            store,
            dish_repository,
            renderer: HomeRenderer::new()?,
        })
    }
}

/// ルーターを構築する
pub fn build_router(state: AppState) -> Router {
    let usecase = DishUseCaseImpl::new(state.dish_repository);

    let health_state = Arc::new(HealthState { store: state.store });
    let home_state = Arc::new(HomeState {
        usecase:  usecase.clone(),
        renderer: state.renderer,
    });
    let dish_state = Arc::new(DishState { usecase });

    Router::new()
        .route("/health", get(health_check))
        .with_state(health_state)
        .route("/", get(home))
        .with_state(home_state)
        .route("/dishes", get(list_dishes).post(add_dish))
        .route("/dishes/{id}", delete(delete_dish))
        .with_state(dish_state)
        // レイヤー順序: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: x-request-id が無ければ UUID v7 を付与
        // 2. TraceLayer: request_id を含むリクエストスパンを作成
        // 3. PropagateRequestIdLayer: レスポンスに x-request-id をコピー
        // 4. CanonicalLogLineLayer: スパン内で完了ログを 1 行出力
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
