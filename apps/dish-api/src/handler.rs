//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、検証と永続化の判断はユースケースに委譲する

pub mod dish;
pub mod health;
pub mod home;

pub use dish::{DishState, add_dish, delete_dish, list_dishes};
pub use health::{HealthState, health_check};
pub use home::{HomeRenderer, HomeState, home};
