//! # リポジトリ実装
//!
//! ドメインモデルの永続化を担当する。各メソッドは自分専用の
//! スコープ付きコネクションを取得し、リクエストをまたいで状態を持たない。

pub mod dish_repository;

pub use dish_repository::{DishRepository, SqliteDishRepository};
