//! # ユースケース層
//!
//! 料理カタログのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは HTTP の入出力変換のみを行い、検証と永続化の
//!   判断はユースケースに集約する

pub mod dish;

pub use dish::{DishUseCaseImpl, parse_new_dish};
