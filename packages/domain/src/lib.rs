//! # Dishes ドメイン層
//!
//! 料理カタログの中核となるモデルとバリデーション規則を定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: `DishId` / `DishName` / `Country` は検証済みの値のみを保持する
//! - **エンティティ**: `Dish` は ID で識別される唯一のエンティティ
//! - **ドメインエラー**: 入力検証の失敗を種類ごとに列挙する
//!
//! ## 依存関係の方向
//!
//! ```text
//! dish-api → infra → domain
//! ```
//!
//! ドメイン層はデータベースや HTTP に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use dishes_domain::dish::{Country, Dish, DishId, DishName};
//!
//! let dish = Dish::new(
//!     DishId::new(1),
//!     DishName::new(" Ceviche ").unwrap(),
//!     Country::new("Peru").unwrap(),
//! );
//! assert_eq!(dish.name().as_str(), "Ceviche");
//! ```

#[macro_use]
mod macros;

pub mod dish;
pub mod error;

pub use error::{DomainError, ExpectedType};
