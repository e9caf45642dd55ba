//! # 料理
//!
//! カタログの唯一のエンティティである料理（ID・料理名・原産国）のモデル。
//!
//! ## 設計判断
//!
//! ### ID は呼び出し側が指定する
//!
//! `DishId` は自動採番しない。重複はデータベースの主キー制約で拒否される。
//!
//! ### JSON からの寛容な変換
//!
//! 登録リクエストの `id` は整数以外の表現も受け付ける:
//!
//! | JSON 値 | 結果 |
//! |---------|------|
//! | 整数 | そのまま（`i64` に収まる場合） |
//! | 文字列 | 前後の空白を除き、符号付き 10 進数なら採用 |
//! | 浮動小数点数 | 0 方向に切り捨て（`3.7` → `3`） |
//! | 真偽値 | `true` = 1, `false` = 0 |
//! | `null` / 配列 / オブジェクト | 型エラー |

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DomainError, ExpectedType};

/// 料理の一意識別子
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
pub struct DishId(i64);

impl DishId {
    /// リクエストボディ上のキー名
    pub const FIELD: &'static str = "id";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// JSON 値を整数 ID に変換する
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidType {
            field:    Self::FIELD,
            expected: ExpectedType::Integer,
        };

        let id = match value {
            Value::Number(number) => match number.as_i64() {
                Some(n) => n,
                None => truncate_float(number.as_f64().ok_or_else(invalid)?).ok_or_else(invalid)?,
            },
            Value::String(text) => text.trim().parse::<i64>().map_err(|_| invalid())?,
            Value::Bool(flag) => i64::from(*flag),
            Value::Null | Value::Array(_) | Value::Object(_) => return Err(invalid()),
        };

        Ok(Self(id))
    }
}

/// 有限かつ `i64` の範囲に収まる場合のみ 0 方向に切り捨てる
fn truncate_float(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    let in_range = (i64::MIN as f64..i64::MAX as f64).contains(&truncated);

    (value.is_finite() && in_range).then_some(truncated as i64)
}

define_validated_string! {
    /// 料理名（値オブジェクト）
    ///
    /// 前後の空白を除去した上で空でないこと。
    pub struct DishName {
        field: "dish",
    }
}

define_validated_string! {
    /// 原産国（値オブジェクト）
    pub struct Country {
        field: "country",
    }
}

/// 料理エンティティ
///
/// 作成後は不変。更新操作は存在せず、削除のみ可能。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    id:      DishId,
    name:    DishName,
    country: Country,
}

impl Dish {
    /// 新しい料理を作成する
    pub fn new(id: DishId, name: DishName, country: Country) -> Self {
        Self { id, name, country }
    }

    /// データベースから読み出した値で復元する
    pub fn from_db(id: DishId, name: DishName, country: Country) -> Self {
        Self { id, name, country }
    }

    pub fn id(&self) -> DishId {
        self.id
    }

    pub fn name(&self) -> &DishName {
        &self.name
    }

    pub fn country(&self) -> &Country {
        &self.country
    }
}
