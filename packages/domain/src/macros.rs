/// リクエストの文字列フィールドを表す Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: trim + 空チェック
/// - `from_json()`: JSON 値からの変換（偽値は未入力扱い）
/// - `as_str()` / `into_string()`
/// - `Display`（平文出力）
///
/// # 引数
///
/// - `field`: リクエストボディ上のキー名。エラーメッセージにそのまま使う
macro_rules! define_validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            field: $field:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        $vis struct $Name(String);

        impl $Name {
            /// リクエストボディ上のキー名
            pub const FIELD: &'static str = $field;

            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::DomainError::MissingOrEmptyField(Self::FIELD));
                }

                Ok(Self(value))
            }

            /// JSON 値から作成する
            ///
            /// キーが無い場合と、`null` / `false` / `0` / `[]` / `{}` は未入力として扱う。
            /// それ以外の文字列でない値は型エラーになる。
            pub fn from_json(
                value: Option<&serde_json::Value>,
            ) -> Result<Self, $crate::DomainError> {
                use serde_json::Value;

                match value {
                    Some(Value::String(text)) => Self::new(text.as_str()),
                    None | Some(Value::Null) | Some(Value::Bool(false)) => {
                        Err($crate::DomainError::MissingOrEmptyField(Self::FIELD))
                    }
                    Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n == 0.0) => {
                        Err($crate::DomainError::MissingOrEmptyField(Self::FIELD))
                    }
                    Some(Value::Array(items)) if items.is_empty() => {
                        Err($crate::DomainError::MissingOrEmptyField(Self::FIELD))
                    }
                    Some(Value::Object(fields)) if fields.is_empty() => {
                        Err($crate::DomainError::MissingOrEmptyField(Self::FIELD))
                    }
                    Some(_) => Err($crate::DomainError::InvalidType {
                        field:    Self::FIELD,
                        expected: $crate::ExpectedType::String,
                    }),
                }
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
