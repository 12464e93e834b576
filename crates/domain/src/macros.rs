/// UUID v7 ベースの ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`Uuid` をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: UUID v7 を生成
/// - `from_uuid()` / `as_uuid()`
/// - `FromStr`: 正規形（小文字・ハイフン区切り）の文字列のみ受け付ける
/// - `Default` impl（`new()` に委譲）
///
/// パス パラメータの ID は文字列として完全一致で照合されるため、
/// `FromStr` は `Display` の出力と一致する表記以外を拒否する。
///
/// # 使用例
///
/// ```rust
/// use todolist_domain::todo::TodoId;
///
/// let id = TodoId::new();
/// let parsed: TodoId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// assert!(id.to_string().to_uppercase().parse::<TodoId>().is_err());
/// ```
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(uuid::Uuid);

        impl $Name {
            /// 新しい ID を生成する（UUID v7）
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            /// 既存の UUID から ID を作成する
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// 内部の UUID 参照を取得する
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl std::str::FromStr for $Name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match uuid::Uuid::parse_str(s) {
                    Ok(uuid) if uuid.to_string() == s => Ok(Self(uuid)),
                    _ => Err($crate::DomainError::Validation(format!(
                        "{} の形式が不正です: {}",
                        stringify!($Name),
                        s
                    ))),
                }
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// 必須 String Newtype の共通メソッドを生成する内部マクロ
///
/// 入力の加工（trim など）は行わず、空文字列のみを拒否する。
macro_rules! _required_string_common {
    ($Name:ident, $label:expr) => {
        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                Ok(Self(value))
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
    };
}

/// 必須 String Newtype を定義する宣言型マクロ
///
/// 存在チェック（空文字列の拒否）のみを行う。長さや文字種の制約は持たない。
///
/// # PII モード
///
/// `pii: true` を指定すると `Debug` 出力を `[REDACTED]` にマスクし、
/// `Display` impl を生成しない。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use todolist_domain::value_objects::DisplayName;
///
/// let name = DisplayName::new("Alice")?;
/// assert_eq!(name.as_str(), "Alice");
/// assert!(format!("{:?}", name).contains("[REDACTED]"));
/// assert!(DisplayName::new("").is_err());
/// # Ok(())
/// # }
/// ```
macro_rules! define_required_string {
    // PII アーム: Debug をマスク、Display を生成しない
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            pii: true $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&"[REDACTED]").finish()
            }
        }

        _required_string_common!($Name, $label);
    };
    // 非 PII アーム: derive(Debug, Hash) + Display 生成
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis struct $Name(String);

        _required_string_common!($Name, $label);

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
