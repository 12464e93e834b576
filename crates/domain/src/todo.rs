//! # Todo
//!
//! ユーザーが所有する Todo エンティティと、その値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 |
//! |---|------------|
//! | [`Todo`] | Todo（タスク） |
//! | [`TodoTitle`] | タイトル |
//! | [`Deadline`] | 期限 |
//!
//! ## 状態遷移
//!
//! `done` は未完了 → 完了の一方向のみ。完了を取り消す操作は存在しない。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todolist_domain::todo::{Deadline, NewTodo, Todo, TodoId, TodoTitle};
//!
//! let todo = Todo::new(NewTodo {
//!     id:       TodoId::new(),
//!     title:    TodoTitle::new("buy milk")?,
//!     deadline: Deadline::parse("2024-01-01"),
//!     now:      chrono::Utc::now(),
//! });
//! assert!(!todo.done());
//! assert!(todo.completed().done());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

define_uuid_id! {
    /// Todo ID（一意識別子）
    pub struct TodoId;
}

define_required_string! {
    /// Todo のタイトル（値オブジェクト）
    pub struct TodoTitle {
        label: "title",
    }
}

/// 期限（値オブジェクト）
///
/// 入力値の解釈に失敗しても作成・更新は拒否しない。
/// その場合は [`Deadline::Invalid`] として保持し、レスポンスでは `null` になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// 解釈できた日時
    At(DateTime<Utc>),
    /// 解釈できなかった値、または更新時に省略された値
    Invalid,
}

/// ECMAScript の Date が表現できる範囲（±8.64e15 ミリ秒）
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

impl Deadline {
    /// 文字列から期限を解釈する
    ///
    /// 受け付ける形式:
    /// - RFC 3339（`2024-01-01T10:00:00Z`、`+09:00` などのオフセット付き）
    /// - タイムゾーンなしの日時（`2024-01-01T10:00`、`2024-01-01T10:00:00.123`）。UTC とみなす
    /// - 日付のみ（`2024-01-01`）。UTC の 0 時とみなす
    ///
    /// それ以外は [`Deadline::Invalid`] を返す。
    pub fn parse(input: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Self::At(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Self::At(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map_or(Self::Invalid, |naive| Self::At(naive.and_utc()))
    }

    /// Unix エポックからのミリ秒数で期限を作成する
    ///
    /// 小数部は切り捨てる。非有限値や表現範囲外は [`Deadline::Invalid`]。
    pub fn from_epoch_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
            return Self::Invalid;
        }

        DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64).map_or(Self::Invalid, Self::At)
    }

    /// 日時を取得する（解釈できなかった場合は `None`）
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(dt) => Some(*dt),
            Self::Invalid => None,
        }
    }

    /// ISO 8601（UTC、ミリ秒精度）の文字列表現
    pub fn to_iso_string(&self) -> Option<String> {
        self.as_datetime().map(|dt| to_iso_string(&dt))
    }
}

/// 日時を `2024-01-01T00:00:00.000Z` 形式で文字列化する
pub fn to_iso_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Todo エンティティ
///
/// # 不変条件
///
/// - `id` と `created_at` は作成後に変更されない
/// - `done` は一度 `true` になったら `false` に戻らない
/// - `title` が `None` になるのは、タイトルを省略した更新の後のみ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:         TodoId,
    title:      Option<TodoTitle>,
    done:       bool,
    deadline:   Deadline,
    created_at: DateTime<Utc>,
}

/// Todo の新規作成パラメータ
pub struct NewTodo {
    pub id:       TodoId,
    pub title:    TodoTitle,
    pub deadline: Deadline,
    pub now:      DateTime<Utc>,
}

impl Todo {
    /// 新しい Todo を作成する（未完了）
    pub fn new(params: NewTodo) -> Self {
        Self {
            id:         params.id,
            title:      Some(params.title),
            done:       false,
            deadline:   params.deadline,
            created_at: params.now,
        }
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn title(&self) -> Option<&TodoTitle> {
        self.title.as_ref()
    }

    pub fn done(&self) -> bool {
        self.done
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// タイトルと期限を置き換えた Todo を返す
    ///
    /// 部分更新ではない。省略された項目も渡された値（`None` / `Invalid`）で上書きする。
    pub fn replaced(self, title: Option<TodoTitle>, deadline: Deadline) -> Self {
        Self {
            title,
            deadline,
            ..self
        }
    }

    /// 完了にした Todo を返す（冪等）
    pub fn completed(self) -> Self {
        Self { done: true, ..self }
    }
}
