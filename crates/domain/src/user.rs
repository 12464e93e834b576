//! # ユーザー
//!
//! ユーザー集約を定義する。ユーザーは自身の Todo 一覧を排他的に所有し、
//! Todo の変更はすべてユーザー経由で行う。
//!
//! ## 設計方針
//!
//! - **集約ルート**: Todo は単独では存在せず、`User` のメソッドで追加・変更・削除する
//! - **所有者スコープ**: Todo の検索は所有ユーザーの一覧内のみ（他ユーザーの ID は見つからない扱い）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todolist_domain::{
//!     todo::{Deadline, NewTodo, Todo, TodoId, TodoTitle},
//!     user::{NewUser, User, UserId},
//!     value_objects::{DisplayName, Username},
//! };
//!
//! let user = User::new(NewUser {
//!     id:       UserId::new(),
//!     name:     DisplayName::new("Alice")?,
//!     username: Username::new("alice")?,
//! });
//! let todo_id = TodoId::new();
//! let user = user.with_todo_added(Todo::new(NewTodo {
//!     id:       todo_id.clone(),
//!     title:    TodoTitle::new("buy milk")?,
//!     deadline: Deadline::parse("2024-01-01"),
//!     now:      chrono::Utc::now(),
//! }));
//!
//! let user = user.with_todo_completed(&todo_id)?;
//! assert!(user.find_todo(&todo_id).is_some_and(Todo::done));
//! # Ok(())
//! # }
//! ```

use crate::{
    DomainError,
    todo::{Deadline, Todo, TodoId, TodoTitle},
    value_objects::{DisplayName, Username},
};

define_uuid_id! {
    /// ユーザー ID（一意識別子）
    pub struct UserId;
}

/// ユーザーエンティティ（集約ルート）
///
/// # 不変条件
///
/// - `id` / `name` / `username` は登録後に変更されない
/// - `todos` は追加順を保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:       UserId,
    name:     DisplayName,
    username: Username,
    todos:    Vec<Todo>,
}

/// ユーザーの新規作成パラメータ
pub struct NewUser {
    pub id:       UserId,
    pub name:     DisplayName,
    pub username: Username,
}

impl User {
    /// 新しいユーザーを作成する（Todo は空）
    pub fn new(params: NewUser) -> Self {
        Self {
            id:       params.id,
            name:     params.name,
            username: params.username,
            todos:    Vec::new(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// 所有する Todo 一覧（追加順）
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// 所有する Todo を ID で検索する（先頭一致）
    pub fn find_todo(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Todo を末尾に追加したユーザーを返す
    pub fn with_todo_added(mut self, todo: Todo) -> Self {
        self.todos.push(todo);
        self
    }

    /// Todo のタイトルと期限を置き換えたユーザーを返す
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound`: 所有する Todo に該当 ID が存在しない
    pub fn with_todo_replaced(
        self,
        id: &TodoId,
        title: Option<TodoTitle>,
        deadline: Deadline,
    ) -> Result<Self, DomainError> {
        self.modify_todo(id, |todo| todo.replaced(title, deadline))
    }

    /// Todo を完了にしたユーザーを返す
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound`: 所有する Todo に該当 ID が存在しない
    pub fn with_todo_completed(self, id: &TodoId) -> Result<Self, DomainError> {
        self.modify_todo(id, Todo::completed)
    }

    /// Todo を 1 件取り除いたユーザーを返す
    ///
    /// 残りの Todo の並び順は保持される。
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound`: 所有する Todo に該当 ID が存在しない
    pub fn without_todo(mut self, id: &TodoId) -> Result<Self, DomainError> {
        let index = self.position_of(id)?;
        self.todos.remove(index);
        Ok(self)
    }

    fn modify_todo(
        mut self,
        id: &TodoId,
        f: impl FnOnce(Todo) -> Todo,
    ) -> Result<Self, DomainError> {
        let index = self.position_of(id)?;
        let todo = self.todos[index].clone();
        self.todos[index] = f(todo);
        Ok(self)
    }

    fn position_of(&self, id: &TodoId) -> Result<usize, DomainError> {
        self.todos
            .iter()
            .position(|todo| todo.id() == id)
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Todo",
                id:          id.to_string(),
            })
    }
}
