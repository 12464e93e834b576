//! Todo 管理ユースケース
//!
//! Todo の変更はすべてユーザー集約に対する変更関数としてリポジトリに渡す。
//! 同じユーザーへの同時リクエストはストア側で直列化される。

use std::sync::Arc;

use todolist_domain::{
    DomainError,
    clock::Clock,
    todo::{Deadline, NewTodo, Todo, TodoId, TodoTitle},
    user::{User, UserId},
};
use todolist_infra::repository::UserRepository;

use crate::error::ApiError;

/// Todo 作成の入力
pub struct CreateTodoInput {
    pub title:    TodoTitle,
    pub deadline: Deadline,
}

/// Todo 更新の入力
///
/// 部分更新ではない。`title` が `None` の場合はタイトルを消去し、
/// `deadline` は渡された値（省略時は `Deadline::Invalid`）で上書きする。
pub struct UpdateTodoInput {
    pub title:    Option<TodoTitle>,
    pub deadline: Deadline,
}

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
    clock:           Arc<dyn Clock>,
}

impl TodoUseCaseImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repository,
            clock,
        }
    }

    /// Todo を作成し、ユーザーの一覧の末尾に追加する
    pub async fn create_todo(
        &self,
        user_id: &UserId,
        input: CreateTodoInput,
    ) -> Result<TodoId, ApiError> {
        let todo = Todo::new(NewTodo {
            id:       TodoId::new(),
            title:    input.title,
            deadline: input.deadline,
            now:      self.clock.now(),
        });
        let todo_id = todo.id().clone();

        self.modify_user(user_id, move |user| Ok(user.with_todo_added(todo)))
            .await?;

        tracing::info!(user.id = %user_id, todo.id = %todo_id, "Todo を作成しました");
        Ok(todo_id)
    }

    /// Todo のタイトルと期限を置き換える
    pub async fn update_todo(
        &self,
        user_id: &UserId,
        todo_id: &TodoId,
        input: UpdateTodoInput,
    ) -> Result<(), ApiError> {
        self.modify_user(user_id, move |user| {
            user.with_todo_replaced(todo_id, input.title, input.deadline)
        })
        .await?;

        tracing::info!(user.id = %user_id, todo.id = %todo_id, "Todo を更新しました");
        Ok(())
    }

    /// Todo を完了にする（完了済みでもエラーにしない）
    pub async fn complete_todo(&self, user_id: &UserId, todo_id: &TodoId) -> Result<(), ApiError> {
        self.modify_user(user_id, |user| user.with_todo_completed(todo_id))
            .await?;

        tracing::info!(user.id = %user_id, todo.id = %todo_id, "Todo を完了にしました");
        Ok(())
    }

    /// Todo を削除する
    pub async fn delete_todo(&self, user_id: &UserId, todo_id: &TodoId) -> Result<(), ApiError> {
        self.modify_user(user_id, |user| user.without_todo(todo_id))
            .await?;

        tracing::info!(user.id = %user_id, todo.id = %todo_id, "Todo を削除しました");
        Ok(())
    }

    /// ユーザー集約に変更を適用して保存する
    ///
    /// 変更が拒否された場合（Todo が存在しないなど）は何も保存しない。
    async fn modify_user(
        &self,
        user_id: &UserId,
        mutate: impl FnOnce(User) -> Result<User, DomainError> + Send,
    ) -> Result<User, ApiError> {
        let user = self
            .user_repository
            .modify(user_id, Box::new(mutate))
            .await??;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use todolist_domain::{
        clock::FixedClock,
        user::NewUser,
        value_objects::{DisplayName, Username},
    };
    use todolist_infra::repository::InMemoryUserRepository;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    async fn setup() -> (TodoUseCaseImpl, Arc<InMemoryUserRepository>, UserId) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = User::new(NewUser {
            id:       UserId::new(),
            name:     DisplayName::new("Alice").unwrap(),
            username: Username::new("alice").unwrap(),
        });
        repo.insert(&user).await.unwrap();

        let sut = TodoUseCaseImpl::new(repo.clone(), Arc::new(FixedClock::new(fixed_now())));
        (sut, repo, user.id().clone())
    }

    fn create_input(title: &str) -> CreateTodoInput {
        CreateTodoInput {
            title:    TodoTitle::new(title).unwrap(),
            deadline: Deadline::parse("2024-01-01"),
        }
    }

    async fn stored_todos(repo: &InMemoryUserRepository, user_id: &UserId) -> Vec<Todo> {
        repo.find_by_id(user_id)
            .await
            .unwrap()
            .unwrap()
            .todos()
            .to_vec()
    }

    #[tokio::test]
    async fn test_create_todoは末尾に未完了のtodoを追加する() {
        let (sut, repo, user_id) = setup().await;

        sut.create_todo(&user_id, create_input("first")).await.unwrap();
        let second_id = sut.create_todo(&user_id, create_input("second")).await.unwrap();

        let todos = stored_todos(&repo, &user_id).await;
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id(), &second_id);
        assert_eq!(todos[1].title().map(TodoTitle::as_str), Some("second"));
        assert!(!todos[1].done());
        assert_eq!(todos[1].created_at(), fixed_now());
    }

    #[tokio::test]
    async fn test_update_todoはタイトルと期限を上書きする() {
        let (sut, repo, user_id) = setup().await;
        let todo_id = sut.create_todo(&user_id, create_input("milk")).await.unwrap();

        sut.update_todo(
            &user_id,
            &todo_id,
            UpdateTodoInput {
                title:    Some(TodoTitle::new("bread").unwrap()),
                deadline: Deadline::Invalid,
            },
        )
        .await
        .unwrap();

        let todos = stored_todos(&repo, &user_id).await;
        assert_eq!(todos[0].title().map(TodoTitle::as_str), Some("bread"));
        assert_eq!(todos[0].deadline(), Deadline::Invalid);
    }

    #[tokio::test]
    async fn test_complete_todoは2回呼んでも成功する() {
        let (sut, repo, user_id) = setup().await;
        let todo_id = sut.create_todo(&user_id, create_input("milk")).await.unwrap();

        sut.complete_todo(&user_id, &todo_id).await.unwrap();
        sut.complete_todo(&user_id, &todo_id).await.unwrap();

        assert!(stored_todos(&repo, &user_id).await[0].done());
    }

    #[tokio::test]
    async fn test_delete_todoは対象のみ削除する() {
        let (sut, repo, user_id) = setup().await;
        let keep = sut.create_todo(&user_id, create_input("keep")).await.unwrap();
        let remove = sut.create_todo(&user_id, create_input("remove")).await.unwrap();

        sut.delete_todo(&user_id, &remove).await.unwrap();

        let todos = stored_todos(&repo, &user_id).await;
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id(), &keep);
    }

    #[tokio::test]
    async fn test_存在しないtodoはtodo_not_foundになる() {
        let (sut, repo, user_id) = setup().await;
        sut.create_todo(&user_id, create_input("keep")).await.unwrap();
        let unknown = TodoId::new();

        let err = sut.delete_todo(&user_id, &unknown).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Todo not found with id {unknown} for received user.")
        );
        assert_eq!(stored_todos(&repo, &user_id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_未登録ユーザーへの変更は内部エラーになる() {
        let (sut, _repo, _user_id) = setup().await;

        let result = sut.create_todo(&UserId::new(), create_input("milk")).await;

        assert!(matches!(result, Err(ApiError::Internal(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_同一ユーザーへの同時操作がすべて成功し更新が失われない() {
        let (sut, repo, user_id) = setup().await;
        let sut = Arc::new(sut);

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let sut = Arc::clone(&sut);
                let user_id = user_id.clone();
                tokio::spawn(async move {
                    let todo_id = sut
                        .create_todo(&user_id, create_input(&format!("todo-{i}")))
                        .await?;
                    if i % 2 == 0 {
                        sut.complete_todo(&user_id, &todo_id).await?;
                    }
                    Ok::<_, ApiError>(())
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let todos = stored_todos(&repo, &user_id).await;
        assert_eq!(todos.len(), 50);
        assert_eq!(todos.iter().filter(|todo| todo.done()).count(), 25);
    }
}
