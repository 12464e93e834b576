//! ユーザー管理ユースケース

use std::sync::Arc;

use todolist_domain::{
    user::{NewUser, User, UserId},
    value_objects::{DisplayName, Username},
};
use todolist_infra::repository::UserRepository;

use crate::error::ApiError;

/// ユーザー登録の入力
pub struct RegisterUserInput {
    pub name:     DisplayName,
    pub username: Username,
}

/// ユーザー管理ユースケース
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// ユーザーを登録する
    ///
    /// ユーザー名の重複は検査しない。同じユーザー名での再登録も受け付ける。
    pub async fn register_user(&self, input: RegisterUserInput) -> Result<User, ApiError> {
        let user = User::new(NewUser {
            id:       UserId::new(),
            name:     input.name,
            username: input.username,
        });

        self.user_repository.insert(&user).await?;

        tracing::info!(
            user.id = %user.id(),
            user.name = ?user.name(),
            "ユーザーを登録しました"
        );
        Ok(user)
    }

    /// `username` ヘッダーの値から操作ユーザーを解決する
    ///
    /// 空文字列や未登録のユーザー名は [`ApiError::user_not_found`] になる。
    pub async fn resolve_user(&self, username: &str) -> Result<User, ApiError> {
        let Ok(key) = Username::new(username) else {
            return Err(ApiError::user_not_found(username));
        };

        self.user_repository
            .find_by_username(&key)
            .await?
            .ok_or_else(|| ApiError::user_not_found(username))
    }
}
