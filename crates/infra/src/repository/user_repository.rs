//! # UserRepository
//!
//! ユーザー集約（所有する Todo を含む）の保管を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID 解決の抽象化**: `username` からユーザーへの解決は [`UserRepository::find_by_username`] に集約
//! - **索引**: `username → UserId` のハッシュ索引で O(1) に解決する
//! - **重複ユーザー名の許容**: 索引は最初に登録されたユーザーを指し続ける
//! - **アトミックな変更**: 集約の変更は [`UserRepository::modify`] でストアの書き込みロック内で適用する

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use todolist_domain::{
    DomainError,
    user::{User, UserId},
    value_objects::Username,
};

use crate::error::InfraError;

/// ユーザー集約に適用する変更
///
/// ストアのロックを保持したまま同期的に呼び出される。
pub type UserMutation<'a> = Box<dyn FnOnce(User) -> Result<User, DomainError> + Send + 'a>;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザーを登録する
    ///
    /// ユーザー名の重複は検査しない。
    async fn insert(&self, user: &User) -> Result<(), InfraError>;

    /// ID でユーザーを検索
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError>;

    /// ユーザー名でユーザーを検索
    ///
    /// 同じユーザー名が複数登録されている場合は、最初に登録されたユーザーを返す。
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, InfraError>;

    /// ユーザー集約に変更を適用して保存する
    ///
    /// 読み込み・変更・保存の間、同じユーザーへの他の変更は割り込まない。
    ///
    /// # 戻り値
    ///
    /// - `Ok(Ok(user))`: 変更後のユーザー（保存済み）
    /// - `Ok(Err(DomainError))`: 変更が拒否された。ストアは変更されない
    /// - `Err(InfraError)` (Unexpected): 未登録のユーザー
    async fn modify(
        &self,
        id: &UserId,
        mutate: UserMutation<'_>,
    ) -> Result<Result<User, DomainError>, InfraError>;
}

#[derive(Debug, Default)]
struct Directory {
    users:       HashMap<UserId, User>,
    by_username: HashMap<Username, UserId>,
}

/// インメモリ実装の UserRepository
///
/// プロセス内のメモリにのみ保持する。再起動で内容は失われる。
/// `Clone` は同じストアを共有する。
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    directory: Arc<RwLock<Directory>>,
}

impl InMemoryUserRepository {
    /// 空のリポジトリを作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(user.id = %user.id()))]
    async fn insert(&self, user: &User) -> Result<(), InfraError> {
        let mut directory = self.directory.write()?;
        directory
            .by_username
            .entry(user.username().clone())
            .or_insert_with(|| user.id().clone());
        directory.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(user.id = %id))]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError> {
        let directory = self.directory.read()?;
        Ok(directory.users.get(id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%username))]
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, InfraError> {
        let directory = self.directory.read()?;
        Ok(directory
            .by_username
            .get(username)
            .and_then(|id| directory.users.get(id))
            .cloned())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(user.id = %id))]
    async fn modify(
        &self,
        id: &UserId,
        mutate: UserMutation<'_>,
    ) -> Result<Result<User, DomainError>, InfraError> {
        let mut directory = self.directory.write()?;
        let Some(current) = directory.users.get_mut(id) else {
            return Err(InfraError::unexpected(format!(
                "未登録のユーザーは更新できません: {id}"
            )));
        };

        let result = mutate(current.clone());
        if let Ok(updated) = &result {
            current.clone_from(updated);
        }
        Ok(result)
    }
}
