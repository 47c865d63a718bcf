//! 테스트 전용 메모리 저장소

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::domain::auth::Role;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use crate::repositories::users::user_store::UserStore;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 중복 검사 없이 바로 넣습니다.
    pub fn put(&self, user: User) {
        self.lock().insert(user.id.clone(), user);
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, User>> {
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn find(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.lock().values().find(|u| predicate(u)).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.get(id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.find(|u| u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.find(|u| u.email == email))
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        Ok(self.find(|u| u.username == username || u.email == email))
    }

    async fn find_super_admin(&self) -> Result<Option<User>, AppError> {
        Ok(self.find(|u| u.role == Role::SuperAdmin))
    }

    async fn find_pending(&self) -> Result<Vec<User>, AppError> {
        let mut pending: Vec<User> = self
            .lock()
            .values()
            .filter(|u| u.is_pending_approval())
            .cloned()
            .collect();
        pending.sort_by_key(|u| u.created_at);
        Ok(pending)
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        let mut users = self.lock();
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_role(&self, id: &str, role: Role) -> Result<Option<User>, AppError> {
        let mut users = self.lock();
        Ok(users.get_mut(id).map(|user| {
            user.role = role;
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }

    async fn save_approval(&self, user: &User) -> Result<Option<User>, AppError> {
        let mut users = self.lock();
        Ok(users.get_mut(&user.id).map(|stored| {
            stored.role = user.role;
            stored.is_approved = user.is_approved;
            stored.is_active = user.is_active;
            stored.approved_at = user.approved_at;
            stored.approved_by = user.approved_by.clone();
            stored.updated_at = user.updated_at;
            stored.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.lock().remove(id).is_some())
    }

    async fn touch_last_login(&self, id: &str) -> Result<(), AppError> {
        if let Some(user) = self.lock().get_mut(id) {
            user.last_login_at = Some(DateTime::now());
        }
        Ok(())
    }
}
