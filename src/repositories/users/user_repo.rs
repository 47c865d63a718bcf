//! 사용자 Repository 구현체
//!
//! MongoDB `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//! 문서의 `_id`는 UUID 문자열이며 `username`, `email`에 유니크 인덱스를 둡니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{auth::Role, entities::users::user::User},
    errors::AppError,
    repositories::users::user_store::UserStore,
};

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 유니크/조회용 인덱스 생성
    ///
    /// 서버 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 사용자명 유니크 인덱스
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        // 승인 대기 목록 조회용
        let pending_index = IndexModel::builder()
            .keys(doc! { "is_approved": 1, "role": 1, "created_at": 1 })
            .options(IndexOptions::builder()
                .name("pending_approval".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, pending_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("사용자 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn set_fields(&self, id: &str, fields: Document) -> Result<Option<User>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.find_one(doc! { "_id": id }).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.find_one(doc! { "username": username }).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.find_one(doc! { "email": email }).await
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        self.find_one(doc! {
            "$or": [ { "username": username }, { "email": email } ]
        })
        .await
    }

    async fn find_super_admin(&self) -> Result<Option<User>, AppError> {
        self.find_one(doc! { "role": Role::SuperAdmin.as_str() }).await
    }

    async fn find_pending(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection
            .find(doc! { "is_approved": false, "role": Role::User.as_str() })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        // 동시 가입 경합은 유니크 인덱스가 막습니다.
        self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 사용자명 또는 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(user)
    }

    async fn update_role(&self, id: &str, role: Role) -> Result<Option<User>, AppError> {
        self.set_fields(id, doc! {
            "role": role.as_str(),
            "updated_at": DateTime::now(),
        })
        .await
    }

    async fn save_approval(&self, user: &User) -> Result<Option<User>, AppError> {
        self.set_fields(&user.id, doc! {
            "role": user.role.as_str(),
            "is_approved": user.is_approved,
            "is_active": user.is_active,
            "approved_at": user.approved_at,
            "approved_by": user.approved_by.clone(),
            "updated_at": user.updated_at,
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn touch_last_login(&self, id: &str) -> Result<(), AppError> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "last_login_at": DateTime::now() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
