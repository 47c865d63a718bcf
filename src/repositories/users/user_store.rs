//! 사용자 저장소 추상화
//!
//! 인증 코어가 의존하는 신원 조회/저장 인터페이스입니다.
//! 운영 환경은 [`MongoUserRepository`](super::user_repo::MongoUserRepository),
//! 테스트는 메모리 구현을 사용합니다.

use async_trait::async_trait;
use crate::domain::auth::Role;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// 사용자 저장소
///
/// 모든 메서드는 저장소 장애를 `AppError::DatabaseError`로 보고합니다.
/// 존재하지 않는 대상은 에러가 아니라 `None`/`false`로 돌려줍니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 사용자명 또는 이메일이 일치하는 첫 계정
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError>;

    /// 아무 super admin 계정 하나
    async fn find_super_admin(&self) -> Result<Option<User>, AppError>;

    /// 승인 대기 중인 일반 사용자 목록 (생성일 오름차순)
    async fn find_pending(&self) -> Result<Vec<User>, AppError>;

    /// 새 계정 저장
    ///
    /// # Errors
    ///
    /// 사용자명 또는 이메일이 이미 있으면 `AppError::ConflictError`
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 역할 변경 후 갱신된 계정 반환
    async fn update_role(&self, id: &str, role: Role) -> Result<Option<User>, AppError>;

    /// 역할과 승인 필드를 한 번의 쓰기로 저장하고 갱신된 계정 반환
    async fn save_approval(&self, user: &User) -> Result<Option<User>, AppError>;

    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    async fn touch_last_login(&self, id: &str) -> Result<(), AppError>;
}
