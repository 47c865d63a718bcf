//! 역할 계층 기반 인가 정책
//!
//! 상태가 없는 순수 함수 모음입니다. 역할 비교와 역할 부여 권한,
//! 자기 자신에 대한 변경 여부를 한곳에서 판정합니다.

use crate::domain::auth::Role;
use crate::errors::AppError;

pub struct AuthorizationPolicy;

impl AuthorizationPolicy {
    /// `role`이 `required` 이상인지 확인
    pub fn has_role_at_least(role: Role, required: Role) -> bool {
        role.has_at_least(required)
    }

    /// 사용자 관리(생성, 역할 변경, 승인, 거절) 가능 여부. admin 이상.
    pub fn can_manage_users(role: Role) -> bool {
        Self::has_role_at_least(role, Role::Admin)
    }

    /// 관리자 계정 생성 가능 여부. super admin만.
    pub fn can_create_admins(role: Role) -> bool {
        role == Role::SuperAdmin
    }

    /// 관리자 패널 접근 가능 여부. admin 이상.
    pub fn can_access_admin_panel(role: Role) -> bool {
        Self::has_role_at_least(role, Role::Admin)
    }

    /// `acting` 역할이 대상에게 `target` 역할을 부여할 수 있는지 확인
    ///
    /// | target | 필요한 acting |
    /// |--------|---------------|
    /// | `super_admin` | `super_admin` |
    /// | `admin` | `super_admin` |
    /// | `user` | `admin` 이상 |
    ///
    /// 대상 계정의 현재 역할은 고려하지 않습니다.
    pub fn can_assign_role(acting: Role, target: Role) -> bool {
        match target {
            Role::SuperAdmin | Role::Admin => Self::can_create_admins(acting),
            Role::User => Self::can_manage_users(acting),
        }
    }

    pub fn is_self_modification(actor_id: &str, target_id: &str) -> bool {
        actor_id == target_id
    }

    /// 역할 문자열 검증
    ///
    /// # Errors
    ///
    /// `"user"`, `"admin"`, `"super_admin"` 중 하나와 정확히 일치하지 않으면 `InvalidRoleError`
    pub fn validate_role_string(s: &str) -> Result<Role, AppError> {
        s.parse::<Role>()
    }
}
