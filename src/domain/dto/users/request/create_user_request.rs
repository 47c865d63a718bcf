//! 관리자용 사용자 관리 요청 DTO
//!
//! 관리자가 역할을 지정해 계정을 만들거나 역할을 변경할 때 사용합니다.
//! 역할 문자열은 여기서 검증하지 않고 `AuthorizationPolicy::validate_role_string`으로
//! 넘겨 `InvalidRoleError`(400)로 응답합니다.
use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::validate_username;

/// 관리자가 새로운 사용자 계정을 생성할 때의 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50, message = "사용자명은 3-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[validate(length(max = 100, message = "이메일은 100자 이하여야 합니다"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    /// `super_admin` | `admin` | `user`
    pub role: String,
}

/// 역할 변경 요청 DTO
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}
