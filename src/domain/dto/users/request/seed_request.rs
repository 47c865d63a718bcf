//! 시드(부트스트랩) 요청 DTO
use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::validate_username;

/// 최초 super admin 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct SeedSuperAdminRequest {
    pub secret_key: String,

    #[validate(length(min = 3, max = 50, message = "사용자명은 3-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 기존 사용자를 super admin으로 승격하는 요청
#[derive(Debug, Deserialize, Validate)]
pub struct ResetSuperAdminRequest {
    #[validate(length(min = 1, message = "비밀키를 입력해주세요"))]
    pub secret_key: String,

    #[validate(length(min = 1, message = "사용자 ID를 입력해주세요"))]
    pub user_id: String,
}
