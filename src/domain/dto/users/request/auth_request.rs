//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::validate_username;

/// 공개 회원가입 요청 구조체
///
/// `role`은 생략하거나 `"user"`만 허용됩니다. 그 외 값은 서비스 계층에서 거부합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 5, max = 50, message = "사용자명은 5-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[validate(length(max = 100, message = "이메일은 100자 이하여야 합니다"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<String>,
}

/// 로그인 요청 구조체
///
/// `username` 필드에 사용자명 또는 이메일을 넣을 수 있습니다. (`email` 키도 허용)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(alias = "email")]
    #[validate(length(min = 1, message = "사용자명 또는 이메일을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            username: "alice01".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
            role: None,
        };
        assert!(valid.validate().is_ok());

        let short_name = SignupRequest { username: "al".to_string(), ..valid.clone() };
        assert!(short_name.validate().is_err());

        let at_sign_name = SignupRequest { username: "bob@work".to_string(), ..valid.clone() };
        assert!(at_sign_name.validate().is_err());

        let bad_email = SignupRequest { email: "not-an-email".to_string(), ..valid.clone() };
        assert!(bad_email.validate().is_err());

        let short_password = SignupRequest { password: "short".to_string(), ..valid.clone() };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_login_request_accepts_email_key() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"alice@example.com","password":"password123"}"#).unwrap();
        assert_eq!(request.username, "alice@example.com");
    }
}
