//! 비밀번호 해싱 서비스
//!
//! bcrypt(솔트 포함 적응형 해시)로 비밀번호를 설정하고 검증합니다.
//! CPU 비용이 큰 동기 연산이므로 HTTP 계층에서는 `web::block` 안에서 호출합니다.

use std::sync::OnceLock;
use crate::config::PasswordConfig;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, ErrorContext};

/// 최소 비밀번호 길이 (바이트)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// 로그인 실패 시 공통 메시지
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(config: PasswordConfig) -> Self {
        Self { cost: config.bcrypt_cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 8자 미만
    /// * `AppError::InternalError` - bcrypt 실패
    pub fn hash_password(&self, plaintext: &str) -> Result<String, AppError> {
        if plaintext.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::ValidationError(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        bcrypt::hash(plaintext, self.cost)
            .context("비밀번호 해싱 실패")
    }

    /// 계정의 비밀번호 해시를 무조건 덮어씁니다.
    ///
    /// 같은 평문이라도 매번 새 솔트가 사용되므로 해시 값은 달라집니다.
    pub fn set_password(&self, user: &mut User, plaintext: &str) -> Result<(), AppError> {
        user.password_hash = self.hash_password(plaintext)?;
        Ok(())
    }

    /// 비밀번호 검증
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError("invalid credentials")` - 불일치
    /// * `AppError::InternalError` - 저장된 해시가 손상된 경우
    pub fn verify_password(&self, user: &User, plaintext: &str) -> Result<(), AppError> {
        let matches = bcrypt::verify(plaintext, &user.password_hash)
            .context("비밀번호 검증 실패")?;

        if matches {
            Ok(())
        } else {
            Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))
        }
    }

    /// 존재하지 않는 사용자에 대해 같은 비용의 검증을 수행합니다.
    ///
    /// 결과는 항상 `AuthenticationError("invalid credentials")`입니다.
    pub fn verify_against_dummy(&self, plaintext: &str) -> AppError {
        static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

        let dummy = DUMMY_HASH.get_or_init(|| bcrypt::hash("dummy-password-for-timing", self.cost).ok());
        if let Some(hash) = dummy {
            let _ = bcrypt::verify(plaintext, hash);
        }

        AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::Role;

    fn service() -> PasswordService {
        PasswordService::new(PasswordConfig { bcrypt_cost: 4 })
    }

    fn user() -> User {
        User::new("alice01".to_string(), "alice@example.com".to_string(), Role::User)
    }

    #[test]
    fn test_set_then_verify() {
        let service = service();
        let mut user = user();

        service.set_password(&mut user, "correct horse").unwrap();

        assert!(!user.password_hash.is_empty());
        assert!(service.verify_password(&user, "correct horse").is_ok());
        assert!(matches!(
            service.verify_password(&user, "wrong horse"),
            Err(AppError::AuthenticationError(msg)) if msg == INVALID_CREDENTIALS
        ));
    }

    #[test]
    fn test_short_password_is_rejected_and_hash_untouched() {
        let service = service();
        let mut user = user();
        service.set_password(&mut user, "original-pass").unwrap();
        let before = user.password_hash.clone();

        let result = service.set_password(&mut user, "short");

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(user.password_hash, before);
    }

    #[test]
    fn test_exactly_eight_characters_is_accepted() {
        let mut user = user();
        assert!(service().set_password(&mut user, "12345678").is_ok());
    }

    #[test]
    fn test_salt_makes_hashes_unique() {
        let service = service();
        let mut first = user();
        let mut second = user();

        service.set_password(&mut first, "same-password").unwrap();
        service.set_password(&mut second, "same-password").unwrap();

        assert_ne!(first.password_hash, second.password_hash);
        assert!(service.verify_password(&first, "same-password").is_ok());
        assert!(service.verify_password(&second, "same-password").is_ok());
    }

    #[test]
    fn test_corrupt_hash_is_internal_error() {
        let mut user = user();
        user.password_hash = "not-a-bcrypt-hash".to_string();

        assert!(matches!(
            service().verify_password(&user, "whatever1"),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_dummy_verification_returns_invalid_credentials() {
        assert!(matches!(
            service().verify_against_dummy("anything"),
            AppError::AuthenticationError(msg) if msg == INVALID_CREDENTIALS
        ));
    }
}
