//! 인증 및 보안 서비스 모듈
//!
//! 관리 계정 인증의 핵심 구성 요소를 제공합니다.
//!
//! # Features
//!
//! - [`PasswordService`]: bcrypt 비밀번호 설정/검증
//! - [`TokenService`]: HS256 액세스/리프레시 토큰 발급, 검증, 갱신
//! - [`AuthorizationPolicy`]: `user < admin < super_admin` 역할 계층 판정
//!
//! 이 모듈은 로그를 남기지 않고 HTTP 응답을 만들지 않습니다.
//! 실패는 모두 `AppError` / `TokenError`로 돌려주며 기록은 호출자가 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{TokenService, PasswordService, AuthorizationPolicy};
//!
//! password_service.verify_password(&user, "plaintext")?;
//! let tokens = token_service.issue_token_pair(&user, token_service.access_ttl(), token_service.refresh_ttl())?;
//! assert!(AuthorizationPolicy::can_assign_role(Role::SuperAdmin, Role::Admin));
//! ```

pub mod authorization_policy;
pub mod password_service;
pub mod token_service;

pub use authorization_policy::AuthorizationPolicy;
pub use password_service::{PasswordService, INVALID_CREDENTIALS, MIN_PASSWORD_LENGTH};
pub use token_service::TokenService;
