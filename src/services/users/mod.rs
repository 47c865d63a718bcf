//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - 회원가입 및 로그인 (사용자명 또는 이메일)
//! - 리프레시 토큰을 통한 액세스 토큰 갱신
//! - 관리자 계정 생성, 역할 변경, 가입 승인/거절
//! - 시드 비밀키로 보호되는 super admin 부트스트랩
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let response = user_service.login(LoginRequest { username, password }).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
