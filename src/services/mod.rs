//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 인증 코어와 사용자 관리 기능을 담당합니다.
//! 서비스 인스턴스는 `main`에서 한 번 조립되어 [`crate::core::AppState`]로 공유됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (가입, 승인, 역할 변경, 거절)
//! - JWT 토큰 기반 인증 시스템
//! - 역할 계층 기반 권한 판정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let profile = state.user_service.get_profile(&user.user_id).await?;
//! ```

pub mod users;
pub mod auth;
