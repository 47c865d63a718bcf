//! 관리자 인증 서비스 백엔드
//!
//! 관리자 패널을 위한 인증 및 계정 관리 서비스입니다.
//! JWT 액세스/리프레시 토큰 기반 인증과 `user < admin < super_admin` 역할 계층을 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 공개 회원가입, 관리자 계정 생성, 가입 승인/거절, 역할 변경
//! - **JWT 인증**: HS256 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **인증 미들웨어**: 요청마다 토큰 검증 후 계정 활성/승인 상태 재확인
//! - **시드 부트스트랩**: 비밀키로 보호되는 최초 super admin 생성
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! routes ─(AuthMiddleware)─▶ handlers ─▶ services::users::UserService
//!                                          ├─ services::auth (PasswordService, TokenService, AuthorizationPolicy)
//!                                          └─ repositories::users::UserStore ─▶ MongoDB
//! ```
//!
//! 서비스 인스턴스는 `core::AppState`에 한 번 조립되어 `web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use admin_auth_backend::config::AppConfig;
//! use admin_auth_backend::core::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let state = AppState::build(&config, store)?;
//! let response = state.user_service.login(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
