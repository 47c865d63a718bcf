//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출 및 액세스 토큰 검증
//! - 저장소에서 계정을 다시 읽어 활성/승인 상태 확인
//! - 최소 역할 요구사항 검사 (`user < admin < super_admin`)
//! - 사용자 정보를 request extension에 저장
//!
//! 실패 시 `AppError`의 상태 코드와 `{"error": "..."}` 본문으로 응답합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::domain::auth::Role;
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(state.clone())
//!     .service(
//!         web::scope("/api/v1/users")
//!             .wrap(AuthMiddleware::required_with_role(Role::Admin))
//!             .service(pending_users)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
