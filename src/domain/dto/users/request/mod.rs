//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 형식을 검증합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! #[post("/signup")]
//! async fn signup(payload: web::Json<SignupRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```
//!
//! 검증 실패는 `AppError::ValidationError`로 변환되어 400 Bad Request로 응답합니다.

pub mod auth_request;
pub mod create_user_request;
pub mod seed_request;

pub use auth_request::{LoginRequest, RefreshTokenRequest, SignupRequest};
pub use create_user_request::{CreateUserRequest, UpdateRoleRequest};
pub use seed_request::{ResetSuperAdminRequest, SeedSuperAdminRequest};
