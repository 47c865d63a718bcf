//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 입력 검증과 응답 포장만 담당하고, 비즈니스 로직은
//! `web::Data<AppState>`에 담긴 서비스에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (UserStore)          ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 응답 형식
//!
//! - 성공: `{"success": true, "message": "...", "data": {...}}`
//! - 실패: `{"error": "..."}` (`AppError`의 `ResponseError` 구현)
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 토큰 갱신, 로그아웃, 프로필
//! - **`users`**: 관리자용 계정 생성, 역할 변경, 승인/거절
//! - **`seed`**: 비밀키로 보호되는 super admin 부트스트랩
//!
//! ```rust,ignore
//! #[post("/login")]
//! pub async fn login(
//!     state: web::Data<AppState>,
//!     payload: web::Json<LoginRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let response = state.user_service.login(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(ApiResponse::success("login successful", response)))
//! }
//! ```

pub mod users;
pub mod auth;
pub mod seed;
