//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃, 프로필 조회 엔드포인트입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/auth/signup` - 공개 회원가입 (`user` 역할만)
//! - `POST /api/v1/auth/login` - 사용자명 또는 이메일 로그인
//! - `POST /api/v1/auth/refresh` - 리프레시 토큰으로 액세스 토큰 재발급
//! - `POST /api/v1/auth/logout` - 클라이언트 측 토큰 폐기 안내
//! - `GET /api/v1/profile` - 현재 사용자 정보 (인증 필요)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{
    common::ApiResponse,
    users::request::{LoginRequest, RefreshTokenRequest, SignupRequest},
};
use crate::errors::AppError;

/// 회원가입 핸들러
///
/// 승인 게이트(`REQUIRE_APPROVAL`)가 꺼져 있으면 토큰 쌍을 함께 반환하고,
/// 켜져 있으면 승인 대기 메시지와 사용자 정보만 반환합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/signup`
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/signup \
///   -H "Content-Type: application/json" \
///   -d '{"username": "operator1", "email": "operator1@example.com", "password": "SecurePass123!"}'
/// ```
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.user_service.signup(payload.into_inner()).await?;

    let message = if response.access_token.is_some() {
        "user registered successfully"
    } else {
        "registration submitted, awaiting admin approval"
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(message, response)))
}

/// 로컬 로그인 핸들러
///
/// `username` 필드에 사용자명 또는 이메일을 받습니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.user_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("login successful", response)))
}

/// 토큰 갱신 엔드포인트
///
/// 리프레시 토큰은 교체되지 않으며 새 액세스 토큰만 발급됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    state: web::Data<AppState>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.user_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("token refreshed", response)))
}

/// 로그아웃
///
/// 서버는 토큰 상태를 보관하지 않으므로 클라이언트가 토큰을 폐기하면 됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/logout`
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::message("logged out, discard tokens on the client"))
}

/// 현재 사용자 프로필
///
/// # Endpoint
/// `GET /api/v1/profile`
#[get("")]
pub async fn get_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("profile retrieved", profile)))
}
