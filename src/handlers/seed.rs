//! 초기 super admin 부트스트랩 핸들러
//!
//! `SUPER_ADMIN_SEED_KEY`가 설정된 경우에만 동작하며, 요청 본문의 `secret_key`로 보호됩니다.
//! 토큰 인증은 거치지 않습니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::{
    common::ApiResponse,
    users::request::{ResetSuperAdminRequest, SeedSuperAdminRequest},
};
use crate::errors::AppError;

/// 최초 super admin 생성
///
/// super admin이 이미 있으면 409를 반환합니다.
///
/// # Endpoint
/// `POST /_seed/create-super-admin`
///
/// ```bash
/// curl -X POST http://localhost:8080/_seed/create-super-admin \
///   -H "Content-Type: application/json" \
///   -d '{"secret_key": "'$SUPER_ADMIN_SEED_KEY'", "username": "root", "email": "root@example.com", "password": "SecurePass123!"}'
/// ```
#[post("/create-super-admin")]
pub async fn create_super_admin(
    state: web::Data<AppState>,
    payload: web::Json<SeedSuperAdminRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service.seed_super_admin(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("super admin created successfully", user)))
}

/// 기존 계정을 super admin으로 승격
///
/// # Endpoint
/// `POST /_seed/reset-admin`
#[post("/reset-admin")]
pub async fn reset_admin(
    state: web::Data<AppState>,
    payload: web::Json<ResetSuperAdminRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .user_service
        .promote_to_super_admin(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("user promoted to super admin", user)))
}
