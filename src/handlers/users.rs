//! # User Management HTTP Handlers
//!
//! 관리자(admin 이상)가 사용하는 사용자 관리 엔드포인트입니다.
//! 스코프 전체가 `AuthMiddleware::required_with_role(Role::Admin)`로 보호되며,
//! 세부 권한(역할 부여 범위, 자기 자신 수정 금지)은 서비스 계층이 판정합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 역할 지정 계정 생성 | 201 Created |
//! | `GET` | `/api/v1/users/pending` | 승인 대기 목록 | 200 OK |
//! | `PUT` | `/api/v1/users/{id}/role` | 역할 변경 | 200 OK |
//! | `POST` | `/api/v1/users/{id}/approve` | 가입 승인 | 200 OK |
//! | `DELETE` | `/api/v1/users/{id}/reject` | 가입 거절 (삭제) | 200 OK |

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::AppState;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{
    common::ApiResponse,
    users::request::{CreateUserRequest, UpdateRoleRequest},
};
use crate::errors::AppError;

/// 관리자 계정 생성 핸들러
///
/// admin은 `user` 역할만, super_admin은 모든 역할을 생성할 수 있습니다.
/// 생성된 계정은 승인된 상태입니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Authorization: Bearer $ACCESS_TOKEN" \
///   -H "Content-Type: application/json" \
///   -d '{"username": "staff01", "email": "staff01@example.com", "password": "SecurePass123!", "role": "user"}'
/// ```
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    actor: AuthenticatedUser,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service.create_user(&actor, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("user created successfully", user)))
}

#[get("/pending")]
pub async fn pending_users(
    state: web::Data<AppState>,
    actor: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pending = state.user_service.pending_users(&actor).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("pending users retrieved", pending)))
}

/// 역할 변경 핸들러
///
/// 자기 자신의 역할은 바꿀 수 없습니다.
#[put("/{user_id}/role")]
pub async fn update_role(
    state: web::Data<AppState>,
    actor: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .update_role(&actor, &user_id, &payload.role)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("user role updated successfully", user)))
}

#[post("/{user_id}/approve")]
pub async fn approve_user(
    state: web::Data<AppState>,
    actor: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.approve_user(&actor, &user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("user approved successfully", user)))
}

/// 가입 거절 핸들러
///
/// 승인 대기 중인 계정만 거절할 수 있으며, 거절된 계정은 삭제됩니다.
#[delete("/{user_id}/reject")]
pub async fn reject_user(
    state: web::Data<AppState>,
    actor: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let rejected = state.user_service.reject_user(&actor, &user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("user rejected and removed", rejected)))
}
