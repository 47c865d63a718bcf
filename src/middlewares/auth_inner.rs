//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::AppState;
use crate::domain::auth::{AuthenticatedUser, Role};
use crate::errors::{AppError, TokenError};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            let result = match authenticate(&req).await {
                Ok(user) => authorize(user, required_role),
                Err(err) => Err(err),
            };

            match result {
                Ok(user) => {
                    log::debug!("인증 성공: {} ({})", user.username, user.role);
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
            }
        })
    }
}

/// 역할 요구사항 확인
///
/// 토큰에 기록된 역할을 신뢰합니다.
fn authorize(user: AuthenticatedUser, required_role: Option<Role>) -> Result<AuthenticatedUser, AppError> {
    match required_role {
        Some(required) if !user.has_role_at_least(required) => {
            Err(AppError::AuthorizationError(format!(
                "{} role or higher is required",
                required
            )))
        }
        _ => Ok(user),
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증한 뒤 저장소에서 계정 상태를 다시 확인
async fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("AppState가 등록되지 않았습니다".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("missing authorization header".to_string()))?;

    let token = TokenService::extract_bearer_token(auth_header)?;
    let claims = state.token_service.validate_access_token(token)?;

    let role = claims
        .role
        .ok_or_else(|| TokenError::Malformed("access token has no role claim".to_string()))?;

    let user_service = &state.user_service;
    let user = user_service
        .store()
        .find_by_id(&claims.sub)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("user not found".to_string()))?;

    if !user.is_active {
        return Err(AppError::AuthenticationError("account is deactivated".to_string()));
    }

    if user_service.account().require_approval && !user.is_approved {
        return Err(AppError::AuthorizationError("account is pending approval".to_string()));
    }

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username.unwrap_or(user.username),
        role,
    })
}
