use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::auth::Role;
use crate::errors::AppError;

/// 인증 미들웨어가 요청에 첨부하는 사용자 정보
///
/// `role`은 액세스 토큰 발급 시점의 스냅샷입니다.
/// 활성/승인 상태는 미들웨어가 매 요청마다 저장소에서 다시 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자명
    pub username: String,

    /// 토큰에 포함된 역할
    pub role: Role,
}

impl AuthenticatedUser {
    /// 요구 역할 이상인지 확인
    pub fn has_role_at_least(&self, required: Role) -> bool {
        self.role.has_at_least(required)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(
                AppError::AuthenticationError("authentication required".to_string()).into()
            )),
        }
    }
}
