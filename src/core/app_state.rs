//! 애플리케이션 공유 상태

use std::sync::Arc;
use crate::{
    config::AppConfig,
    errors::AppError,
    repositories::users::UserStore,
    services::{
        auth::{PasswordService, TokenService},
        users::UserService,
    },
};

/// 모든 핸들러와 인증 미들웨어에서 공유하는 상태
///
/// 요청마다 복제되지 않도록 `web::Data<AppState>`로 감싸서 등록합니다.
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// 설정과 저장소로 서비스 그래프를 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - JWT 비밀키가 비어 있는 경우
    pub fn build(config: &AppConfig, store: Arc<dyn UserStore>) -> Result<Self, AppError> {
        let token_service = Arc::new(TokenService::new(&config.jwt)?);
        let user_service = Arc::new(UserService::new(
            store,
            token_service.clone(),
            PasswordService::new(config.password),
            config.account,
            config.seed.clone(),
        ));

        Ok(Self { token_service, user_service })
    }
}
