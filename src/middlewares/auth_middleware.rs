//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::auth::Role;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 공유 상태(`web::Data<AppState>`)가 애플리케이션에 등록되어 있어야 합니다.
pub struct AuthMiddleware {
    /// 접근에 필요한 최소 역할 (선택사항)
    required_role: Option<Role>,
}

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 최소 역할을 요구하는 인증 미들웨어 생성
    pub fn required_with_role(role: Role) -> Self {
        Self { required_role: Some(role) }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{body::MessageBody, http::StatusCode, test, web, App, HttpResponse};
    use chrono::Duration;
    use crate::config::AppConfig;
    use crate::core::AppState;
    use crate::domain::auth::AuthenticatedUser;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::memory_store::MemoryUserStore;
    use super::*;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    fn setup(require_approval: bool) -> (Arc<MemoryUserStore>, web::Data<AppState>) {
        let store = Arc::new(MemoryUserStore::new());
        let state = AppState::build(&AppConfig::for_tests(require_approval), store.clone()).unwrap();
        (store, web::Data::new(state))
    }

    fn stored_user(store: &MemoryUserStore, username: &str, role: Role) -> User {
        let mut user = User::new(username.to_string(), format!("{}@example.com", username), role);
        user.password_hash = "$2b$04$placeholderplaceholderplaceholderplaceholderpla".to_string();
        user.is_approved = true;
        store.put(user.clone());
        user
    }

    fn access_token(state: &AppState, user: &User) -> String {
        state.token_service.issue_access_token(user, Duration::minutes(15)).unwrap()
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .service(
                        web::scope("/me")
                            .wrap(AuthMiddleware::required())
                            .route("", web::get().to(whoami)),
                    )
                    .service(
                        web::scope("/admin")
                            .wrap(AuthMiddleware::required_with_role(Role::Admin))
                            .route("", web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    async fn error_message<B: MessageBody>(res: ServiceResponse<B>) -> String {
        let body: serde_json::Value = test::read_body_json(res).await;
        body["error"].as_str().unwrap_or_default().to_string()
    }

    #[actix_web::test]
    async fn test_valid_access_token_reaches_handler() {
        let (store, state) = setup(false);
        let user = stored_user(&store, "alice01", Role::User);
        let app = init_app!(state);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", access_token(&state, &user))))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, "alice01");
    }

    #[actix_web::test]
    async fn test_missing_or_malformed_header_is_unauthorized() {
        let (_, state) = setup(false);
        let app = init_app!(state);

        let res = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        for header in ["Token abc", "Bearer ", "Basic dXNlcjpwYXNz", "Bearer not-a-jwt"] {
            let req = test::TestRequest::get()
                .uri("/me")
                .insert_header(("Authorization", header))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "header: {}", header);
        }
    }

    #[actix_web::test]
    async fn test_refresh_token_is_rejected() {
        let (store, state) = setup(false);
        let user = stored_user(&store, "alice01", Role::User);
        let refresh = state
            .token_service
            .issue_refresh_token(&user, Duration::days(7))
            .unwrap();
        let app = init_app!(state);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", refresh)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_live_account_state_is_rechecked() {
        let (store, state) = setup(false);
        let mut user = stored_user(&store, "alice01", Role::User);
        let token = access_token(&state, &user);
        let app = init_app!(state);

        user.is_active = false;
        store.put(user);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(error_message(res).await.contains("deactivated"));
    }

    #[actix_web::test]
    async fn test_pending_account_is_forbidden_when_gated() {
        let (store, state) = setup(true);
        let mut user = stored_user(&store, "alice01", Role::User);
        user.is_approved = false;
        store.put(user.clone());
        let app = init_app!(state);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", access_token(&state, &user))))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(error_message(res).await.contains("pending approval"));
    }

    #[actix_web::test]
    async fn test_role_requirement() {
        let (store, state) = setup(false);
        let user = stored_user(&store, "alice01", Role::User);
        let admin = stored_user(&store, "admin01", Role::Admin);
        let super_admin = stored_user(&store, "root001", Role::SuperAdmin);
        let app = init_app!(state);

        let cases = [
            (&user, StatusCode::FORBIDDEN),
            (&admin, StatusCode::OK),
            (&super_admin, StatusCode::OK),
        ];

        for (account, expected) in cases {
            let req = test::TestRequest::get()
                .uri("/admin")
                .insert_header(("Authorization", format!("Bearer {}", access_token(&state, account))))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), expected, "role: {}", account.role);
        }
    }

    #[actix_web::test]
    async fn test_embedded_role_is_trusted_until_refresh() {
        let (store, state) = setup(false);
        let mut admin = stored_user(&store, "admin01", Role::Admin);
        let token = access_token(&state, &admin);
        let app = init_app!(state);

        admin.role = Role::User;
        store.put(admin);

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
