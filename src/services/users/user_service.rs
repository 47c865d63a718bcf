//! 사용자 서비스 구현
//!
//! 회원가입, 로그인, 토큰 갱신, 관리자 사용자 관리, 시드 부트스트랩을 담당합니다.
//! 인증 코어(`PasswordService`, `TokenService`, `AuthorizationPolicy`)를
//! [`UserStore`] 위에서 조합하며, 로그는 이 계층에서 남깁니다.

use std::sync::Arc;
use actix_web::web;
use futures_util::lock::Mutex;
use crate::{
    config::{AccountConfig, SeedConfig},
    domain::{
        auth::{AuthenticatedUser, Role},
        dto::users::{
            request::{CreateUserRequest, LoginRequest, ResetSuperAdminRequest, SeedSuperAdminRequest, SignupRequest},
            response::{AuthResponse, PendingUsersResponse, RefreshResponse, RejectedUserResponse, UserResponse},
        },
        entities::users::user::User,
        token::TokenPair,
    },
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
    services::auth::{AuthorizationPolicy, PasswordService, TokenService},
    utils::string_utils::{constant_time_eq, looks_like_email, normalize_email, normalize_username, validate_username},
};

/// bcrypt 같은 CPU 바운드 작업을 블로킹 스레드 풀에서 실행합니다.
async fn run_blocking<T, F>(task: F) -> AppResult<T>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    web::block(task).await.context("블로킹 작업 실패")?
}

pub struct UserService {
    store: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    passwords: PasswordService,
    account: AccountConfig,
    seed: SeedConfig,
    /// 시드 생성의 존재 확인과 삽입을 한 프로세스 안에서 직렬화합니다.
    seed_lock: Mutex<()>,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        tokens: Arc<TokenService>,
        passwords: PasswordService,
        account: AccountConfig,
        seed: SeedConfig,
    ) -> Self {
        Self { store, tokens, passwords, account, seed, seed_lock: Mutex::new(()) }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    pub fn tokens(&self) -> &TokenService {
        self.tokens.as_ref()
    }

    pub fn account(&self) -> AccountConfig {
        self.account
    }

    /// 공개 회원가입
    ///
    /// 항상 `user` 역할, 활성 + 미승인 상태로 생성됩니다.
    /// 승인 게이트가 꺼져 있으면 바로 토큰 쌍을 발급하고, 켜져 있으면 사용자 정보만 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRoleError` - 알 수 없는 역할 문자열
    /// * `AppError::ValidationError` - `user` 이외의 역할 요청, 짧은 비밀번호, `@`가 포함된 사용자명
    /// * `AppError::ConflictError` - 사용자명 또는 이메일 중복
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AppError> {
        if let Some(requested) = request.role.as_deref() {
            let role = AuthorizationPolicy::validate_role_string(requested)?;
            if role != Role::User {
                return Err(AppError::ValidationError(
                    "public signup can only create user accounts".to_string(),
                ));
            }
        }

        let username = Self::checked_username(&request.username)?;
        let email = normalize_email(&request.email);
        self.ensure_unique(&username, &email).await?;

        let user = User::new(username, email, Role::User);
        let user = self.with_password(user, request.password).await?;

        let user = self.store.insert(user).await?;
        log::info!("회원가입 완료: {} (ID: {})", user.username, user.id);

        if self.account.require_approval {
            log::info!("승인 대기 등록: {}", user.username);
            return Ok(AuthResponse::without_tokens(user));
        }

        let tokens = self.issue_tokens(&user)?;
        Ok(AuthResponse::with_tokens(user, tokens))
    }

    /// 사용자명 또는 이메일로 로그인
    ///
    /// 존재하지 않는 사용자와 틀린 비밀번호는 같은 비용, 같은 에러로 처리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 자격 증명, 비활성 계정
    /// * `AppError::AuthorizationError` - 승인 게이트가 켜져 있고 미승인인 계정
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let identifier = request.username.trim().to_string();

        let found = if looks_like_email(&identifier) {
            self.store.find_by_email(&normalize_email(&identifier)).await?
        } else {
            self.store.find_by_username(&identifier).await?
        };

        let Some(user) = found else {
            let passwords = self.passwords;
            let password = request.password;
            let error = run_blocking(move || Ok(passwords.verify_against_dummy(&password))).await?;
            log::warn!("로그인 실패 - 존재하지 않는 사용자: {}", identifier);
            return Err(error);
        };

        let mut user = self.verify(user, request.password).await.inspect_err(|_| {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", identifier);
        })?;

        if !user.is_active {
            log::warn!("로그인 거부 - 비활성 계정: {}", user.username);
            return Err(AppError::AuthenticationError("account is deactivated".to_string()));
        }

        if self.account.require_approval && !user.is_approved {
            log::warn!("로그인 거부 - 승인 대기 계정: {}", user.username);
            return Err(AppError::AuthorizationError("account is pending approval".to_string()));
        }

        self.store.touch_last_login(&user.id).await?;
        user.last_login_at = Some(mongodb::bson::DateTime::now());

        let tokens = self.issue_tokens(&user)?;
        log::info!("로그인 성공: {} (ID: {})", user.username, user.id);

        Ok(AuthResponse::with_tokens(user, tokens))
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, AppError> {
        let access_ttl = self.tokens.access_ttl();
        let access_token = self
            .tokens
            .refresh_access_token(refresh_token, access_ttl, self.store.as_ref())
            .await
            .inspect_err(|e| log::warn!("토큰 갱신 실패: {}", e))?;

        log::info!("토큰 갱신 성공");

        Ok(RefreshResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: access_ttl.num_seconds(),
        })
    }

    /// 현재 사용자 프로필
    pub async fn get_profile(&self, user_id: &str) -> Result<UserResponse, AppError> {
        let user = self.find_existing(user_id).await?;
        Ok(UserResponse::from(user))
    }

    /// 관리자가 역할을 지정해 계정 생성
    ///
    /// 관리자가 만든 계정은 생성자 ID로 승인된 상태입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 관리 권한 없음, 부여할 수 없는 역할
    /// * `AppError::InvalidRoleError` - 알 수 없는 역할 문자열
    /// * `AppError::ConflictError` - 중복
    pub async fn create_user(
        &self,
        actor: &AuthenticatedUser,
        request: CreateUserRequest,
    ) -> Result<UserResponse, AppError> {
        Self::ensure_can_manage(actor, "insufficient permissions to create users")?;

        let role = AuthorizationPolicy::validate_role_string(&request.role)?;
        if !AuthorizationPolicy::can_assign_role(actor.role, role) {
            return Err(AppError::AuthorizationError(format!(
                "only super admins can create {} accounts",
                role
            )));
        }

        let username = Self::checked_username(&request.username)?;
        let email = normalize_email(&request.email);
        self.ensure_unique(&username, &email).await?;

        let user = User::new(username, email, role);
        let mut user = self.with_password(user, request.password).await?;
        user.mark_approved(Some(&actor.user_id));

        let user = self.store.insert(user).await?;
        log::info!(
            "관리자 계정 생성: {} ({}) by {}",
            user.username,
            user.role,
            actor.username
        );

        Ok(UserResponse::from(user))
    }

    /// 대상 계정의 역할 변경
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 관리 권한 없음, 자기 자신, 부여할 수 없는 역할
    /// * `AppError::InvalidRoleError` - 알 수 없는 역할 문자열
    /// * `AppError::NotFound` - 대상 없음
    pub async fn update_role(
        &self,
        actor: &AuthenticatedUser,
        target_id: &str,
        requested_role: &str,
    ) -> Result<UserResponse, AppError> {
        Self::ensure_can_manage(actor, "insufficient permissions")?;

        let role = AuthorizationPolicy::validate_role_string(requested_role)?;
        let target = self.find_existing(target_id).await?;

        if AuthorizationPolicy::is_self_modification(&actor.user_id, &target.id) {
            return Err(AppError::AuthorizationError("cannot modify your own role".to_string()));
        }

        if !AuthorizationPolicy::can_assign_role(actor.role, role) {
            return Err(AppError::AuthorizationError(format!(
                "only super admins can assign {} role",
                role
            )));
        }

        let updated = self
            .store
            .update_role(&target.id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        log::info!(
            "역할 변경: {} {} -> {} by {}",
            updated.username,
            target.role,
            updated.role,
            actor.username
        );

        Ok(UserResponse::from(updated))
    }

    /// 승인 대기 목록
    pub async fn pending_users(&self, actor: &AuthenticatedUser) -> Result<PendingUsersResponse, AppError> {
        Self::ensure_can_manage(actor, "insufficient permissions")?;

        let pending = self.store.find_pending().await?;
        log::debug!("승인 대기 사용자 {}명 조회", pending.len());

        Ok(PendingUsersResponse::from(pending))
    }

    /// 가입 승인
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이미 승인됨, 일반 사용자가 아님
    pub async fn approve_user(
        &self,
        actor: &AuthenticatedUser,
        target_id: &str,
    ) -> Result<UserResponse, AppError> {
        Self::ensure_can_manage(actor, "insufficient permissions to approve users")?;

        let mut target = self.find_existing(target_id).await?;

        if target.is_approved {
            return Err(AppError::ValidationError("user is already approved".to_string()));
        }

        if target.role != Role::User {
            return Err(AppError::ValidationError("only regular users can be approved".to_string()));
        }

        target.approve(&actor.user_id);

        let approved = self
            .store
            .save_approval(&target)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        log::info!("가입 승인: {} by {}", approved.username, actor.username);

        Ok(UserResponse::from(approved))
    }

    /// 가입 거절 (계정 삭제)
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이미 승인된 계정, 자기 자신
    pub async fn reject_user(
        &self,
        actor: &AuthenticatedUser,
        target_id: &str,
    ) -> Result<RejectedUserResponse, AppError> {
        Self::ensure_can_manage(actor, "insufficient permissions")?;

        let target = self.find_existing(target_id).await?;

        if target.is_approved {
            return Err(AppError::ValidationError("cannot reject an approved user".to_string()));
        }

        if AuthorizationPolicy::is_self_modification(&actor.user_id, &target.id) {
            return Err(AppError::ValidationError("cannot reject your own account".to_string()));
        }

        if !self.store.delete(&target.id).await? {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        log::info!("가입 거절 및 삭제: {} by {}", target.username, actor.username);

        Ok(RejectedUserResponse {
            rejected_user_id: target.id,
            rejected_username: target.username,
        })
    }

    /// 최초 super admin 생성 (시드)
    ///
    /// 존재 확인과 삽입은 `seed_lock`으로 직렬화됩니다. 여러 인스턴스가 동시에
    /// 시드 요청을 받는 배포는 보호하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 시드 키 불일치 또는 미설정
    /// * `AppError::ConflictError` - super admin이 이미 있거나 중복
    pub async fn seed_super_admin(&self, request: SeedSuperAdminRequest) -> Result<UserResponse, AppError> {
        self.verify_seed_key(&request.secret_key)?;

        let _guard = self.seed_lock.lock().await;

        if let Some(existing) = self.store.find_super_admin().await? {
            log::warn!("시드 거부 - super admin 이미 존재: {}", existing.username);
            return Err(AppError::ConflictError("super admin already exists".to_string()));
        }

        let username = Self::checked_username(&request.username)?;
        let email = normalize_email(&request.email);
        self.ensure_unique(&username, &email).await?;

        let user = User::new(username, email, Role::SuperAdmin);
        let mut user = self.with_password(user, request.password).await?;
        user.mark_approved(None);

        let user = self.store.insert(user).await?;
        log::warn!("super admin 시드 생성: {} (ID: {})", user.username, user.id);

        Ok(UserResponse::from(user))
    }

    /// 기존 계정을 super admin으로 승격 (시드)
    ///
    /// 승인 처리와 역할 변경은 한 번의 쓰기로 저장됩니다.
    pub async fn promote_to_super_admin(
        &self,
        request: ResetSuperAdminRequest,
    ) -> Result<UserResponse, AppError> {
        self.verify_seed_key(&request.secret_key)?;

        let mut user = self.find_existing(&request.user_id).await?;

        if !user.is_approved {
            user.mark_approved(None);
        }
        user.change_role(Role::SuperAdmin);

        let promoted = self
            .store
            .save_approval(&user)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        log::warn!("super admin 승격: {} (ID: {})", promoted.username, promoted.id);

        Ok(UserResponse::from(promoted))
    }

    fn verify_seed_key(&self, provided: &str) -> Result<(), AppError> {
        match self.seed.seed_key.as_deref() {
            Some(expected) if constant_time_eq(expected, provided) => Ok(()),
            Some(_) => {
                log::warn!("시드 요청 거부 - 잘못된 비밀키");
                Err(AppError::AuthorizationError("invalid secret key".to_string()))
            }
            None => {
                log::warn!("시드 요청 거부 - SUPER_ADMIN_SEED_KEY 미설정");
                Err(AppError::AuthorizationError("seed routes are disabled".to_string()))
            }
        }
    }

    fn checked_username(raw: &str) -> AppResult<String> {
        let username = normalize_username(raw);
        validate_username(&username).map_err(|e| AppError::ValidationError(e.to_string()))?;
        Ok(username)
    }

    fn ensure_can_manage(actor: &AuthenticatedUser, message: &str) -> Result<(), AppError> {
        if AuthorizationPolicy::can_manage_users(actor.role) {
            Ok(())
        } else {
            Err(AppError::AuthorizationError(message.to_string()))
        }
    }

    async fn ensure_unique(&self, username: &str, email: &str) -> Result<(), AppError> {
        if self.store.find_by_username_or_email(username, email).await?.is_some() {
            return Err(AppError::ConflictError("user already exists".to_string()));
        }
        Ok(())
    }

    async fn find_existing(&self, id: &str) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    fn issue_tokens(&self, user: &User) -> AppResult<TokenPair> {
        self.tokens
            .issue_token_pair(user, self.tokens.access_ttl(), self.tokens.refresh_ttl())
    }

    async fn with_password(&self, mut user: User, plaintext: String) -> AppResult<User> {
        let passwords = self.passwords;
        run_blocking(move || {
            passwords.set_password(&mut user, &plaintext)?;
            Ok(user)
        })
        .await
    }

    async fn verify(&self, user: User, plaintext: String) -> Result<User, AppError> {
        let passwords = self.passwords;
        run_blocking(move || passwords.verify_password(&user, &plaintext).map(|_| user)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtConfig, PasswordConfig};
    use crate::repositories::users::memory_store::MemoryUserStore;

    struct Fixture {
        store: Arc<MemoryUserStore>,
        service: UserService,
    }

    fn fixture(require_approval: bool) -> Fixture {
        let store = Arc::new(MemoryUserStore::new());
        let tokens = Arc::new(TokenService::new(&JwtConfig::with_secret("test-secret")).unwrap());
        let service = UserService::new(
            store.clone(),
            tokens,
            PasswordService::new(PasswordConfig { bcrypt_cost: 4 }),
            AccountConfig { require_approval },
            SeedConfig { seed_key: Some("seed-key".to_string()) },
        );
        Fixture { store, service }
    }

    fn signup_request(username: &str, email: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role: None,
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest { username: username.to_string(), password: password.to_string() }
    }

    fn actor(user: &User) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }

    fn stored_user(fx: &Fixture, username: &str, role: Role, approved: bool) -> User {
        let mut user = User::new(username.to_string(), format!("{}@example.com", username), role);
        user.password_hash = bcrypt::hash("password123", 4).unwrap();
        user.is_approved = approved;
        fx.store.put(user.clone());
        user
    }

    #[actix_web::test]
    async fn test_signup_then_login() {
        let fx = fixture(false);

        let signup = fx.service.signup(signup_request("alice01", "Alice@Example.com")).await.unwrap();
        assert!(signup.access_token.is_some());
        assert_eq!(signup.user.role, Role::User);
        assert_eq!(signup.user.email, "alice@example.com");
        assert!(!signup.user.is_approved);

        let login = fx.service.login(login_request("alice01", "password123")).await.unwrap();
        let claims = fx
            .service
            .tokens()
            .validate_access_token(login.access_token.as_deref().unwrap())
            .unwrap();
        assert_eq!(claims.sub, signup.user.id);
        assert_eq!(claims.role, Some(Role::User));
        assert!(fx.store.get(&signup.user.id).unwrap().last_login_at.is_some());

        let by_email = fx.service.login(login_request("alice@example.com", "password123")).await;
        assert!(by_email.is_ok());
    }

    #[actix_web::test]
    async fn test_login_errors_are_indistinguishable() {
        let fx = fixture(false);
        fx.service.signup(signup_request("alice01", "alice@example.com")).await.unwrap();

        let wrong_password = fx.service.login(login_request("alice01", "wrong-password")).await;
        let unknown_user = fx.service.login(login_request("nobody01", "password123")).await;

        match (wrong_password, unknown_user) {
            (Err(AppError::AuthenticationError(a)), Err(AppError::AuthenticationError(b))) => {
                assert_eq!(a, b);
            }
            other => panic!("unexpected results: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_signup_rejects_elevated_or_unknown_role() {
        let fx = fixture(false);

        let mut admin = signup_request("mallory1", "mallory@example.com");
        admin.role = Some("admin".to_string());
        assert!(matches!(fx.service.signup(admin).await, Err(AppError::ValidationError(_))));

        let mut unknown = signup_request("mallory1", "mallory@example.com");
        unknown.role = Some("root".to_string());
        assert!(matches!(fx.service.signup(unknown).await, Err(AppError::InvalidRoleError(_))));

        let mut explicit_user = signup_request("mallory1", "mallory@example.com");
        explicit_user.role = Some("user".to_string());
        assert!(fx.service.signup(explicit_user).await.is_ok());
    }

    #[actix_web::test]
    async fn test_signup_duplicate_is_conflict() {
        let fx = fixture(false);
        fx.service.signup(signup_request("alice01", "alice@example.com")).await.unwrap();

        let result = fx.service.signup(signup_request("alice01", "other@example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_approval_gate() {
        let fx = fixture(true);

        let signup = fx.service.signup(signup_request("alice01", "alice@example.com")).await.unwrap();
        assert!(signup.access_token.is_none());

        let blocked = fx.service.login(login_request("alice01", "password123")).await;
        assert!(matches!(blocked, Err(AppError::AuthorizationError(_))));

        let admin = stored_user(&fx, "admin01", Role::Admin, true);
        fx.service.approve_user(&actor(&admin), &signup.user.id).await.unwrap();

        assert!(fx.service.login(login_request("alice01", "password123")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_inactive_user_cannot_login() {
        let fx = fixture(false);
        let mut user = stored_user(&fx, "alice01", Role::User, true);
        user.is_active = false;
        fx.store.put(user);

        let result = fx.service.login(login_request("alice01", "password123")).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(msg)) if msg.contains("deactivated")));
    }

    #[actix_web::test]
    async fn test_admin_creates_users_within_policy() {
        let fx = fixture(false);
        let admin = stored_user(&fx, "admin01", Role::Admin, true);
        let super_admin = stored_user(&fx, "root001", Role::SuperAdmin, true);

        let request = |role: &str, name: &str| CreateUserRequest {
            username: name.to_string(),
            email: format!("{}@example.com", name),
            password: "password123".to_string(),
            role: role.to_string(),
        };

        let created = fx.service.create_user(&actor(&admin), request("user", "staff01")).await.unwrap();
        assert!(created.is_approved);
        assert_eq!(created.approved_by.as_deref(), Some(admin.id.as_str()));

        let denied = fx.service.create_user(&actor(&admin), request("admin", "staff02")).await;
        assert!(matches!(denied, Err(AppError::AuthorizationError(_))));

        let allowed = fx.service.create_user(&actor(&super_admin), request("admin", "staff02")).await;
        assert_eq!(allowed.unwrap().role, Role::Admin);

        let invalid = fx.service.create_user(&actor(&super_admin), request("owner", "staff03")).await;
        assert!(matches!(invalid, Err(AppError::InvalidRoleError(_))));

        let user = stored_user(&fx, "plain01", Role::User, true);
        let forbidden = fx.service.create_user(&actor(&user), request("user", "staff04")).await;
        assert!(matches!(forbidden, Err(AppError::AuthorizationError(_))));
    }

    #[actix_web::test]
    async fn test_update_role_rules() {
        let fx = fixture(false);
        let admin = stored_user(&fx, "admin01", Role::Admin, true);
        let super_admin = stored_user(&fx, "root001", Role::SuperAdmin, true);
        let target = stored_user(&fx, "plain01", Role::User, true);

        let own = fx.service.update_role(&actor(&admin), &admin.id, "user").await;
        assert!(matches!(own, Err(AppError::AuthorizationError(_))));

        let escalate = fx.service.update_role(&actor(&admin), &target.id, "admin").await;
        assert!(matches!(escalate, Err(AppError::AuthorizationError(_))));

        let promoted = fx.service.update_role(&actor(&super_admin), &target.id, "admin").await.unwrap();
        assert_eq!(promoted.role, Role::Admin);

        let missing = fx.service.update_role(&actor(&super_admin), "missing-id", "user").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_pending_approve_and_reject() {
        let fx = fixture(true);
        let admin = stored_user(&fx, "admin01", Role::Admin, true);
        let first = stored_user(&fx, "pending1", Role::User, false);
        let second = stored_user(&fx, "pending2", Role::User, false);

        let pending = fx.service.pending_users(&actor(&admin)).await.unwrap();
        assert_eq!(pending.count, 2);

        let approved = fx.service.approve_user(&actor(&admin), &first.id).await.unwrap();
        assert!(approved.is_approved);
        assert!(approved.approved_at.is_some());

        let again = fx.service.approve_user(&actor(&admin), &first.id).await;
        assert!(matches!(again, Err(AppError::ValidationError(_))));

        let reject_approved = fx.service.reject_user(&actor(&admin), &first.id).await;
        assert!(matches!(reject_approved, Err(AppError::ValidationError(_))));

        let rejected = fx.service.reject_user(&actor(&admin), &second.id).await.unwrap();
        assert_eq!(rejected.rejected_username, "pending2");
        assert!(fx.store.get(&second.id).is_none());
    }

    #[actix_web::test]
    async fn test_seed_super_admin_flow() {
        let fx = fixture(false);
        let seed = |key: &str, name: &str| SeedSuperAdminRequest {
            secret_key: key.to_string(),
            username: name.to_string(),
            email: format!("{}@example.com", name),
            password: "password123".to_string(),
        };

        let wrong_key = fx.service.seed_super_admin(seed("nope", "root001")).await;
        assert!(matches!(wrong_key, Err(AppError::AuthorizationError(_))));

        let created = fx.service.seed_super_admin(seed("seed-key", "root001")).await.unwrap();
        assert_eq!(created.role, Role::SuperAdmin);
        assert!(created.is_approved);

        let second = fx.service.seed_super_admin(seed("seed-key", "root002")).await;
        assert!(matches!(second, Err(AppError::ConflictError(_))));

        let user = stored_user(&fx, "plain01", Role::User, false);
        let promoted = fx
            .service
            .promote_to_super_admin(ResetSuperAdminRequest {
                secret_key: "seed-key".to_string(),
                user_id: user.id.clone(),
            })
            .await
            .unwrap();
        assert_eq!(promoted.role, Role::SuperAdmin);
        assert!(promoted.is_approved);
        assert_eq!(fx.store.len(), 2);
    }

    #[actix_web::test]
    async fn test_username_with_at_sign_is_rejected() {
        let fx = fixture(false);

        let signup = fx.service.signup(signup_request("bob@work", "bob@example.com")).await;
        assert!(matches!(signup, Err(AppError::ValidationError(_))));

        let admin = stored_user(&fx, "admin01", Role::Admin, true);
        let created = fx
            .service
            .create_user(&actor(&admin), CreateUserRequest {
                username: "carol@ops".to_string(),
                email: "carol@example.com".to_string(),
                password: "password123".to_string(),
                role: "user".to_string(),
            })
            .await;
        assert!(matches!(created, Err(AppError::ValidationError(_))));
        assert_eq!(fx.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_self_reject_and_non_user_approval_are_invalid() {
        let fx = fixture(false);
        let root = stored_user(&fx, "root001", Role::SuperAdmin, true);
        let unapproved_admin = stored_user(&fx, "admin02", Role::Admin, false);

        let self_reject = fx
            .service
            .reject_user(&actor(&unapproved_admin), &unapproved_admin.id)
            .await;
        assert!(matches!(self_reject, Err(AppError::ValidationError(_))));
        assert!(fx.store.get(&unapproved_admin.id).is_some());

        let approve_admin = fx.service.approve_user(&actor(&root), &unapproved_admin.id).await;
        assert!(matches!(approve_admin, Err(AppError::ValidationError(_))));
        assert!(!fx.store.get(&unapproved_admin.id).unwrap().is_approved);
    }

    #[actix_web::test]
    async fn test_promotion_saves_role_and_approval_together() {
        let fx = fixture(false);
        let user = stored_user(&fx, "plain02", Role::User, false);
        let before = user.updated_at.timestamp_millis();

        fx.service
            .promote_to_super_admin(ResetSuperAdminRequest {
                secret_key: "seed-key".to_string(),
                user_id: user.id.clone(),
            })
            .await
            .unwrap();

        let stored = fx.store.get(&user.id).unwrap();
        assert_eq!(stored.role, Role::SuperAdmin);
        assert!(stored.is_approved);
        assert!(stored.approved_at.is_some());
        assert!(stored.updated_at.timestamp_millis() >= before);

        let missing = fx
            .service
            .promote_to_super_admin(ResetSuperAdminRequest {
                secret_key: "seed-key".to_string(),
                user_id: "missing".to_string(),
            })
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_concurrent_seed_creates_one_super_admin() {
        let fx = fixture(false);
        let seed = |name: &str| SeedSuperAdminRequest {
            secret_key: "seed-key".to_string(),
            username: name.to_string(),
            email: format!("{}@example.com", name),
            password: "password123".to_string(),
        };

        let (first, second) = futures_util::join!(
            fx.service.seed_super_admin(seed("root001")),
            fx.service.seed_super_admin(seed("root002"))
        );

        assert_eq!([first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert!(matches!(
            (first, second),
            (Ok(_), Err(AppError::ConflictError(_))) | (Err(AppError::ConflictError(_)), Ok(_))
        ));
        assert_eq!(fx.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_refresh_issues_new_access_token() {
        let fx = fixture(false);
        let signup = fx.service.signup(signup_request("alice01", "alice@example.com")).await.unwrap();

        let refreshed = fx.service.refresh(signup.refresh_token.as_deref().unwrap()).await.unwrap();
        let claims = fx.service.tokens().validate_access_token(&refreshed.access_token).unwrap();

        assert_eq!(claims.sub, signup.user.id);
        assert_eq!(refreshed.expires_in, 900);

        let with_access = fx.service.refresh(signup.access_token.as_deref().unwrap()).await;
        assert!(matches!(with_access, Err(AppError::TokenError(_))));
    }
}
