//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 갱신을 담당합니다.
//!
//! 모든 발급/검증 연산에는 UTC epoch 초를 직접 받는 `_at` 변형이 있어
//! 만료 경계를 결정적으로 다룰 수 있습니다. 공개 연산은 `Utc::now()`로 이를 호출합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::entities::users::user::User,
    domain::token::{TokenClaims, TokenKind, TokenPair},
    errors::{AppError, ErrorContext, TokenError},
    repositories::users::UserStore,
};

/// `"Bearer "` 접두사
const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 비밀키와 수명 설정은 생성 시 한 번 받아 이후 변경되지 않으므로
/// `Arc<TokenService>`로 워커 간에 그대로 공유할 수 있습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// 설정으로부터 토큰 서비스 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 비밀키가 비어 있는 경우 (시작 시 치명적 오류)
    pub fn new(config: &JwtConfig) -> Result<Self, AppError> {
        if config.secret.is_empty() {
            return Err(AppError::ConfigError("JWT secret must not be empty".to_string()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 `now <= exp` 규칙으로 직접 판정합니다.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
        })
    }

    /// 설정된 액세스 토큰 수명
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// 설정된 리프레시 토큰 수명
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// `sub`, `username`, `role`, `kind=access`를 담습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access_token = token_service.issue_access_token(&user, token_service.access_ttl())?;
    /// ```
    pub fn issue_access_token(&self, user: &User, ttl: Duration) -> Result<String, AppError> {
        self.issue_access_token_at(user, ttl, Utc::now().timestamp())
    }

    pub fn issue_access_token_at(&self, user: &User, ttl: Duration, now: i64) -> Result<String, AppError> {
        let claims = TokenClaims {
            sub: user.id.clone(),
            username: Some(user.username.clone()),
            role: Some(user.role),
            kind: TokenKind::Access,
            iat: now,
            exp: now + ttl.num_seconds(),
        };

        self.sign(&claims)
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// 리프레시 토큰에는 `sub`와 시간 클레임만 담고 사용자명/역할은 넣지 않습니다.
    pub fn issue_refresh_token(&self, user: &User, ttl: Duration) -> Result<String, AppError> {
        self.issue_refresh_token_at(user, ttl, Utc::now().timestamp())
    }

    pub fn issue_refresh_token_at(&self, user: &User, ttl: Duration, now: i64) -> Result<String, AppError> {
        let claims = TokenClaims {
            sub: user.id.clone(),
            username: None,
            role: None,
            kind: TokenKind::Refresh,
            iat: now,
            exp: now + ttl.num_seconds(),
        };

        self.sign(&claims)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 둘 중 하나라도 실패하면 아무것도 반환하지 않습니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.issue_token_pair(&user, access_ttl, refresh_ttl)?;
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn issue_token_pair(
        &self,
        user: &User,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<TokenPair, AppError> {
        self.issue_token_pair_at(user, access_ttl, refresh_ttl, Utc::now().timestamp())
    }

    pub fn issue_token_pair_at(
        &self,
        user: &User,
        access_ttl: Duration,
        refresh_ttl: Duration,
        now: i64,
    ) -> Result<TokenPair, AppError> {
        let access_token = self.issue_access_token_at(user, access_ttl, now)?;
        let refresh_token = self.issue_refresh_token_at(user, refresh_ttl, now)?;

        Ok(TokenPair::new(access_token, refresh_token, access_ttl.num_seconds()))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 구조, 만료(`now > exp`이면 만료)를 확인합니다. 용도는 확인하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - 서명 불일치
    /// * `TokenError::Malformed` - 형식, 알고리즘, 필수 클레임 오류
    /// * `TokenError::Expired` - 만료
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.validate_token_at(token, Utc::now().timestamp())
    }

    pub fn validate_token_at(&self, token: &str, now: i64) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        if now > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// 액세스 토큰 검증
    ///
    /// # Errors
    ///
    /// `validate_token`의 에러와 더불어, 리프레시 토큰이면 `TokenError::WrongKind`
    pub fn validate_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.validate_access_token_at(token, Utc::now().timestamp())
    }

    pub fn validate_access_token_at(&self, token: &str, now: i64) -> Result<TokenClaims, TokenError> {
        self.validate_kind_at(token, TokenKind::Access, now)
    }

    /// 리프레시 토큰 검증
    pub fn validate_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.validate_refresh_token_at(token, Utc::now().timestamp())
    }

    pub fn validate_refresh_token_at(&self, token: &str, now: i64) -> Result<TokenClaims, TokenError> {
        self.validate_kind_at(token, TokenKind::Refresh, now)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// 사용자명과 역할은 리프레시 토큰이 아니라 저장소에서 다시 읽습니다.
    /// 따라서 역할 변경은 다음 갱신부터 반영됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenError` - 리프레시 토큰 검증 실패
    /// * `AppError::AuthenticationError` - 사용자가 없거나 비활성화된 경우
    /// * `AppError::DatabaseError` - 저장소 조회 실패
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
        access_ttl: Duration,
        store: &dyn UserStore,
    ) -> Result<String, AppError> {
        self.refresh_access_token_at(refresh_token, access_ttl, store, Utc::now().timestamp())
            .await
    }

    pub async fn refresh_access_token_at(
        &self,
        refresh_token: &str,
        access_ttl: Duration,
        store: &dyn UserStore,
        now: i64,
    ) -> Result<String, AppError> {
        let claims = self.validate_refresh_token_at(refresh_token, now)?;

        let user = store
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("user not found".to_string()))?;

        if !user.is_active {
            return Err(AppError::AuthenticationError("account is deactivated".to_string()));
        }

        self.issue_access_token_at(&user, access_ttl, now)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    /// 접두사는 대소문자를 구분합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedHeaderError` - 7자 미만, 접두사 없음, 접두사 뒤가 빈 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = TokenService::extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let claims = token_service.validate_access_token(token)?;
    /// ```
    pub fn extract_bearer_token(header_value: &str) -> Result<&str, AppError> {
        if header_value.len() < BEARER_PREFIX.len() {
            return Err(AppError::MalformedHeaderError(
                "authorization header is too short".to_string(),
            ));
        }

        let token = header_value.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
            AppError::MalformedHeaderError("authorization header must start with 'Bearer '".to_string())
        })?;

        if token.is_empty() {
            return Err(AppError::MalformedHeaderError("bearer token is empty".to_string()));
        }

        Ok(token)
    }

    fn validate_kind_at(&self, token: &str, expected: TokenKind, now: i64) -> Result<TokenClaims, TokenError> {
        let claims = self.validate_token_at(token, now)?;

        if claims.kind != expected {
            return Err(TokenError::WrongKind { expected, found: claims.kind });
        }

        Ok(claims)
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }
}
