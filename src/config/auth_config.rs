//! # Authentication Configuration Module
//!
//! JWT 토큰, 계정 승인 정책, 시드 비밀키 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION="15m"
//! export JWT_REFRESH_EXPIRATION="7d"
//! ```
//!
//! 기간 값은 `humantime` 형식(`30s`, `15m`, `1h 30m`, `7d`)을 사용합니다.
//!
//! ### 계정/시드 설정
//! ```bash
//! export REQUIRE_APPROVAL="true"
//! export SUPER_ADMIN_SEED_KEY="long-random-string"
//! ```

use chrono::Duration;
use crate::config::data_config::{non_empty, EnvLookup, Environment};
use crate::errors::AppError;

/// `JWT_SECRET`이 없을 때 개발/테스트 환경에서만 사용하는 키
const DEVELOPMENT_JWT_SECRET: &str = "development-only-jwt-secret-change-me";

/// JWT 토큰 설정
///
/// 서명 비밀키와 토큰 수명을 담는 불변 설정입니다.
/// `TokenService` 생성 시 한 번 전달되며 요청 처리 중에는 다시 읽지 않습니다.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    /// HS256 서명 비밀키
    pub secret: String,
    /// 액세스 토큰 수명 (기본 15분)
    pub access_ttl: Duration,
    /// 리프레시 토큰 수명 (기본 7일)
    pub refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl JwtConfig {
    pub fn default_access_ttl() -> Duration {
        Duration::minutes(15)
    }

    pub fn default_refresh_ttl() -> Duration {
        Duration::days(7)
    }

    /// 주어진 비밀키와 기본 수명으로 설정을 만듭니다.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_ttl: Self::default_access_ttl(),
            refresh_ttl: Self::default_refresh_ttl(),
        }
    }

    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    ///
    /// # Errors
    ///
    /// * 프로덕션에서 `JWT_SECRET`이 비어 있는 경우
    /// * 기간 값이 `humantime` 형식이 아니거나 0 이하인 경우
    pub fn from_lookup(lookup: EnvLookup<'_>, env: Environment) -> Result<Self, AppError> {
        let secret = match non_empty(lookup, "JWT_SECRET") {
            Some(secret) => secret,
            None if env.is_production() => {
                return Err(AppError::ConfigError(
                    "JWT_SECRET must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("JWT_SECRET not set, using development default (not secure for production!)");
                DEVELOPMENT_JWT_SECRET.to_string()
            }
        };

        let access_ttl = parse_ttl(lookup, "JWT_ACCESS_EXPIRATION", Self::default_access_ttl())?;
        let refresh_ttl = parse_ttl(lookup, "JWT_REFRESH_EXPIRATION", Self::default_refresh_ttl())?;

        Ok(Self { secret, access_ttl, refresh_ttl })
    }
}

/// `humantime` 형식의 기간 값을 파싱합니다.
fn parse_ttl(lookup: EnvLookup<'_>, key: &str, default: Duration) -> Result<Duration, AppError> {
    let Some(raw) = non_empty(lookup, key) else {
        return Ok(default);
    };

    let parsed = humantime::parse_duration(&raw)
        .map_err(|e| AppError::ConfigError(format!("{} 값이 올바르지 않습니다 ({}): {}", key, raw, e)))?;

    let ttl = Duration::from_std(parsed)
        .map_err(|e| AppError::ConfigError(format!("{} 값이 너무 큽니다 ({}): {}", key, raw, e)))?;

    if ttl <= Duration::zero() {
        return Err(AppError::ConfigError(format!("{}는 0보다 커야 합니다", key)));
    }

    Ok(ttl)
}

/// 계정 정책 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountConfig {
    /// 활성화하면 승인되지 않은 계정은 로그인과 인증 요청이 거부됩니다.
    pub require_approval: bool,
}

impl AccountConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, AppError> {
        let require_approval = match non_empty(lookup, "REQUIRE_APPROVAL") {
            None => false,
            Some(raw) => match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(AppError::ConfigError(format!(
                        "REQUIRE_APPROVAL 값이 올바르지 않습니다: {}",
                        raw
                    )));
                }
            },
        };

        Ok(Self { require_approval })
    }
}

/// 숨겨진 시드 라우트용 설정
///
/// 키가 설정되지 않으면 시드 라우트는 항상 거부됩니다.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SeedConfig {
    pub seed_key: Option<String>,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("seed_key", &self.seed_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl SeedConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            seed_key: non_empty(lookup, "SUPER_ADMIN_SEED_KEY"),
        }
    }
}
