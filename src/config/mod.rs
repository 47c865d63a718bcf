//! # Configuration Module
//!
//! 애플리케이션 설정을 시작 시점에 한 번 읽어 불변 [`AppConfig`]로 묶습니다.
//! 이후 각 서비스는 생성자를 통해 필요한 부분만 전달받습니다.
//!
//! ```text
//! .env.{dev,prod} ─► dotenv ─► std::env ─► AppConfig::from_env()
//!                                              │
//!          ┌───────────────┬───────────────┬───┴───────────┬──────────────┐
//!          ▼               ▼               ▼               ▼              ▼
//!     ServerConfig   DatabaseConfig    JwtConfig     PasswordConfig   AccountConfig/SeedConfig
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::errors::AppError;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub account: AccountConfig,
    pub seed: SeedConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// 필수 값이 없거나 형식이 잘못된 경우 `AppError::ConfigError`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수에서 설정을 읽습니다.
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, AppError> {
        let environment = Environment::from_lookup(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(lookup)?,
            database: DatabaseConfig::from_lookup(lookup),
            jwt: JwtConfig::from_lookup(lookup, environment)?,
            password: PasswordConfig::from_lookup(lookup, environment)?,
            account: AccountConfig::from_lookup(lookup)?,
            seed: SeedConfig::from_lookup(lookup),
            rate_limit: RateLimitConfig::from_lookup(lookup)?,
            cors: CorsConfig::from_lookup(lookup),
        })
    }
}

#[cfg(test)]
impl AppConfig {
    /// 테스트용 설정 (bcrypt cost 4, 고정 JWT 비밀키, 시드 키 `test-seed-key`)
    pub fn for_tests(require_approval: bool) -> Self {
        let approval = if require_approval { "true" } else { "false" };
        let lookup = |key: &str| match key {
            "ENVIRONMENT" => Some("test".to_string()),
            "JWT_SECRET" => Some("test-jwt-secret".to_string()),
            "REQUIRE_APPROVAL" => Some(approval.to_string()),
            "SUPER_ADMIN_SEED_KEY" => Some("test-seed-key".to_string()),
            _ => None,
        };
        Self::from_lookup(&lookup).expect("test configuration should parse")
    }
}
