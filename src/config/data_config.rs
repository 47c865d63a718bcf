//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 데이터베이스, 패스워드 해싱, 요청 제한, CORS 설정을 관리합니다.
//! 모든 설정은 시작 시점에 한 번 읽혀 불변 값으로 전달됩니다.

use crate::errors::AppError;

/// 환경 변수 조회 함수 타입
///
/// 운영에서는 `std::env::var`, 테스트에서는 `HashMap` 조회를 넘깁니다.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 값이 비어 있지 않은 환경 변수만 반환합니다.
pub(crate) fn non_empty(lookup: EnvLookup<'_>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 숫자형 환경 변수를 파싱합니다. 값이 없으면 `default`, 형식이 틀리면 `ConfigError`.
pub(crate) fn parse_or<T>(lookup: EnvLookup<'_>, key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| AppError::ConfigError(format!("{} 값이 올바르지 않습니다 ({}): {}", key, raw, e))),
        None => Ok(default),
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        non_empty(lookup, "ENVIRONMENT")
            .map(|value| Self::from_name(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// bcrypt cost (4-31)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// bcrypt가 허용하는 cost 범위
    pub const COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

    /// `BCRYPT_COST`를 읽습니다. 없으면 환경별 기본값을 사용합니다.
    ///
    /// # Errors
    ///
    /// 숫자가 아니거나 4-31 범위를 벗어나면 `ConfigError`
    pub fn from_lookup(lookup: EnvLookup<'_>, env: Environment) -> Result<Self, AppError> {
        let bcrypt_cost = parse_or(lookup, "BCRYPT_COST", Self::bcrypt_cost_for_env(env))?;

        if !Self::COST_RANGE.contains(&bcrypt_cost) {
            return Err(AppError::ConfigError(format!(
                "BCRYPT_COST는 4-31 사이여야 합니다: {}",
                bcrypt_cost
            )));
        }

        Ok(Self { bcrypt_cost })
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: `bcrypt::DEFAULT_COST`
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => bcrypt::DEFAULT_COST,
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: bcrypt::DEFAULT_COST }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 기본값: "0.0.0.0"
    pub host: String,
    /// 기본값: 8080
    pub port: u16,
}

impl ServerConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, AppError> {
        Ok(Self {
            host: non_empty(lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 8080)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            uri: non_empty(lookup, "MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: non_empty(lookup, "DATABASE_NAME")
                .unwrap_or_else(|| "admin_auth".to_string()),
        }
    }
}

/// 요청 제한(rate limit) 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, AppError> {
        let config = Self {
            per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 10)?,
            burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 20)?,
        };

        if config.per_second == 0 || config.burst_size == 0 {
            return Err(AppError::ConfigError(
                "RATE_LIMIT_PER_SECOND와 RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다".to_string(),
            ));
        }

        Ok(config)
    }
}

/// CORS 허용 Origin 설정
///
/// `CORS_ALLOWED_ORIGINS`는 쉼표로 구분합니다. `*`이면 모든 Origin을 허용합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let allowed_origins = match non_empty(lookup, "CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
