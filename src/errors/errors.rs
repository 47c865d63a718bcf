//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError`, `InvalidRoleError` | 400 Bad Request |
//! | `AuthenticationError`, `TokenError`, `MalformedHeaderError` | 401 Unauthorized |
//! | `AuthorizationError` | 403 Forbidden |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `DatabaseError`, `ConfigError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn ensure_password(plaintext: &str) -> Result<(), AppError> {
//!     if plaintext.len() < 8 {
//!         return Err(AppError::ValidationError("비밀번호는 최소 8자 이상이어야 합니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;
use crate::domain::token::TokenKind;

/// JWT 토큰 검증 실패 사유
///
/// 만료, 변조, 형식 오류, 용도 불일치를 구분합니다.
/// 호출자는 재인증을 요구하거나, 액세스 토큰의 경우 리프레시를 시도해야 합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// `now > exp`
    #[error("토큰이 만료되었습니다")]
    Expired,

    /// 서명 검증 실패
    #[error("토큰 서명이 유효하지 않습니다")]
    InvalidSignature,

    /// 구조적으로 잘못된 토큰 (base64, JSON, 알고리즘, 필수 클레임)
    #[error("잘못된 형식의 토큰입니다: {0}")]
    Malformed(String),

    /// 액세스 토큰 자리에 리프레시 토큰이 오는 경우 등
    #[error("{expected} 토큰이 필요하지만 {found} 토큰이 전달되었습니다")]
    WrongKind {
        expected: TokenKind,
        found: TokenKind,
    },
}

/// 애플리케이션 전역 에러 타입
///
/// 인증 코어와 HTTP 계층에서 발생할 수 있는 모든 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 허용되지 않은 역할 문자열 (400 Bad Request)
    #[error("Invalid role: {0}")]
    InvalidRoleError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 토큰 검증 실패 (401 Unauthorized)
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),

    /// Authorization 헤더 형식 오류 (401 Unauthorized)
    #[error("Malformed authorization header: {0}")]
    MalformedHeaderError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 잘못된 설정 (시작 시점에 한 번 발생)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidRoleError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_)
            | AppError::TokenError(_)
            | AppError::MalformedHeaderError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(AppError::status_code(self))
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 내부 실패(bcrypt, 서명, 블로킹 풀)를 500 `InternalError`로 감싸는 확장 trait
///
/// 메시지는 `"{msg}: {원인}"` 형태로 남고, 응답 본문에는 그대로 노출됩니다.
/// 인증 실패처럼 클라이언트에게 구분되어야 하는 에러에는 쓰지 않습니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E: std::fmt::Display> ErrorContext<T> for Result<T, E> {
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|cause| AppError::InternalError(format!("{msg}: {cause}")))
    }
}
