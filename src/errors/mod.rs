//! 에러 타입 모듈
//!
//! [`errors::AppError`]와 토큰 검증 실패 사유 [`errors::TokenError`]를 제공합니다.

pub mod errors;

pub use errors::*;
