//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의하는 모듈입니다.

pub mod common;
pub mod users;

// 공통 re-exports
pub use common::ApiResponse;
pub use users::*;
