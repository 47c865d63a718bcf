//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 식별자 정규화, 상수 시간 비교
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_email, constant_time_eq};
//!
//! let email = normalize_email("  Admin@Example.com ");
//! assert!(constant_time_eq(&provided_key, &configured_key));
//! ```

pub mod string_utils;
