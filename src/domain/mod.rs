//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 관리 계정과 인증/인가 개념을 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속 객체 (User)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 값 객체 (Role, TokenClaims, TokenPair, AuthenticatedUser)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 경로 규칙
//!
//! `models`의 하위 모듈은 re-export되어 `crate::domain::auth`,
//! `crate::domain::token`으로 바로 접근합니다.
//!
//! ```rust,ignore
//! use crate::domain::auth::Role;
//! use crate::domain::token::{TokenClaims, TokenKind};
//! use crate::domain::entities::users::user::User;
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
