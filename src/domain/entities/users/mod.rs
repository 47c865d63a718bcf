//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//! use crate::domain::auth::Role;
//!
//! let mut user = User::new("operator".to_string(), "op@example.com".to_string(), Role::User);
//! password_service.set_password(&mut user, "correct horse battery")?;
//! ```

pub mod user;
