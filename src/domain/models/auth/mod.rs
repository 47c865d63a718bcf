//! 인증/인가 도메인 모델
//!
//! - [`Role`]: 닫힌 역할 계층
//! - [`AuthenticatedUser`]: 미들웨어가 요청 extensions에 넣는 인증 주체

pub mod authenticated_user;
pub mod role;

pub use authenticated_user::AuthenticatedUser;
pub use role::Role;
