//! # Repository Layer
//!
//! 영속성 계층입니다. 서비스는 구체 타입 대신 [`users::UserStore`] trait에 의존합니다.

pub mod users;
