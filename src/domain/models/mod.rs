//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: `Role`, `TokenClaims`, `TokenPair`, `AuthenticatedUser`
//!
//! ## 모듈 구성
//!
//! | 모듈 | 내용 |
//! |------|------|
//! | [`auth`] | 역할 계층과 인증 주체 |
//! | [`token`] | JWT 클레임, 토큰 용도, 토큰 쌍 |

pub mod auth;
pub mod token;
