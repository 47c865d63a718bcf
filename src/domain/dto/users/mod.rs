//! # Users DTO Module
//!
//! 사용자 도메인의 데이터 전송 객체(DTO)를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/   ← 회원가입, 로그인, 토큰 갱신, 관리자 요청, 시드 요청
//! └── response/  ← UserResponse, AuthResponse 등
//! ```
//!
//! 엔티티(`User`)는 외부로 직접 노출하지 않고 항상 `UserResponse`로 변환합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
