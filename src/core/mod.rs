//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 런타임 상태를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`app_state`] - 공유 상태
//! - **AppState**: 핸들러와 미들웨어가 `web::Data`로 접근하는 서비스 묶음
//! - **조립**: [`AppConfig`](crate::config::AppConfig)와 사용자 저장소로부터 한 번 생성
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::core::AppState;
//!
//! let state = web::Data::new(AppState::build(&config, store)?);
//! App::new().app_data(state.clone());
//! ```

pub mod app_state;

pub use app_state::AppState;
