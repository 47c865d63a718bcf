//! 영속성 엔티티

pub mod users;
