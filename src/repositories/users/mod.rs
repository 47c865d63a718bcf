//! 사용자 저장소 모듈

pub mod user_repo;
pub mod user_store;

#[cfg(test)]
pub mod memory_store;

pub use user_repo::MongoUserRepository;
pub use user_store::UserStore;
