//! User repository interface and in-memory mock

mod mock;
mod trait_;

pub use mock::MockUserRepository;
pub use trait_::UserRepository;
