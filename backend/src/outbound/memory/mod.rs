//! In-process storage adapters.

mod in_memory_user_profile_repository;

pub use in_memory_user_profile_repository::InMemoryUserProfileRepository;
