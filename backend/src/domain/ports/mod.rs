//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_profile_command;
mod user_profile_query;
mod user_profile_repository;

pub use user_profile_command::UserProfileCommand;
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_profile_repository::MockUserProfileRepository;
pub use user_profile_repository::{UserProfileRepository, UserProfileRepositoryError};
