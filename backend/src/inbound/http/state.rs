//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UserProfileCommand, UserProfileQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserProfileCommand>,
    pub users_query: Arc<dyn UserProfileQuery>,
}

impl HttpState {
    /// Construct state from the command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use profiles_backend::domain::UserProfileService;
    /// use profiles_backend::inbound::http::state::HttpState;
    /// use profiles_backend::outbound::memory::InMemoryUserProfileRepository;
    ///
    /// let service = Arc::new(UserProfileService::new(
    ///     Arc::new(InMemoryUserProfileRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserProfileCommand>, users_query: Arc<dyn UserProfileQuery>) -> Self {
        Self { users, users_query }
    }
}
