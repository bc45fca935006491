//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::UserProfileService;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserProfileRepository;

/// Clock frozen at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant used by [`in_memory_state`].
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// HTTP state backed by a fresh in-memory store and a frozen clock.
pub fn in_memory_state() -> web::Data<HttpState> {
    let service = Arc::new(UserProfileService::new(
        Arc::new(InMemoryUserProfileRepository::new()),
        Arc::new(FixedClock(fixed_now())),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}
