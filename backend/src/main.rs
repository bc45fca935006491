//! Backend entry-point: loads settings, wires the profile service, and serves
//! the REST API with OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use profiles_backend::domain::ports::UserProfileCommand;
use profiles_backend::domain::{UserProfileService, example_user_draft};
use profiles_backend::inbound::http::health::HealthState;
use profiles_backend::inbound::http::state::HttpState;
use profiles_backend::outbound::memory::InMemoryUserProfileRepository;

use server::{ServerConfig, ServerSettings, create_server};

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|e| {
        eprintln!("invalid log level {log_level:?} ({e}); falling back to RUST_LOG");
        EnvFilter::from_default_env()
    });
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load().map_err(|e| {
        std::io::Error::other(format!("failed to load configuration: {e}"))
    })?;
    init_tracing(settings.log_level());
    let config = ServerConfig::from_settings(&settings)?;

    let clock = Arc::new(DefaultClock);
    let service = Arc::new(UserProfileService::new(
        Arc::new(InMemoryUserProfileRepository::new()),
        clock.clone(),
    ));

    if settings.seed_example_user {
        let seeded = service
            .create_user(example_user_draft())
            .await
            .map_err(|e| std::io::Error::other(format!("failed to seed example user: {e}")))?;
        info!(user_id = %seeded.id(), "seeded example user");
    }

    let health_state = web::Data::new(HealthState::new(settings.environment(), clock));
    let http_state = web::Data::new(HttpState::new(service.clone(), service));

    info!(environment = settings.environment(), "starting server");
    create_server(health_state, http_state, config)?.await
}
