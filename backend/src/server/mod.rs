//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use profiles_backend::doc::ApiDoc;
use profiles_backend::inbound::http::health::{HealthState, health, ready};
use profiles_backend::inbound::http::state::HttpState;
use profiles_backend::inbound::http::validation::json_config;
use profiles_backend::inbound::http::{api_scope, route_not_found};
use profiles_backend::middleware::RequireJson;
use profiles_backend::Trace;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_origins: Vec<String>,
}

fn build_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
}

fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "DENY"))
        .add((header::REFERRER_POLICY, "no-referrer"))
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors_origins,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(RequireJson)
        .wrap(Compress::default())
        .wrap(security_headers())
        .wrap(build_cors(&cors_origins))
        .wrap(Trace)
        .service(api_scope())
        .service(health)
        .service(ready)
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        cors_origins,
    } = config;
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        cors_origins,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}
