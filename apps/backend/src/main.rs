use actix_web::{web, App, HttpServer};
use lobby_backend::config::AppConfig;
use lobby_backend::middleware::cors::cors_middleware;
use lobby_backend::middleware::request_trace::RequestTrace;
use lobby_backend::middleware::structured_logger::StructuredLogger;
use lobby_backend::middleware::trace_span::TraceSpan;
use lobby_backend::routes;
use lobby_backend::state::build_state;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (LOBBY_HOST, LOBBY_PORT, LOBBY_CACHE_*, LOBBY_CORS_ALLOWED_ORIGINS).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    let allowed_origins = config.cors_allowed_origins.clone();

    let app_state = match build_state().with_config(config).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, "Starting lobby backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&allowed_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
