use actix_web::web;

pub mod health;
pub mod lobbies;

/// Register every endpoint. `main.rs` and the test app builder both call
/// this so tests exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Lobby routes: /lobbies/**
    cfg.service(web::scope("/lobbies").configure(lobbies::configure_routes));
}
