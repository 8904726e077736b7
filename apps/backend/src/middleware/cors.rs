use actix_cors::Cors;
use actix_web::http::header;

/// CORS for the lobby API.
///
/// Only the configured origins are allowed; with none configured the
/// policy falls back to local development origins.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let fallback = ["http://localhost:3000", "http://127.0.0.1:3000"];

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    if allowed_origins.is_empty() {
        for origin in fallback {
            cors = cors.allowed_origin(origin);
        }
    } else {
        for origin in allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
