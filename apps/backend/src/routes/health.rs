use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub app_version: String,
    pub storage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_error: Option<String>,
    pub lobbies: usize,
    pub lobbies_cached: u64,
    pub time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let service = app_state.service();
    let (storage, storage_error, lobbies) = match service.lobby_count().await {
        Ok(n) => ("ok".to_string(), None, n),
        Err(e) => ("error".to_string(), Some(e.to_string()), 0),
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version,
        storage,
        storage_error,
        lobbies,
        lobbies_cached: service.cache().entry_count(),
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
