use std::time::Instant;

use actix_web::{web, HttpResponse};
use once_cell::sync::Lazy;
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Hello from the Spades room server! ♠"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    rooms: usize,
    uptime_seconds: u64,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version,
        rooms: app_state.registry().room_count(),
        uptime_seconds: STARTED_AT.elapsed().as_secs(),
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    Lazy::force(&STARTED_AT);
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
