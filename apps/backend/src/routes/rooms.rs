use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::services::rooms::RoomSummary;
use crate::state::app_state::AppState;

#[derive(Serialize)]
struct RoomListResponse {
    rooms: Vec<RoomSummary>,
}

/// Lobby listing: rooms still waiting for players.
async fn list_rooms(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rooms = app_state.rooms.list_waiting_rooms();
    Ok(HttpResponse::Ok().json(RoomListResponse { rooms }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/rooms", web::get().to(list_rooms));
}
