use actix_web::web;

pub mod health;
pub mod realtime;
pub mod rooms;

/// Register every route. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Greeting and health: /, /health
    cfg.configure(health::configure_routes);

    // Lobby listing: /rooms
    cfg.configure(rooms::configure_routes);

    // Websocket upgrade: /ws
    cfg.configure(realtime::configure_routes);
}
