use actix_web::{web, App, HttpServer};
use spades_backend::config::server::ServerConfig;
use spades_backend::middleware::cors::cors_middleware;
use spades_backend::middleware::structured_logger::StructuredLogger;
use spades_backend::routes;
use spades_backend::state::app_state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    info!(%host, port, room_code_len = config.room_code_len, "starting spades room server");

    // One registry for the whole process, shared by every worker.
    let data = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
