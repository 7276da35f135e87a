//! HTTP server for the portfolio relays
//!
//! Routes:
//!
//! | Method | Path             | Handler                  |
//! |--------|------------------|--------------------------|
//! | POST   | `/api/chat`      | chat proxy               |
//! | POST   | `/api/contact`   | contact proxy            |
//! | GET    | `/api/portfolio` | showcase data            |
//! | GET    | `/health`        | liveness probe           |

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use portfolio_application::ServerConfig;
use tracing::{error, info};

/// Register all routes and extractor settings
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/api")
                .route("/chat", web::post().to(handlers::chat))
                .route("/contact", web::post().to(handlers::contact))
                .route("/portfolio", web::get().to(handlers::portfolio)),
        );
}

/// Run the server until it is stopped (Ctrl-C / SIGTERM)
pub async fn run(state: AppState, config: &ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(state);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(from_fn(middleware::trace_requests))
            .configure(app_config)
    });
    if let Some(workers) = config.workers.filter(|w| *w > 0) {
        server = server.workers(workers);
    }

    let server = server.bind(&config.bind)?.run();
    info!("Portfolio server listening on http://{}", config.bind);

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(e);
    }

    info!("Portfolio server stopped");
    Ok(())
}
