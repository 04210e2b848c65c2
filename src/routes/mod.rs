use axum::routing::get;
use axum::Router;
use mongodb::Client;
use tower_http::cors::CorsLayer;

use crate::config::Config;

mod hello;

pub fn create_router(config: &Config) -> Router<Client> {
    Router::new()
        .route("/api/hello", get(hello::get))
        .layer(if config.application.cors {
            log::info!("CorsLayer Permissive");
            CorsLayer::permissive()
        } else {
            CorsLayer::default()
        })
}
