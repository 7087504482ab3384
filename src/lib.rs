pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::MovieStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
}

pub fn router(state: Arc<AppState>) -> Router {
    // Wildcard origins rule out credentials, so none are allowed.
    let cors = CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any);

    Router::new()
        .route("/api/movies/health", get(routes::health))
        .route("/api/movies", get(routes::list).post(routes::create))
        .route(
            "/api/movies/{id}",
            get(routes::get_one).put(routes::update).delete(routes::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
