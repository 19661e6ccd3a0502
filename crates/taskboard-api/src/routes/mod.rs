use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Greeting endpoints
        .route("/", get(handlers::greeting::home))
        .route("/hello", get(handlers::greeting::hello))
        .route("/date", get(handlers::greeting::current_date))
        .route("/greet/:name", get(handlers::greeting::greet))

        // Health check
        .route("/health", get(handlers::health::health_check))

        // Task endpoints
        .route("/api/tasks", get(handlers::task::list_tasks))
        .route("/api/tasks", post(handlers::task::create_task))
        .route("/api/tasks/:id", get(handlers::task::get_task))
        .route("/api/tasks/:id", put(handlers::task::update_task))
        .route("/api/tasks/:id", delete(handlers::task::delete_task))

        // Statistics
        .route("/api/stats", get(handlers::stats::get_statistics))

        // Add state
        .with_state(state)

        // Request logging + CORS
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
