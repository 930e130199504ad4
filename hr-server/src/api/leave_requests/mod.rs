//! Leave Request API 模块

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_capability;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leave-requests", routes())
}

fn routes() -> Router<ServerState> {
    let submit_routes = Router::new()
        .route("/", post(handler::submit))
        .route("/mine", get(handler::mine))
        .layer(middleware::from_fn(require_capability("leave:submit")));

    let approve_routes = Router::new()
        .route("/pending", get(handler::list_pending))
        .route("/{id}/approve", post(handler::approve))
        .route("/{id}/reject", post(handler::reject))
        .layer(middleware::from_fn(require_capability("leave:approve")));

    submit_routes.merge(approve_routes)
}
