//! Contract API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_capability;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/contracts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/export", get(handler::export))
        .layer(middleware::from_fn(require_capability("contracts:view")))
}
