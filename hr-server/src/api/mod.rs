//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录、当前用户、登出
//! - [`menu`] - 角色派生菜单
//! - [`leave_requests`] - 请假提交与审批
//! - [`contracts`] - 合同报表与 PDF 导出

pub mod auth;
pub mod contracts;
pub mod health;
pub mod leave_requests;
pub mod menu;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Build the full application router with middleware and state applied
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        // Public routes
        .merge(health::router())
        // Auth API
        .merge(auth::router())
        // Menu API - authentication required
        .merge(menu::router())
        // Leave workflow - capability-gated per route
        .merge(leave_requests::router())
        // Contract report - capability-gated
        .merge(contracts::router())
        // JWT authentication - outermost app middleware, injects CurrentUser
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        // Request tracing
        .layer(TraceLayer::new_for_http())
        // CORS for browser clients
        .layer(CorsLayer::permissive())
        .with_state(state)
}
