//! Authentication Module
//!
//! JWT 认证 + 基于角色 capability 的授权：
//!
//! - [`JwtService`]: 令牌生成与验证
//! - [`CurrentUser`]: 认证中间件注入的用户上下文
//! - [`require_auth`] / [`require_capability`]: Axum 中间件

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_capability};
