//! Types shared between hr-server and its clients
//!
//! Keeps the API contract in one place:
//!
//! - **role** (`role`): the closed role set, capabilities and menu derivation
//! - **client** (`client`): request/response DTOs for the HTTP API
//! - **response** (`response`): the uniform API response envelope

pub mod client;
pub mod response;
pub mod role;

// Re-export common types
pub use client::{LoginRequest, LoginResponse, UserInfo};
pub use response::ApiResponse;
pub use role::{MenuEntry, Role, RoleParseError, menu_for_role};
