//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod user;

// Leave workflow
pub mod leave_request;

// Contracts
pub mod contract;

// Re-exports
pub use contract::{Contract, ContractCreate, ContractView};
pub use leave_request::{
    LeaveRequest, LeaveRequestCreate, LeaveRequestId, LeaveStatus, LeaveType,
};
pub use user::{UserCreate, UserId, UserProfile};
