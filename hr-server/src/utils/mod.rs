//! Utility Module

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
