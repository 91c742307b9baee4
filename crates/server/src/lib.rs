//! File manager HTTP service.

pub mod api;
pub mod config;

pub use api::{AppState, build_router};
pub use config::ServiceConfig;
