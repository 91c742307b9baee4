//! API 路由模块。
//!
//! 将文件操作、文件浏览器与文档页面组装为一个路由。

pub mod docs;
pub mod error;
pub mod explorer;
pub mod files;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use docs::{ApiDoc, openapi};
pub use error::ApiError;
pub use explorer::create_explorer_router;
pub use files::create_files_router;
pub use state::AppState;

/// 组装完整的应用路由。
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(docs::swagger_ui())
        .merge(create_explorer_router())
        .merge(create_files_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
