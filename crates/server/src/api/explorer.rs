//! 文件浏览器 API 路由。

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use file_manager_api_types::{ErrorResponse, MessageResponse};

use super::error::ApiError;
use super::state::AppState;

/// 创建文件浏览器 API 路由。
pub fn create_explorer_router() -> Router<Arc<AppState>> {
    Router::new().route("/open-explorer", get(open_explorer))
}

/// 在服务目录下打开宿主平台的文件浏览器。
#[utoipa::path(
    get,
    path = "/open-explorer",
    tag = "explorer",
    summary = "Opens the file explorer",
    responses(
        (status = 200, description = "File explorer opened successfully", body = MessageResponse),
        (status = 400, description = "Unsupported platform", body = ErrorResponse),
        (status = 500, description = "Explorer command could not be started", body = ErrorResponse),
    )
)]
pub async fn open_explorer(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.explorer.open_explorer().await?;
    Ok(Json(MessageResponse::new("File explorer opened successfully")))
}
