//! 文件 API 路由。
//!
//! 在服务目录内创建、追加、替换、删除与列出文件。

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    routing::{get, patch},
};
use file_manager_api_types::{
    CreateFileRequest, ErrorResponse, FileListResponse, MessageResponse, ValidationErrorResponse,
};
use file_manager_core::Filename;
use serde_json::Value;

use super::error::ApiError;
use super::state::AppState;

/// 创建文件 API 路由。
pub fn create_files_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/files", get(list_files).post(create_file))
        .route(
            "/files/{filename}",
            patch(update_file).put(replace_file).delete(delete_file),
        )
}

/// 创建新文件，内容固定。
#[utoipa::path(
    post,
    path = "/files",
    tag = "files",
    summary = "Creates a new dummy file",
    request_body = CreateFileRequest,
    responses(
        (status = 201, description = "File created successfully", body = MessageResponse),
        (status = 400, description = "Invalid request body", body = ValidationErrorResponse),
        (status = 500, description = "File could not be written", body = ErrorResponse),
    )
)]
pub async fn create_file(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    // 非 JSON 请求体按空对象处理，交由校验器拒绝
    let body = if is_json_content_type(&headers) {
        serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null)
    } else {
        Value::Null
    };
    let filename = Filename::from_body(&body)?;

    state.files.create(&filename).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("File created successfully")),
    ))
}

/// 仅 `application/json` 请求体会被解析。
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// 向已有文件追加内容。
#[utoipa::path(
    patch,
    path = "/files/{filename}",
    tag = "files",
    summary = "Updates part of a file",
    params(("filename" = String, Path, description = "Name of the file in the service directory")),
    responses(
        (status = 200, description = "File updated successfully", body = MessageResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "File could not be appended", body = ErrorResponse),
    )
)]
pub async fn update_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let filename = Filename::from_path_param(filename)?;

    state.files.append(&filename).await?;
    Ok(Json(MessageResponse::new("File updated successfully")))
}

/// 替换文件内容，文件不存在时创建。
#[utoipa::path(
    put,
    path = "/files/{filename}",
    tag = "files",
    summary = "Replaces the content of a file",
    params(("filename" = String, Path, description = "Name of the file in the service directory")),
    responses(
        (status = 200, description = "File replaced successfully", body = MessageResponse),
        (status = 500, description = "File could not be written", body = ErrorResponse),
    )
)]
pub async fn replace_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let filename = Filename::from_path_param(filename)?;

    state.files.replace(&filename).await?;
    Ok(Json(MessageResponse::new("File replaced successfully")))
}

/// 删除文件。
#[utoipa::path(
    delete,
    path = "/files/{filename}",
    tag = "files",
    summary = "Deletes a file",
    params(("filename" = String, Path, description = "Name of the file in the service directory")),
    responses(
        (status = 200, description = "File deleted successfully", body = MessageResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "File could not be deleted", body = ErrorResponse),
    )
)]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let filename = Filename::from_path_param(filename)?;

    state.files.delete(&filename).await?;
    Ok(Json(MessageResponse::new("File deleted successfully")))
}

/// 列出服务目录下的全部条目。
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    summary = "Lists all files",
    responses(
        (status = 200, description = "List of files", body = FileListResponse),
        (status = 500, description = "Directory could not be read", body = ErrorResponse),
    )
)]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FileListResponse>, ApiError> {
    let files = state.files.list().await?;
    Ok(Json(FileListResponse { files }))
}
