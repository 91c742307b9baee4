//! API 错误到 HTTP 响应的映射。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use file_manager_api_types::{ErrorResponse, ValidationErrorResponse, ValidationFailure};
use file_manager_core::ValidationError;
use system_capabilities::{ExplorerError, FileStoreError};
use tracing::warn;

/// API 错误类型。
#[derive(Debug)]
pub struct ApiError {
    message: String,
    code: &'static str,
    status: StatusCode,
    failures: Option<Vec<ValidationFailure>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            message: err.to_string(),
            code: "VALIDATION_ERROR",
            status: StatusCode::BAD_REQUEST,
            failures: Some(err.failures),
        }
    }
}

impl From<FileStoreError> for ApiError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::NotFound(_) => ApiError {
                message: "File not found".to_string(),
                code: "NOT_FOUND",
                status: StatusCode::NOT_FOUND,
                failures: None,
            },
            FileStoreError::Io(e) => ApiError {
                message: e.to_string(),
                code: "IO_ERROR",
                status: StatusCode::INTERNAL_SERVER_ERROR,
                failures: None,
            },
        }
    }
}

impl From<ExplorerError> for ApiError {
    fn from(err: ExplorerError) -> Self {
        match err {
            ExplorerError::UnsupportedPlatform(_) => ApiError {
                message: "Unsupported platform".to_string(),
                code: "UNSUPPORTED_PLATFORM",
                status: StatusCode::BAD_REQUEST,
                failures: None,
            },
            ExplorerError::Spawn(e) => ApiError {
                message: e.to_string(),
                code: "IO_ERROR",
                status: StatusCode::INTERNAL_SERVER_ERROR,
                failures: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(
            code = self.code,
            status = %self.status,
            message = %self.message,
            "request failed"
        );

        match self.failures {
            Some(errors) => (self.status, Json(ValidationErrorResponse { errors })).into_response(),
            None => (
                self.status,
                Json(ErrorResponse {
                    error: self.message,
                }),
            )
                .into_response(),
        }
    }
}
