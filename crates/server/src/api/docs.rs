//! OpenAPI 文档。

use file_manager_api_types::{
    CreateFileRequest, ErrorResponse, FieldLocation, FileListResponse, MessageResponse,
    ValidationErrorResponse, ValidationFailure,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{explorer, files};

/// 交互式文档页面路径。
pub const DOCS_PATH: &str = "/docs";
/// 原始 OpenAPI 文档路径。
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "File Manager API",
        version = "1.0.0",
        description = "API to manage local files"
    ),
    paths(
        explorer::open_explorer,
        files::create_file,
        files::update_file,
        files::replace_file,
        files::delete_file,
        files::list_files,
    ),
    components(schemas(
        CreateFileRequest,
        MessageResponse,
        FileListResponse,
        ErrorResponse,
        FieldLocation,
        ValidationFailure,
        ValidationErrorResponse,
    ))
)]
pub struct ApiDoc;

/// 启动时生成一次的 OpenAPI 文档。
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Swagger UI 页面与文档路由。
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi())
}
