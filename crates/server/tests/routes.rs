mod common;

use axum::http::{StatusCode, header};
use file_manager_server::ServiceConfig;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_create_list_delete_scenario() {
    let app = TestApp::new("linux");

    let (status, body) = app.post_json("/files", json!({ "filename": "a.txt" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "File created successfully" }));
    assert_eq!(std::fs::read_to_string(app.path("a.txt")).unwrap(), "Hello World!");

    let (status, body) = app.call("GET", "/files").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "files": ["a.txt"] }));

    let (status, body) = app.call("DELETE", "/files/a.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "File deleted successfully" }));

    let (status, body) = app.call("DELETE", "/files/a.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "File not found" }));
}

#[tokio::test]
async fn test_patch_missing_file_is_404_and_creates_nothing() {
    let app = TestApp::new("linux");

    let (status, body) = app.call("PATCH", "/files/missing.txt").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "File not found" }));
    assert!(!app.path("missing.txt").exists());
}

#[tokio::test]
async fn test_patch_appends_update() {
    let app = TestApp::new("linux");
    app.post_json("/files", json!({ "filename": "log.txt" })).await;

    let (status, body) = app.call("PATCH", "/files/log.txt").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "File updated successfully" }));
    assert_eq!(
        std::fs::read_to_string(app.path("log.txt")).unwrap(),
        "Hello World!\nUpdated content"
    );
}

#[tokio::test]
async fn test_put_creates_or_replaces() {
    let app = TestApp::new("linux");
    std::fs::write(app.path("old.txt"), "stale").unwrap();

    for name in ["old.txt", "new.txt"] {
        let (status, body) = app.call("PUT", &format!("/files/{name}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "File replaced successfully" }));
        assert_eq!(
            std::fs::read_to_string(app.path(name)).unwrap(),
            "Replaced Content!"
        );
    }
}

#[tokio::test]
async fn test_post_without_filename_is_validation_error() {
    let app = TestApp::new("linux");

    let (status, body) = app.post_json("/files", json!({ "name": "a.txt" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "errors": [{
                "type": "field",
                "msg": "Invalid value",
                "path": "filename",
                "location": "body",
            }]
        })
    );
    assert!(std::fs::read_dir(app.dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn test_post_with_non_string_filename_is_rejected() {
    let app = TestApp::new("linux");

    let (status, body) = app.post_json("/files", json!({ "filename": 5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["value"], json!(5));
}

#[tokio::test]
async fn test_post_with_malformed_body_is_rejected() {
    let app = TestApp::new("linux");
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/files")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["path"], "filename");
}

#[tokio::test]
async fn test_post_sanitizes_filename() {
    let app = TestApp::new("linux");

    let (status, _) = app
        .post_json("/files", json!({ "filename": "  <b>.txt  " }))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app.call("GET", "/files").await;
    assert_eq!(body, json!({ "files": ["&lt;b&gt;.txt"] }));
}

#[tokio::test]
async fn test_list_includes_subdirectories() {
    let app = TestApp::new("linux");
    std::fs::create_dir(app.path("nested")).unwrap();
    std::fs::write(app.path("b.txt"), "").unwrap();

    let (status, body) = app.call("GET", "/files").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "files": ["b.txt", "nested"] }));
}

#[tokio::test]
async fn test_open_explorer_launches_in_service_dir() {
    let app = TestApp::new("linux");

    let (status, body) = app.call("GET", "/open-explorer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "File explorer opened successfully" }));
    let calls = app.launcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "nautilus");
    assert_eq!(calls[0].1, app.dir.path());
}

#[tokio::test]
async fn test_open_explorer_unsupported_platform() {
    let app = TestApp::new("plan9");

    let (status, body) = app.call("GET", "/open-explorer").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Unsupported platform" }));
    assert!(app.launcher.calls().is_empty());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new("linux");

    let (status, body) = app.call("GET", "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "File Manager API");
    assert!(body["paths"]["/files/{filename}"]["delete"].is_object());
    assert!(body["paths"]["/open-explorer"]["get"].is_object());
}

#[tokio::test]
async fn test_post_json_sent_as_plain_text_is_rejected() {
    let app = TestApp::new("linux");
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/files")
        .header("content-type", "text/plain")
        .body(axum::body::Body::from(r#"{"filename":"a.txt"}"#))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["path"], "filename");
    assert!(!app.path("a.txt").exists());
}

#[tokio::test]
async fn test_docs_viewer_is_html() {
    let app = TestApp::new("linux");

    let mut response = app.get_raw("/docs").await;
    if response.status().is_redirection() {
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .expect("redirect should carry a location")
            .to_string();
        response = app.get_raw(&location).await;
    }

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
}

#[tokio::test]
async fn test_writing_any_filename_leaves_startup_config_fixed() {
    let app = TestApp::new("linux");

    for name in ["file-manager.toml", "config.toml", ".env"] {
        let (status, _) = app.post_json("/files", json!({ "filename": name })).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = app.call("PUT", &format!("/files/{name}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let config = ServiceConfig::for_base_dir(app.dir.path());
    assert_eq!(config.port, 3000);
    assert_eq!(config.base_dir, app.dir.path());

    let startup = ServiceConfig::startup().expect("startup config never reads files");
    assert_eq!(startup.port, 3000);
    assert_eq!(startup.base_dir, std::env::current_dir().unwrap());
}
