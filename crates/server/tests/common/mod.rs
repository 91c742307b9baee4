use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use file_manager_server::{AppState, ServiceConfig, build_router};
use system_capabilities::{CommandLauncher, ExplorerCommand, ExplorerDispatcher};
use tower::ServiceExt;

#[derive(Clone, Default)]
pub struct RecordingLauncher {
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl RecordingLauncher {
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandLauncher for RecordingLauncher {
    async fn launch(&self, command: &ExplorerCommand, working_dir: &Path) -> std::io::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((command.program.to_string(), working_dir.to_path_buf()));
        Ok(())
    }
}

pub struct TestApp {
    pub dir: tempfile::TempDir,
    pub launcher: RecordingLauncher,
    router: Router,
}

impl TestApp {
    pub fn new(os: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let launcher = RecordingLauncher::default();
        let config = ServiceConfig::for_base_dir(dir.path());
        let explorer = ExplorerDispatcher::new(dir.path())
            .with_os(os)
            .with_launcher(Arc::new(launcher.clone()));
        let state = AppState::new(&config).with_explorer(explorer);

        Self {
            dir,
            launcher,
            router: build_router(Arc::new(state)),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub async fn send_raw(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond")
    }

    pub async fn get_raw(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        self.send_raw(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.send_raw(request).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    pub async fn call(&self, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        self.send(request).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.send(request).await
    }
}
