//! 文件浏览器能力模块。
//!
//! 根据宿主操作系统选择一条固定命令，在服务目录下打开图形化文件浏览器。

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error(transparent)]
    Spawn(#[from] std::io::Error),
}

/// 支持打开文件浏览器的平台。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// 识别操作系统标识，兼容 `std::env::consts::OS` 与 `darwin`/`win32` 写法。
    pub fn from_os_identifier(os: &str) -> Option<Self> {
        match os {
            "macos" | "darwin" => Some(Self::MacOs),
            "windows" | "win32" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    pub fn explorer_command(self) -> ExplorerCommand {
        match self {
            Self::MacOs => ExplorerCommand::new("open", &["."]),
            // `start` 是 cmd 内建命令
            Self::Windows => ExplorerCommand::new("cmd", &["/C", "start", "."]),
            Self::Linux => ExplorerCommand::new("nautilus", &["."]),
        }
    }
}

/// 一条待执行的外部命令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ExplorerCommand {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

/// 启动外部进程的接口，便于测试时替换。
#[async_trait]
pub trait CommandLauncher: Send + Sync {
    /// 在 `working_dir` 下启动命令，进程启动即返回。
    async fn launch(&self, command: &ExplorerCommand, working_dir: &Path) -> std::io::Result<()>;
}

/// 通过 tokio 子进程真正执行命令。
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher;

#[async_trait]
impl CommandLauncher for SystemLauncher {
    async fn launch(&self, command: &ExplorerCommand, working_dir: &Path) -> std::io::Result<()> {
        info!(
            program = command.program,
            args = ?command.args,
            working_dir = %working_dir.display(),
            "spawning explorer process"
        );

        let mut child = Command::new(command.program)
            .args(command.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let program = command.program;
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => info!(program, "explorer process exited"),
                Ok(status) => warn!(program, %status, "explorer process exited with failure"),
                Err(err) => warn!(program, error = %err, "failed to wait for explorer process"),
            }
        });

        Ok(())
    }
}

/// 文件浏览器命令分发器。
#[derive(Clone)]
pub struct ExplorerDispatcher {
    os: String,
    working_dir: PathBuf,
    launcher: Arc<dyn CommandLauncher>,
}

impl ExplorerDispatcher {
    /// 使用当前操作系统与真实子进程。
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            working_dir: working_dir.into(),
            launcher: Arc::new(SystemLauncher),
        }
    }

    pub fn with_launcher(mut self, launcher: Arc<dyn CommandLauncher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    /// 打开文件浏览器。未知平台直接返回错误，不会启动任何进程。
    pub async fn open_explorer(&self) -> Result<(), ExplorerError> {
        let platform = Platform::from_os_identifier(&self.os)
            .ok_or_else(|| ExplorerError::UnsupportedPlatform(self.os.clone()))?;
        let command = platform.explorer_command();

        self.launcher.launch(&command, &self.working_dir).await?;
        Ok(())
    }
}

impl std::fmt::Debug for ExplorerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerDispatcher")
            .field("os", &self.os)
            .field("working_dir", &self.working_dir)
            .finish_non_exhaustive()
    }
}
