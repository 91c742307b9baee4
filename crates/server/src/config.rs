use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
type Result<T> = anyhow::Result<T>;

pub const DEFAULT_PORT: u16 = 3000;

/// Fixed process-wide settings, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub base_dir: PathBuf,
}

impl ServiceConfig {
    /// Port 3000, serving the current working directory. Nothing is read
    /// from disk.
    pub fn startup() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        Ok(Self::for_base_dir(cwd))
    }

    pub fn for_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            port: DEFAULT_PORT,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
