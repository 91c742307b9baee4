//! 文件系统能力模块。
//!
//! 所有操作都限定在一个固定的服务目录内，文件名直接拼接到该目录之后。

use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// 新建文件时写入的内容。
pub const CREATE_CONTENT: &str = "Hello World!";
/// 追加更新时写入的内容。
pub const APPEND_CONTENT: &str = "\nUpdated content";
/// 整体替换时写入的内容。
pub const REPLACE_CONTENT: &str = "Replaced Content!";

/// 文件系统错误类型。
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FileStoreError>;

/// 服务目录内的文件操作。
///
/// 存在性检查与后续写入/删除之间没有原子性保证，并发请求可能交错。
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// 以给定目录作为服务目录。
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 将文件名拼接到服务目录之后，不做规范化。
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// 创建文件并写入固定内容，已存在时直接覆盖。
    pub async fn create(&self, name: impl AsRef<str>) -> Result<()> {
        let path = self.resolve(name.as_ref());
        info!(path = %path.display(), "Creating file");
        fs::write(&path, CREATE_CONTENT).await?;
        Ok(())
    }

    /// 向已存在的文件追加固定内容。
    pub async fn append(&self, name: impl AsRef<str>) -> Result<()> {
        let name = name.as_ref();
        let path = self.resolve(name);
        if !fs::try_exists(&path).await? {
            return Err(FileStoreError::NotFound(name.to_string()));
        }

        info!(path = %path.display(), "Appending to file");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(APPEND_CONTENT.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// 用固定内容覆盖文件，不存在时创建。
    pub async fn replace(&self, name: impl AsRef<str>) -> Result<()> {
        let path = self.resolve(name.as_ref());
        info!(path = %path.display(), "Replacing file");
        fs::write(&path, REPLACE_CONTENT).await?;
        Ok(())
    }

    /// 删除已存在的文件。
    pub async fn delete(&self, name: impl AsRef<str>) -> Result<()> {
        let name = name.as_ref();
        let path = self.resolve(name);
        if !fs::try_exists(&path).await? {
            return Err(FileStoreError::NotFound(name.to_string()));
        }

        info!(path = %path.display(), "Deleting file");
        fs::remove_file(&path).await?;
        Ok(())
    }

    /// 列出服务目录下的条目名称（文件与目录不作区分），按字节序排序。
    pub async fn list(&self) -> Result<Vec<String>> {
        debug!(path = %self.base_dir.display(), "Listing service directory");
        let mut entries = fs::read_dir(&self.base_dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}
