//! System Capabilities - 系统能力封装模块。
//!
//! 提供服务目录内的文件读写能力，以及按平台打开文件浏览器的能力，
//! 供 server 集成为 API 路由。

pub mod explorer;
pub mod filesystem;

pub use explorer::{
    CommandLauncher, ExplorerCommand, ExplorerDispatcher, ExplorerError, Platform, SystemLauncher,
};
pub use filesystem::{
    APPEND_CONTENT, CREATE_CONTENT, FileStore, FileStoreError, REPLACE_CONTENT,
};
