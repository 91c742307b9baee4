//! 统一的应用状态。

use system_capabilities::{ExplorerDispatcher, FileStore};

use crate::config::ServiceConfig;

/// 统一的应用状态，启动后不再修改。
#[derive(Debug, Clone)]
pub struct AppState {
    /// 服务目录内的文件操作。
    pub files: FileStore,
    /// 文件浏览器命令分发。
    pub explorer: ExplorerDispatcher,
}

impl AppState {
    /// 根据配置创建应用状态。
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            files: FileStore::new(config.base_dir.clone()),
            explorer: ExplorerDispatcher::new(config.base_dir.clone()),
        }
    }

    /// 替换文件浏览器分发器。
    pub fn with_explorer(mut self, explorer: ExplorerDispatcher) -> Self {
        self.explorer = explorer;
        self
    }
}
