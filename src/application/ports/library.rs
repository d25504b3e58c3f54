//! Novel Library Port - 小说书库
//!
//! 定义书库目录扫描与名称解析的抽象接口，具体实现基于本地文件系统

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::novel::{ArchivePath, NovelName};

/// 书库错误
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// 书库条目摘要
#[derive(Debug, Clone)]
pub struct NovelSummary {
    /// 对外展示的小说名（已去除归档后缀）
    pub name: String,
    /// 书库目录下的实际文件名
    pub file_name: String,
    /// 压缩包的最后修改时间（文件系统不支持时为 None）
    pub modified: Option<DateTime<Utc>>,
}

/// Novel Library Port
///
/// 书库是只读的：运行期间不创建、不修改、不删除任何压缩包。
#[async_trait]
pub trait NovelLibraryPort: Send + Sync {
    /// 列出书库中的所有小说，按名称排序
    ///
    /// 书库目录不存在时视为空书库而不是错误。
    async fn list(&self) -> Result<Vec<NovelSummary>, LibraryError>;

    /// 根据已校验的名称查找对应压缩包
    ///
    /// 返回的路径已规范化，可直接作为缓存 key；找不到时返回 None。
    async fn find_archive(&self, name: &NovelName) -> Result<Option<ArchivePath>, LibraryError>;
}
