//! Chapter Resolver Port - 章节解析
//!
//! 定义"压缩包路径 → 章节集"解析的抽象接口，具体实现带 LRU 缓存

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::novel::{ArchivePath, ChapterSet, ExtractError};

/// Chapter Resolver Port
///
/// 服务内获取章节的唯一入口。实现负责缓存与并发合并：
/// - 同一路径的并发解析只执行一次底层提取
/// - 失败不缓存，下一次请求重新尝试
#[async_trait]
pub trait ChapterResolverPort: Send + Sync {
    /// 解析压缩包为章节集
    ///
    /// 缓存命中时返回共享的同一份章节集。
    async fn resolve_chapters(&self, archive: &ArchivePath) -> Result<Arc<ChapterSet>, ExtractError>;

    /// 获取缓存统计信息
    fn cache_stats(&self) -> CacheStats;
}

/// 章节缓存统计信息
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub total_entries: usize,
    pub max_entries: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub eviction_count: u64,
}
