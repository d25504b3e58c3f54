//! Cached Chapter Resolver - 带缓存的章节解析器
//!
//! 实现 ChapterResolverPort trait：组合正文提取与章节切分，
//! 结果写入 ChapterCache。服务内所有章节读取都经由这里。

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ArchiveSourcePort, CacheStats, ChapterResolverPort};
use crate::domain::novel::{ArchivePath, ChapterSet, ExtractError};

use super::chapter_cache::ChapterCache;

/// 带缓存的章节解析器
pub struct CachedChapterResolver {
    source: Arc<dyn ArchiveSourcePort>,
    cache: ChapterCache,
}

impl CachedChapterResolver {
    pub fn new(source: Arc<dyn ArchiveSourcePort>, max_entries: usize) -> Self {
        Self {
            source,
            cache: ChapterCache::new(max_entries),
        }
    }
}

#[async_trait]
impl ChapterResolverPort for CachedChapterResolver {
    async fn resolve_chapters(
        &self,
        archive: &ArchivePath,
    ) -> Result<Arc<ChapterSet>, ExtractError> {
        let source = self.source.clone();
        let owned = archive.clone();

        let result = self
            .cache
            .get_or_compute(archive.as_path(), || async move {
                let text = source.extract_text(&owned).await?;
                Ok(ChapterSet::from_text(&text))
            })
            .await;

        if let Err(e) = &result {
            tracing::error!(archive = %archive, error = %e, "Failed to resolve chapters");
        }
        result
    }

    fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
