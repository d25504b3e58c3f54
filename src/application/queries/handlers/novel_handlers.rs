//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ChapterResolverPort, NovelLibraryPort, NovelSummary};
use crate::application::queries::{GetChapter, GetNovelChapters, ListNovels};
use crate::domain::novel::{ArchivePath, ChapterSet, NovelName};

// ============================================================================
// Response DTOs
// ============================================================================

/// 书库条目响应
#[derive(Debug, Clone)]
pub struct NovelListItem {
    pub name: String,
    pub file_name: String,
    pub modified: Option<String>,
}

impl From<NovelSummary> for NovelListItem {
    fn from(summary: NovelSummary) -> Self {
        Self {
            name: summary.name,
            file_name: summary.file_name,
            modified: summary.modified.map(|m| m.to_rfc3339()),
        }
    }
}

/// 章节目录响应
#[derive(Debug, Clone)]
pub struct ChapterListResponse {
    pub novel_name: String,
    pub chapter_titles: Vec<String>,
    pub total: usize,
    /// 章节集的解析时间（RFC 3339），缓存命中时保持首次解析的值
    pub resolved_at: String,
}

/// 章节正文响应
#[derive(Debug, Clone)]
pub struct ChapterDetailResponse {
    pub novel_name: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    /// 该章节在目录中的 0 起始位置
    pub index: usize,
    pub total: usize,
    pub prev_title: Option<String>,
    pub next_title: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListNovels Handler
pub struct ListNovelsHandler {
    library: Arc<dyn NovelLibraryPort>,
}

impl ListNovelsHandler {
    pub fn new(library: Arc<dyn NovelLibraryPort>) -> Self {
        Self { library }
    }

    pub async fn handle(&self, _query: ListNovels) -> Result<Vec<NovelListItem>, ApplicationError> {
        let novels = self.library.list().await?;
        Ok(novels.into_iter().map(NovelListItem::from).collect())
    }
}

/// GetNovelChapters Handler
pub struct GetNovelChaptersHandler {
    library: Arc<dyn NovelLibraryPort>,
    resolver: Arc<dyn ChapterResolverPort>,
}

impl GetNovelChaptersHandler {
    pub fn new(library: Arc<dyn NovelLibraryPort>, resolver: Arc<dyn ChapterResolverPort>) -> Self {
        Self { library, resolver }
    }

    pub async fn handle(
        &self,
        query: GetNovelChapters,
    ) -> Result<ChapterListResponse, ApplicationError> {
        let (name, chapters) = resolve_novel(&*self.library, &*self.resolver, query.name).await?;

        Ok(ChapterListResponse {
            novel_name: name.as_str().to_string(),
            chapter_titles: chapters
                .chapters()
                .iter()
                .map(|c| c.title().to_string())
                .collect(),
            total: chapters.len(),
            resolved_at: chapters.resolved_at().to_rfc3339(),
        })
    }
}

/// GetChapter Handler
pub struct GetChapterHandler {
    library: Arc<dyn NovelLibraryPort>,
    resolver: Arc<dyn ChapterResolverPort>,
}

impl GetChapterHandler {
    pub fn new(library: Arc<dyn NovelLibraryPort>, resolver: Arc<dyn ChapterResolverPort>) -> Self {
        Self { library, resolver }
    }

    pub async fn handle(
        &self,
        query: GetChapter,
    ) -> Result<ChapterDetailResponse, ApplicationError> {
        let (name, chapters) = resolve_novel(&*self.library, &*self.resolver, query.name).await?;

        let index = chapters
            .position_of(&query.chapter_title)
            .ok_or_else(|| ApplicationError::not_found("Chapter", &query.chapter_title))?;
        // position_of 刚返回了该下标，get 必然命中
        let chapter = chapters
            .get(index)
            .ok_or_else(|| ApplicationError::internal("chapter index out of range"))?;

        let prev_title = index
            .checked_sub(1)
            .and_then(|i| chapters.get(i))
            .map(|c| c.title().to_string());
        let next_title = chapters.get(index + 1).map(|c| c.title().to_string());

        Ok(ChapterDetailResponse {
            novel_name: name.as_str().to_string(),
            title: chapter.title().to_string(),
            paragraphs: chapter.paragraphs().to_vec(),
            index,
            total: chapters.len(),
            prev_title,
            next_title,
        })
    }
}

/// 校验名称 → 定位压缩包 → 解析章节集
///
/// 目录与正文两个读路径共用的前半段；找不到压缩包时统一返回 Novel NotFound。
async fn resolve_novel(
    library: &dyn NovelLibraryPort,
    resolver: &dyn ChapterResolverPort,
    raw_name: String,
) -> Result<(NovelName, Arc<ChapterSet>), ApplicationError> {
    let name = NovelName::new(raw_name)?;

    let archive: ArchivePath = library
        .find_archive(&name)
        .await?
        .ok_or_else(|| ApplicationError::not_found("Novel", name.as_str()))?;

    let chapters = resolver.resolve_chapters(&archive).await?;
    Ok((name, chapters))
}
