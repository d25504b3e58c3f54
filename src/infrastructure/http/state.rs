//! Application State
//!
//! 所有 Query Handler 与端口的应用状态

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    // Query handlers
    GetChapterHandler,
    GetNovelChaptersHandler,
    ListNovelsHandler,
    // Ports
    ChapterResolverPort,
    NovelLibraryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub resolver: Arc<dyn ChapterResolverPort>,

    // ========== Query Handlers ==========
    pub list_novels_handler: ListNovelsHandler,
    pub get_novel_chapters_handler: GetNovelChaptersHandler,
    pub get_chapter_handler: GetChapterHandler,

    // ========== 静态资源 ==========
    pub static_dir: PathBuf,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        library: Arc<dyn NovelLibraryPort>,
        resolver: Arc<dyn ChapterResolverPort>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resolver: resolver.clone(),
            list_novels_handler: ListNovelsHandler::new(library.clone()),
            get_novel_chapters_handler: GetNovelChaptersHandler::new(
                library.clone(),
                resolver.clone(),
            ),
            get_chapter_handler: GetChapterHandler::new(library, resolver),
            static_dir: static_dir.into(),
        }
    }
}
