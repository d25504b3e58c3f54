//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ArchiveSource、NovelLibrary、ChapterResolver）
//! - queries: 查询及处理器（本服务只读，无命令侧）
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use ports::{
    // Archive source
    ArchiveSourcePort,
    // Chapter resolver
    CacheStats,
    ChapterResolverPort,
    // Library
    LibraryError,
    NovelLibraryPort,
    NovelSummary,
};

pub use queries::{
    // Novel queries
    GetChapter,
    GetNovelChapters,
    ListNovels,
    // Handlers
    handlers::{
        ChapterDetailResponse, ChapterListResponse, GetChapterHandler, GetNovelChaptersHandler,
        ListNovelsHandler, NovelListItem,
    },
};
