//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod archive_source;
mod chapter_resolver;
mod library;

pub use archive_source::ArchiveSourcePort;
pub use chapter_resolver::{CacheStats, ChapterResolverPort};
pub use library::{LibraryError, NovelLibraryPort, NovelSummary};
