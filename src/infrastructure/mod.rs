//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod archive;
pub mod http;
pub mod library;
pub mod memory;

pub use archive::ZipArchiveSource;
pub use library::NovelLibrary;
pub use memory::{CachedChapterResolver, ChapterCache};
