//! Memory Layer - In-Memory State Management
//!
//! 章节缓存与带缓存的章节解析器，服务内唯一的共享可变状态

mod chapter_cache;
mod resolver;

pub use chapter_cache::{ChapterCache, DEFAULT_MAX_ENTRIES};
pub use resolver::CachedChapterResolver;
