//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Novel Context: 小说与章节

pub mod novel;

// 共享的章节切分器
mod chapterizer;

pub use chapterizer::{chapterize, CHAPTER_SEPARATOR, TITLE_SEPARATOR};
