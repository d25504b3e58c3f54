//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 章节与章节集实体
//! - 名称与路径值对象（外部输入的安全闸门）
//! - 提取与校验错误类型

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::ChapterSet;
pub use entities::Chapter;
pub use errors::{ExtractError, NovelNameError};
pub use value_objects::{ArchivePath, NovelName};
