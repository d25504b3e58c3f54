//! Yuedu - 小说在线阅读服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说、章节与名称规则
//! - Chapterizer: 纯文本分章
//!
//! 应用层 (application/):
//! - Ports: 端口定义（NovelLibrary, ArchiveSource, ChapterResolver）
//! - Queries: 查询处理器（小说列表、章节目录、章节正文）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 阅读页面 + JSON API + 静态资源
//! - Archive: ZIP 压缩包文本提取
//! - Library: 文件系统小说库
//! - Memory: 章节缓存（LRU + single-flight）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
