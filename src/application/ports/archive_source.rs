//! Archive Source Port - 压缩包正文来源
//!
//! 定义从压缩包提取小说正文的抽象接口，具体实现使用 zip + encoding_rs

use async_trait::async_trait;

use crate::domain::novel::{ArchivePath, ExtractError};

/// Archive Source Port
///
/// 从单个压缩包中取出解码后的小说正文：
/// - 排除 VIP 说明文件等噪声条目
/// - 按固定顺序尝试候选编码
/// - 去除已知来源条目的首行标题
#[async_trait]
pub trait ArchiveSourcePort: Send + Sync {
    /// 提取压缩包中的正文文本
    ///
    /// 每次调用独立完成一次提取，不做缓存；缓存由上层的章节解析器负责。
    async fn extract_text(&self, archive: &ArchivePath) -> Result<String, ExtractError>;
}
