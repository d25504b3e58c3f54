//! Novel Context - Errors

use std::path::PathBuf;

use thiserror::Error;

/// 压缩包正文提取错误
///
/// 所有失败都作为值返回给调用方，由调用方决定对外表现
/// （例如"小说不存在"）。核心不做自动重试。
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 压缩包不存在或容器损坏不可读
    #[error("无法打开压缩包 {}: {reason}", .path.display())]
    ArchiveOpen { path: PathBuf, reason: String },

    /// 压缩包中没有任何 TXT 条目
    #[error("压缩包中未找到 TXT 文件: {}", .path.display())]
    NoTextEntry { path: PathBuf },

    /// 排除 VIP 说明文件后没有剩余条目
    #[error("压缩包中仅包含 VIP 说明文件: {}", .path.display())]
    OnlyBoilerplate { path: PathBuf },

    /// 所有候选编码都解码失败
    ///
    /// 兜底编码对任意字节序列都能成功，因此当前不可达；
    /// 保留该变体以便未来收紧解码策略时合约不变。
    #[error("无法解码 TXT 文件: {entry}")]
    DecodeFailure { entry: String },
}

impl ExtractError {
    /// 构造 ArchiveOpen 错误
    pub fn archive_open(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ArchiveOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// 小说名称校验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NovelNameError {
    #[error("小说名称为空")]
    Empty,

    #[error("小说名称过长: {0} 个字符")]
    TooLong(usize),

    #[error("小说名称包含非法字符: {0:?}")]
    ForbiddenChar(char),
}
