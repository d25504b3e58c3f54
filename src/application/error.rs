//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::domain::novel::{ExtractError, NovelNameError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {name}")]
    NotFound {
        resource_type: &'static str,
        name: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 正文提取失败
    #[error("Extraction error: {0}")]
    ExtractionError(#[from] ExtractError),

    /// 书库扫描失败
    #[error("Library error: {0}")]
    LibraryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            name: name.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<NovelNameError> for ApplicationError {
    fn from(err: NovelNameError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<crate::application::ports::LibraryError> for ApplicationError {
    fn from(err: crate::application::ports::LibraryError) -> Self {
        Self::LibraryError(err.to_string())
    }
}
