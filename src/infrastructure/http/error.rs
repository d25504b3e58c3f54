//! HTTP Error Handling
//!
//! API 路由返回 errno 信封的 JSON 错误，页面路由返回 HTML 错误页；
//! 两者都携带真实的 HTTP 状态码。

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

use super::render;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const FORBIDDEN: i32 = 403;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Forbidden(String),
    Internal(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, i32, &str) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, errno::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, errno::BAD_REQUEST, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, errno::FORBIDDEN, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, errno::INTERNAL_ERROR, msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errno, msg) = self.parts();

        if status.is_server_error() {
            tracing::error!(errno = errno, error = %msg, "Internal server error");
        } else {
            tracing::warn!(errno = errno, error = %msg, "Request rejected");
        }

        (status, Json(ErrorResponse::new(errno, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound {
                resource_type,
                name,
            } => ApiError::NotFound(format!("{} not found: {}", resource_type, name)),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            // 提取失败对外只呈现"小说不存在"，细节已由解析器记入日志
            ApplicationError::ExtractionError(_) => {
                ApiError::NotFound("Novel not found".to_string())
            }
            ApplicationError::LibraryError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

/// 页面错误
///
/// 与 ApiError 同一套分类与状态码，响应体换成 HTML 错误页。
#[derive(Debug)]
pub struct PageError(pub ApiError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, errno, msg) = self.0.parts();

        if status.is_server_error() {
            tracing::error!(errno = errno, error = %msg, "Internal server error");
        } else {
            tracing::warn!(errno = errno, error = %msg, "Page request rejected");
        }

        (status, Html(render::error_page(status.as_u16(), msg))).into_response()
    }
}

impl From<ApplicationError> for PageError {
    fn from(e: ApplicationError) -> Self {
        Self(ApiError::from(e))
    }
}

impl From<ApiError> for PageError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}
