//! Static Asset Handler - 静态资源
//!
//! safe_join 把请求路径锁定在静态目录内，越界一律 403

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 纯词法的路径拼接防护
///
/// 只接受解析后仍落在 base 内的相对路径：
/// - 绝对路径与盘符前缀直接拒绝
/// - ".." 允许出现，但任何时刻不得越过 base
/// - 不访问文件系统，符号链接不在防护范围内
pub fn safe_join(base: &Path, relative: &str) -> Option<PathBuf> {
    let mut depth: usize = 0;
    let mut joined = base.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                depth += 1;
                joined.push(part);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                joined.pop();
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(joined)
}

/// 按扩展名决定 Content-Type，未知类型按二进制流处理
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("html") => "text/html",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// 静态资源处理器
pub async fn static_asset(
    State(state): State<Arc<AppState>>,
    UrlPath(path): UrlPath<String>,
) -> Result<Response, ApiError> {
    let full_path = safe_join(&state.static_dir, &path)
        .ok_or_else(|| ApiError::Forbidden(format!("unsafe static path: {}", path)))?;

    let is_file = tokio::fs::metadata(&full_path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(ApiError::NotFound(format!("static asset not found: {}", path)));
    }

    let bytes = tokio::fs::read(&full_path)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let content_type = content_type_for(&full_path);
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
