//! Novel Handlers - 页面与 API

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;

use crate::application::{GetChapter, GetNovelChapters, ListNovels};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::{ApiError, PageError};
use crate::infrastructure::http::render;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// 页面路由
// ============================================================================

/// 首页：小说列表
pub async fn index_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let novels = state.list_novels_handler.handle(ListNovels).await?;
    Ok(Html(render::index_page(&novels)))
}

/// 目录页：章节列表
pub async fn chapter_list_page(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let list = state
        .get_novel_chapters_handler
        .handle(GetNovelChapters { name })
        .await?;
    Ok(Html(render::chapter_list_page(&list)))
}

/// 阅读页：按标题定位章节
pub async fn chapter_page(
    State(state): State<Arc<AppState>>,
    Path((name, chapter)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let detail = state
        .get_chapter_handler
        .handle(GetChapter {
            name,
            chapter_title: chapter,
        })
        .await?;
    Ok(Html(render::chapter_page(&detail)))
}

// ============================================================================
// API 路由
// ============================================================================

#[derive(Debug, Serialize)]
pub struct NovelItem {
    pub name: String,
    pub file_name: String,
    pub modified: Option<String>,
}

/// 小说列表 JSON
pub async fn list_novels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<NovelItem>>>, ApiError> {
    let novels = state.list_novels_handler.handle(ListNovels).await?;
    let items: Vec<NovelItem> = novels
        .into_iter()
        .map(|n| NovelItem {
            name: n.name,
            file_name: n.file_name,
            modified: n.modified,
        })
        .collect();
    Ok(Json(ApiResponse::success(items)))
}

#[derive(Debug, Serialize)]
pub struct ChapterListData {
    pub novel_name: String,
    pub chapter_titles: Vec<String>,
    pub total: usize,
    pub resolved_at: String,
}

/// 章节目录 JSON
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<ChapterListData>>, ApiError> {
    let list = state
        .get_novel_chapters_handler
        .handle(GetNovelChapters { name })
        .await?;
    Ok(Json(ApiResponse::success(ChapterListData {
        novel_name: list.novel_name,
        chapter_titles: list.chapter_titles,
        total: list.total,
        resolved_at: list.resolved_at,
    })))
}
