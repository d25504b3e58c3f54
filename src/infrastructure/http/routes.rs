//! HTTP Routes
//!
//! 路由定义
//!
//! 页面路由:
//! - /                          GET  小说列表首页
//! - /novel/:name               GET  章节目录页
//! - /novel/:name/:chapter      GET  章节阅读页
//! - /static/*path              GET  静态资源（safe_join 防护）
//!
//! API 路由:
//! - /api/ping                  GET  健康检查
//! - /api/novels                GET  小说列表 JSON
//! - /api/novels/:name/chapters GET  章节目录 JSON
//! - /api/stats                 GET  章节缓存统计

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index_page))
        .route("/novel/:name", get(handlers::chapter_list_page))
        .route("/novel/:name/:chapter", get(handlers::chapter_page))
        .route("/static/*path", get(handlers::static_asset))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/novels", get(handlers::list_novels))
        .route("/novels/:name/chapters", get(handlers::list_chapters))
        .route("/stats", get(handlers::cache_stats))
}
