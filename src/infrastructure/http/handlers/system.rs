//! System Handlers - 健康检查与缓存统计

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 章节缓存统计数据
#[derive(Debug, Serialize)]
pub struct CacheStatsData {
    pub total_entries: usize,
    pub max_entries: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub eviction_count: u64,
}

/// 章节缓存统计
pub async fn cache_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<CacheStatsData>> {
    let stats = state.resolver.cache_stats();
    Json(ApiResponse::success(CacheStatsData {
        total_entries: stats.total_entries,
        max_entries: stats.max_entries,
        hit_count: stats.hit_count,
        miss_count: stats.miss_count,
        eviction_count: stats.eviction_count,
    }))
}
