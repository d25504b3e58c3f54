//! Yuedu - 小说在线阅读服务
//!
//! 架构分层:
//! - Domain: novel/, chapterizer (分章规则)
//! - Application: queries, ports
//! - Infrastructure: http, archive, library, memory

use std::sync::Arc;

use yuedu::config::{load_config, print_config};
use yuedu::infrastructure::archive::ZipArchiveSource;
use yuedu::infrastructure::http::{AppState, HttpServer, ServerConfig};
use yuedu::infrastructure::library::NovelLibrary;
use yuedu::infrastructure::memory::CachedChapterResolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},yuedu={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Yuedu - 小说在线阅读服务");
    print_config(&config);

    // 确保数据目录存在
    tokio::fs::create_dir_all(&config.library.novels_dir).await?;
    tokio::fs::create_dir_all(&config.server.static_dir).await?;

    // 创建小说库适配器
    let library = Arc::new(NovelLibrary::new(
        &config.library.novels_dir,
        &config.library.archive_suffix,
    ));

    // 创建 ZIP 文本提取器与章节缓存
    let source = Arc::new(ZipArchiveSource::new());
    let resolver = Arc::new(CachedChapterResolver::new(source, config.cache.max_entries));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(library, resolver, &config.server.static_dir);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
