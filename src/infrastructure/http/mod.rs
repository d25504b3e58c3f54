//! HTTP 基础设施层
//!
//! 提供 HTTP 服务器、路由、处理器等

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, PageError};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
