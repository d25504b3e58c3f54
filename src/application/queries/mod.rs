//! 应用层 - 查询（读操作）
//!
//! 本服务只读，没有命令侧：所有用例都是查询

mod novel_queries;

pub mod handlers;

pub use novel_queries::*;
