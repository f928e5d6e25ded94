//! API 模块
//!
//! 对外 HTTP 接口：校验口令并派发后台闯关任务

pub mod quiz;

// 重新导出常用函数
pub use quiz::{router, serve, AppState, QuizRequest};
