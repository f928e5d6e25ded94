//! # Quiz Chain Solver
//!
//! 一个用于自动闯关解题的 Rust 服务：渲染题目页面、提取链接、
//! 下载表格资源、计算答案并提交，有下一关就继续，直到结束
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Browser）
//! - `browser/` - 无头浏览器渲染能力，每次渲染独立启动、用完销毁
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单步操作
//! - `LinkExtractor` - 提交地址 / 表格资源链接提取能力
//! - `ResourceFetcher` - 资源下载能力
//! - `AnswerComputer` - 表格解析与求和能力
//! - `SubmitClient` - 答案提交能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一关"的完整处理流程
//! - `QuizTask` - 任务上下文封装（email + secret + 当前 URL）
//! - `QuizFlow` - 流程编排（渲染 → 提取 → 下载 → 计算 → 提交）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/chain_driver` - 链条驱动，循环处理直到终态
//!
//! ### ⑤ 接口层（Api）
//! - `api/` - 对外 HTTP 接口，校验口令并派发后台闯关任务
//!
//! ## 模块结构

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod logger;
pub mod orchestrator;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use browser::render_page;
pub use config::Config;
pub use error::{ChainError, ChainResult};
pub use orchestrator::{ChainDriver, ChainOutcome};
pub use services::{
    AnswerComputer, ExtractedLinks, LinkExtractor, ResourceFetcher, ResourceLink, SubmitClient,
};
pub use workflow::{QuizFlow, QuizTask};
