//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整条链的推进和终态判定，是闯关流程的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `chain_driver` - 链条驱动
//! - 持有单条链的全部状态（起始时刻、截止时刻、当前 URL、关数）
//! - 每轮迭代先查截止时刻，再把当前 URL 交给 workflow 处理
//! - 根据处理结果决定继续、完成或中止
//!
//! ## 层次关系
//!
//! ```text
//! api (接受请求，派发后台任务)
//!     ↓
//! chain_driver (循环推进整条链)
//!     ↓
//! workflow::QuizFlow (处理单独一关)
//!     ↓
//! services (能力层：extract / fetch / compute / submit)
//!     ↓
//! browser (基础设施：无头渲染)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单链串行**：链内没有并行，步骤严格按序执行
//! 2. **协作取消**：只在迭代边界检查超时，不中断进行中的步骤
//! 3. **终态即终点**：到达终态后只汇报，不做任何后续动作

pub mod chain_driver;

// 重新导出主要类型
pub use chain_driver::{ChainDriver, ChainOutcome};
