//! 链条驱动 - 编排层
//!
//! 从起始 URL 开始循环处理，每关结束后根据响应里的下一关地址
//! 决定继续还是收尾；整条链共享一个截止时刻

use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::ChainError;
use crate::workflow::{QuizFlow, QuizTask};

/// 整条链的终态
#[derive(Debug)]
pub enum ChainOutcome {
    /// 全部关卡处理完毕，没有下一关
    Completed { steps: usize },
    /// 某一关处理失败，链条就地中止
    Failed { steps: usize, error: ChainError },
    /// 到达截止时刻，链条不再继续
    TimedOut { steps: usize, elapsed: Duration },
}

impl ChainOutcome {
    /// 终态的一行汇报
    pub fn summary(&self) -> String {
        match self {
            ChainOutcome::Completed { steps } => {
                format!("✅ 全部完成，共 {} 关", steps)
            }
            ChainOutcome::Failed { steps, error } => {
                format!("❌ 第 {} 关失败 [{}]: {}", steps, error.kind(), error)
            }
            ChainOutcome::TimedOut { steps, elapsed } => {
                format!(
                    "⏰ 超时中止 (已完成 {} 关, 用时 {:.0} 秒)",
                    steps,
                    elapsed.as_secs_f64()
                )
            }
        }
    }
}

/// 链条驱动
///
/// 独占持有一条链的全部状态，链与链之间不共享任何资源
pub struct ChainDriver {
    flow: QuizFlow,
    time_limit: Duration,
}

impl ChainDriver {
    /// 创建新的链条驱动
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            flow: QuizFlow::new(config)?,
            time_limit: Duration::from_secs(config.chain_time_limit_secs),
        })
    }

    /// 从任务的起始 URL 开始推进整条链，返回终态
    ///
    /// 超时只在迭代边界检查，已经开始的一关不会被中断
    pub async fn run(&self, mut task: QuizTask) -> ChainOutcome {
        let started = Instant::now();
        let deadline = started + self.time_limit;
        let mut steps = 0usize;

        loop {
            if Instant::now() >= deadline {
                let outcome = ChainOutcome::TimedOut {
                    steps,
                    elapsed: started.elapsed(),
                };
                warn!("{}", outcome.summary());
                log_chain_finished();
                return outcome;
            }

            log_step_start(steps + 1, &task);

            match self.flow.run(&task).await {
                Ok(Some(next_url)) => {
                    steps += 1;
                    task.advance(next_url);
                }
                Ok(None) => {
                    steps += 1;
                    let outcome = ChainOutcome::Completed { steps };
                    info!("{}", outcome.summary());
                    log_chain_finished();
                    return outcome;
                }
                Err(e) => {
                    let outcome = ChainOutcome::Failed {
                        steps: steps + 1,
                        error: e,
                    };
                    error!("{}", outcome.summary());
                    log_chain_finished();
                    return outcome;
                }
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_step_start(step: usize, task: &QuizTask) {
    info!("\n{}", "=".repeat(60));
    info!("📄 第 {} 关: {}", step, task.current_url);
    info!("{}", "=".repeat(60));
}

fn log_chain_finished() {
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
