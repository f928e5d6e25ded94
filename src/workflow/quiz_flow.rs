//! 单关处理流程 - 流程层
//!
//! 核心职责：定义"一关"的完整处理流程
//!
//! 流程顺序：
//! 1. 渲染页面 → 提取链接
//! 2. 下载表格资源 → 计算答案
//! 3. 提交答案 → 读取下一关地址

use anyhow::Result;
use tracing::info;

use crate::browser;
use crate::config::Config;
use crate::error::{ChainError, ChainResult};
use crate::services::{AnswerComputer, LinkExtractor, ResourceFetcher, SubmitClient};
use crate::workflow::quiz_task::QuizTask;

/// 单关处理流程
///
/// - 编排一关内的各个步骤
/// - 任一步骤失败立即返回，不重试、不跳步
/// - 不持有链条状态（deadline / current_url 归编排层管）
pub struct QuizFlow {
    extractor: LinkExtractor,
    fetcher: ResourceFetcher,
    computer: AnswerComputer,
    submitter: SubmitClient,
    config: Config,
}

impl QuizFlow {
    /// 创建新的单关处理流程
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: LinkExtractor::new(),
            fetcher: ResourceFetcher::new(config)?,
            computer: AnswerComputer::new(),
            submitter: SubmitClient::new(config)?,
            config: config.clone(),
        })
    }

    /// 处理一关，成功时返回下一关地址（没有下一关则返回 None）
    pub async fn run(&self, task: &QuizTask) -> ChainResult<Option<String>> {
        // 1. 渲染页面
        info!("🔍 正在渲染页面: {}", task.current_url);
        let html = browser::render_page(&task.current_url, &self.config)
            .await
            .map_err(|e| ChainError::Render {
                url: task.current_url.clone(),
                reason: e,
            })?;
        info!("✓ 页面渲染完成 ({} 字符)", html.chars().count());

        if self.config.verbose_logging {
            self.log_markup_preview(&html);
        }

        // 2. 提取链接
        let links = self.extractor.extract(&html)?;
        let resource = links.resource.ok_or(ChainError::UnsupportedResource)?;

        // 3. 下载表格资源
        info!("📥 正在下载表格资源: {}", resource.url());
        let bytes = self.fetcher.fetch(resource.url()).await?;
        info!("✓ 下载完成 ({} 字节)", bytes.len());

        // 4. 计算答案
        let answer = self.computer.compute(&bytes)?;
        info!("🧮 计算出答案: {}", answer);

        // 5. 提交答案
        info!("📤 正在提交答案到: {}", links.submit_url);
        let next_url = self.submitter.submit(task, &links.submit_url, answer).await?;

        match &next_url {
            Some(url) => info!("✓ 提交成功，下一关: {}", url),
            None => info!("✓ 提交成功，没有下一关"),
        }

        Ok(next_url)
    }

    /// 显示渲染结果预览
    fn log_markup_preview(&self, html: &str) {
        let preview = if html.chars().count() > 200 {
            html.chars().take(200).collect::<String>() + "..."
        } else {
            html.to_string()
        };
        info!("页面内容: {}", preview);
    }
}
