//! 答案提交服务 - 业务能力层
//!
//! 把算好的答案 POST 到提交地址，读取下一关地址

use std::time::Duration;

use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::error::{ChainError, ChainResult};
use crate::workflow::QuizTask;

/// 答案提交服务
pub struct SubmitClient {
    client: reqwest::Client,
}

impl SubmitClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// 提交答案并读取下一关地址
    ///
    /// 响应 JSON 中 url 字段缺失或为空字符串都视为没有下一关
    pub async fn submit(
        &self,
        task: &QuizTask,
        submit_url: &str,
        answer: f64,
    ) -> ChainResult<Option<String>> {
        let payload = json!({
            "email": task.email,
            "secret": task.secret,
            "url": task.current_url,
            "answer": answer,
        });

        let response = self
            .client
            .post(submit_url)
            .json(&payload)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ChainError::Submission {
                url: submit_url.to_string(),
                source: e,
            })?;

        let body: Value = response.json().await.map_err(|e| ChainError::Submission {
            url: submit_url.to_string(),
            source: e,
        })?;
        debug!("提交响应: {}", body);

        let next_url = body
            .get("url")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(next_url)
    }
}
