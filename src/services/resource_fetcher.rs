//! 资源下载服务 - 业务能力层
//!
//! 只负责"按 URL 下载原始字节"，不认识工作簿格式

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::error::{ChainError, ChainResult};

/// 资源下载服务
pub struct ResourceFetcher {
    client: reqwest::Client,
}

impl ResourceFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// 下载资源原始字节，非 2xx 响应一律视为失败
    pub async fn fetch(&self, url: &str) -> ChainResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ChainError::ResourceFetch {
                url: url.to_string(),
                source: e,
            })?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ChainError::ResourceFetch {
                url: url.to_string(),
                source: e,
            })?;

        debug!("已下载 {} 字节: {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
