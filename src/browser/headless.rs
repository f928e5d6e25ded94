use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;

/// 启动无头浏览器渲染页面，返回完整的 HTML
///
/// 每次调用独立启动一个浏览器实例，返回前整体销毁，
/// 调用之间不复用任何浏览器状态
pub async fn render_page(url: &str, config: &Config) -> Result<String> {
    info!("🚀 启动无头浏览器...");
    debug!("目标 URL: {}", url);

    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",
        "--no-sandbox",              // 禁用沙盒，防止权限问题导致的崩溃
        "--disable-dev-shm-usage",   // 防止共享内存不足
        "--remote-debugging-port=0", // 让浏览器自动选择端口
    ]);
    if let Some(chrome) = &config.chrome_executable {
        builder = builder.chrome_executable(Path::new(chrome));
    }
    let browser_config = builder
        .build()
        .map_err(|e| anyhow::anyhow!("配置无头浏览器失败: {}", e))?;

    // 启动浏览器
    let (mut browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("启动无头浏览器失败")?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(Duration::from_millis(300)).await;

    let result = render_in_page(&browser, url, config).await;

    // 渲染成功与否都要销毁浏览器实例
    if let Err(e) = browser.close().await {
        warn!("关闭浏览器失败: {}", e);
    }
    handler_task.abort();

    result
}

/// 在新页面中导航并捕获渲染后的 DOM
async fn render_in_page(browser: &Browser, url: &str, config: &Config) -> Result<String> {
    let page = browser
        .new_page("about:blank")
        .await
        .context("创建页面失败")?;

    let navigation_timeout = Duration::from_secs(config.render_timeout_secs);
    match timeout(navigation_timeout, page.goto(url)).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => anyhow::bail!("导航到 {} 失败: {}", url, e),
        Err(_) => anyhow::bail!("导航到 {} 超时 ({} 秒)", url, config.render_timeout_secs),
    }
    let _ = page.wait_for_navigation().await;

    wait_for_network_idle(&page, Duration::from_secs(config.network_idle_secs)).await;

    let html: String = page
        .evaluate("document.documentElement.outerHTML")
        .await
        .context("读取页面内容失败")?
        .into_value()
        .map_err(|e| anyhow::anyhow!("页面内容不是字符串: {}", e))?;

    info!("✅ 页面渲染完成: {}", url);

    let _ = page.close().await;
    Ok(html)
}

/// 等待页面网络活动静默
///
/// 资源计数在两次采样之间保持不变即视为静默；整个等待有窗口上限，
/// 不是固定时长的定时器
async fn wait_for_network_idle(page: &Page, max_wait: Duration) {
    const PROBE_JS: &str = "window.performance.getEntriesByType('resource').length";

    let deadline = Instant::now() + max_wait;
    let mut last_count: i64 = -1;

    while Instant::now() < deadline {
        let count: i64 = match page.evaluate(PROBE_JS).await {
            Ok(result) => result.into_value().unwrap_or(-1),
            Err(e) => {
                debug!("网络静默探测失败: {}", e);
                return;
            }
        };

        if count >= 0 && count == last_count {
            debug!("网络已静默 (资源数: {})", count);
            return;
        }
        last_count = count;

        sleep(Duration::from_millis(250)).await;
    }

    warn!("⚠️ 等待网络静默超过 {:?}，继续后续流程", max_wait);
}
