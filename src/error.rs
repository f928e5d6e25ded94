use thiserror::Error;

/// 闯关流程结果类型
pub type ChainResult<T> = std::result::Result<T, ChainError>;

/// 闯关流程错误
///
/// 每种错误对当前链都是终止性的：不重试、不跳过、不从后续步骤恢复
#[derive(Debug, Error)]
pub enum ChainError {
    /// 页面渲染失败（导航超时、网络故障、浏览器启动失败）
    #[error("页面渲染失败 ({url}): {reason}")]
    Render { url: String, reason: anyhow::Error },

    /// 页面中没有 "Post your answer to" 提交地址
    #[error("页面中未找到提交地址")]
    MissingSubmitUrl,

    /// 页面中没有受支持的表格资源链接
    #[error("页面中未找到 .xlsx 表格资源链接")]
    UnsupportedResource,

    /// 资源下载失败（网络错误或非 2xx 响应）
    #[error("资源下载失败 ({url}): {source}")]
    ResourceFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 表格文件无法按工作簿解析
    #[error("表格文件无法解析: {0}")]
    InvalidWorkbook(String),

    /// 数据表中没有表头为 value 的列
    #[error("表格中未找到 value 列")]
    MissingValueColumn,

    /// 答案提交失败（网络错误、非 2xx 响应或响应体不是 JSON）
    #[error("答案提交失败 ({url}): {source}")]
    Submission {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ChainError {
    /// 错误种类的稳定短标签，用于终态汇报
    pub fn kind(&self) -> &'static str {
        match self {
            ChainError::Render { .. } => "render_failed",
            ChainError::MissingSubmitUrl => "missing_submit_url",
            ChainError::UnsupportedResource => "unsupported_resource",
            ChainError::ResourceFetch { .. } => "resource_fetch_failed",
            ChainError::InvalidWorkbook(_) => "invalid_workbook",
            ChainError::MissingValueColumn => "missing_value_column",
            ChainError::Submission { .. } => "submission_failed",
        }
    }
}
