//! 链接提取服务 - 业务能力层
//!
//! 只做两条相互独立的文本模式扫描，不解析完整 HTML；
//! 每条模式只取第一个匹配，后面的出现全部忽略

use regex::Regex;
use tracing::debug;

use crate::error::{ChainError, ChainResult};

/// 从渲染后的页面中提取到的链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLinks {
    /// 答案提交地址
    pub submit_url: String,
    /// 表格资源链接，页面上可能没有
    pub resource: Option<ResourceLink>,
}

/// 表格资源链接，按资源类型区分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLink {
    /// Excel 工作簿 (.xlsx)
    Workbook(String),
}

impl ResourceLink {
    pub fn url(&self) -> &str {
        match self {
            ResourceLink::Workbook(url) => url,
        }
    }
}

/// 链接提取服务
pub struct LinkExtractor {
    submit_re: Regex,
    workbook_re: Regex,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            submit_re: Regex::new(r"Post your answer to\s+(https?://\S+)").expect("合法的正则"),
            workbook_re: Regex::new(r#"(?i)href="(https?://[^"]+\.xlsx)""#).expect("合法的正则"),
        }
    }

    /// 扫描页面文本，提取提交地址和表格资源链接
    ///
    /// 提交地址缺失直接报错；资源链接缺失由上层决定如何处理
    pub fn extract(&self, html: &str) -> ChainResult<ExtractedLinks> {
        let submit_url = self
            .submit_re
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(ChainError::MissingSubmitUrl)?;
        debug!("提交地址: {}", submit_url);

        let resource = self
            .workbook_re
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| ResourceLink::Workbook(m.as_str().to_string()));
        match &resource {
            Some(link) => debug!("表格资源链接: {}", link.url()),
            None => debug!("页面中没有表格资源链接"),
        }

        Ok(ExtractedLinks {
            submit_url,
            resource,
        })
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_submit_url_and_workbook_link() {
        let html = concat!(
            "<html><body><p>Post your answer to https://x/submit right away</p>",
            r#"<a href="https://x/data.xlsx">report</a></body></html>"#,
        );

        let links = LinkExtractor::new().extract(html).unwrap();
        assert_eq!(links.submit_url, "https://x/submit");
        assert_eq!(
            links.resource,
            Some(ResourceLink::Workbook("https://x/data.xlsx".to_string()))
        );
    }

    #[test]
    fn missing_submit_phrase_is_an_error() {
        let html = r#"<a href="https://x/data.xlsx">report</a>"#;
        let err = LinkExtractor::new().extract(html).unwrap_err();
        assert!(matches!(err, ChainError::MissingSubmitUrl));
    }

    #[test]
    fn missing_workbook_link_leaves_resource_empty() {
        let html = "Post your answer to https://x/submit and good luck";
        let links = LinkExtractor::new().extract(html).unwrap();
        assert_eq!(links.resource, None);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let html = concat!(
            "Post your answer to https://x/submit ",
            r#"<a HREF="https://x/DATA.XLSX">report</a>"#,
        );
        let links = LinkExtractor::new().extract(html).unwrap();
        assert_eq!(
            links.resource,
            Some(ResourceLink::Workbook("https://x/DATA.XLSX".to_string()))
        );
    }

    #[test]
    fn only_first_match_of_each_pattern_is_used() {
        let html = concat!(
            "Post your answer to https://x/submit-1\n",
            "Post your answer to https://x/submit-2\n",
            r#"<a href="https://x/first.xlsx"></a><a href="https://x/second.xlsx"></a>"#,
        );

        let links = LinkExtractor::new().extract(html).unwrap();
        assert_eq!(links.submit_url, "https://x/submit-1");
        assert_eq!(
            links.resource,
            Some(ResourceLink::Workbook("https://x/first.xlsx".to_string()))
        );
    }

    #[test]
    fn other_extensions_are_not_supported() {
        let html = concat!(
            "Post your answer to https://x/submit ",
            r#"<a href="https://x/data.csv">report</a>"#,
        );
        let links = LinkExtractor::new().extract(html).unwrap();
        assert_eq!(links.resource, None);
    }
}
