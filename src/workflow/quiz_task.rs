//! 闯关任务上下文
//!
//! 封装"谁在闯哪一关"这一信息

use std::fmt::Display;

/// 闯关任务上下文
///
/// email 和 secret 在整条链中不变，current_url 每过一关被替换
#[derive(Debug, Clone)]
pub struct QuizTask {
    /// 提交者邮箱
    pub email: String,

    /// 提交口令
    pub secret: String,

    /// 当前正在处理的题目页面
    pub current_url: String,
}

impl QuizTask {
    /// 创建新的闯关任务
    pub fn new(
        email: impl Into<String>,
        secret: impl Into<String>,
        start_url: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
            current_url: start_url.into(),
        }
    }

    /// 进入下一关
    pub fn advance(&mut self, next_url: String) {
        self.current_url = next_url;
    }
}

impl Display for QuizTask {
    // 不打印 secret
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} @ {}]", self.email, self.current_url)
    }
}
