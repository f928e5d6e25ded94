use serde::Deserialize;
use tracing::warn;

/// 程序配置文件
///
/// 先读取可选的 config.toml，再用环境变量逐项覆盖；
/// 提交口令没有内置默认值，必须由外部注入
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 服务监听端口
    pub listen_port: u16,
    /// 提交口令，与请求中的 secret 比对
    pub shared_secret: String,
    /// 单条链的总时限（秒）
    pub chain_time_limit_secs: u64,
    /// HTTP 请求超时（秒）
    pub http_timeout_secs: u64,
    /// 页面导航超时（秒）
    pub render_timeout_secs: u64,
    /// 等待网络静默的窗口上限（秒）
    pub network_idle_secs: u64,
    /// 浏览器可执行文件路径，不设置时由 chromiumoxide 自行探测
    pub chrome_executable: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_port: 8000,
            shared_secret: String::new(),
            chain_time_limit_secs: 180,
            http_timeout_secs: 60,
            render_timeout_secs: 30,
            network_idle_secs: 10,
            chrome_executable: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：config.toml（可选）+ 环境变量覆盖
    pub fn load() -> Self {
        Self::from_file("config.toml")
            .unwrap_or_default()
            .apply_env()
    }

    /// 从 TOML 文件读取配置，文件不存在或解析失败时返回 None
    pub fn from_file(path: &str) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("配置文件 {} 解析失败: {}", path, e);
                None
            }
        }
    }

    /// 用环境变量覆盖各配置项
    pub fn apply_env(self) -> Self {
        Self {
            listen_port: env_parse("LISTEN_PORT").unwrap_or(self.listen_port),
            shared_secret: std::env::var("QUIZ_SECRET").unwrap_or(self.shared_secret),
            chain_time_limit_secs: env_parse("CHAIN_TIME_LIMIT_SECS")
                .unwrap_or(self.chain_time_limit_secs),
            http_timeout_secs: env_parse("HTTP_TIMEOUT_SECS").unwrap_or(self.http_timeout_secs),
            render_timeout_secs: env_parse("RENDER_TIMEOUT_SECS")
                .unwrap_or(self.render_timeout_secs),
            network_idle_secs: env_parse("NETWORK_IDLE_SECS").unwrap_or(self.network_idle_secs),
            chrome_executable: std::env::var("CHROME_EXECUTABLE")
                .ok()
                .or(self.chrome_executable),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
