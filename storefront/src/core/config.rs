use std::time::Duration;

use chrono_tz::Tz;

use crate::utils::time::{DEFAULT_TIMEZONE, parse_timezone};

/// Host configuration - everything the runtime needs besides the business data
///
/// # 环境变量
///
/// All values can be overridden through environment variables (`.env` is
/// loaded first when present):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_CONFIG_PATH | store.json | Business config file (JSON) |
/// | STORE_TIMEZONE | America/Sao_Paulo | Zone used for "local" opening hours |
/// | STATUS_REFRESH_SECS | 60 | Open/closed re-evaluation period |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
/// | ENVIRONMENT | development | `production` logs JSON lines |
///
/// # 示例
///
/// ```ignore
/// STORE_CONFIG_PATH=store.example.json STATUS_REFRESH_SECS=5 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Business config file path
    pub store_config_path: String,
    /// Business time zone
    pub timezone: Tz,
    /// Status refresh period in seconds
    pub status_refresh_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            store_config_path: std::env::var("STORE_CONFIG_PATH")
                .unwrap_or_else(|_| "store.json".into()),
            timezone: std::env::var("STORE_TIMEZONE")
                .map(|tz| parse_timezone(&tz))
                .unwrap_or(DEFAULT_TIMEZONE),
            status_refresh_secs: std::env::var("STATUS_REFRESH_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(60),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(store_config_path: impl Into<String>, timezone: Tz) -> Self {
        let mut config = Self::from_env();
        config.store_config_path = store_config_path.into();
        config.timezone = timezone;
        config
    }

    /// Refresh period, never shorter than one second
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.status_refresh_secs.max(1))
    }

    /// Production switches logging to JSON lines
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
