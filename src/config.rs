use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sender: SenderConfig,
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 邮件落款 (固定发件人身份)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderConfig {
    pub name: String,
    pub title: String,
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// 请求未指定延迟阈值时使用
    pub default_min_delay: i64,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            name: "Ramkumar".to_string(),
            title: "Sr. GM – Procurement".to_string(),
            company: "Thermopads Pvt. Ltd.".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            sender: SenderConfig::default(),
            filter: FilterConfig {
                default_min_delay: 30,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> me2l-followup.toml (可选) -> ME2L__ 前缀环境变量
    pub fn from_env() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid configuration, falling back to defaults: {}", e);
                Self::default()
            }
        }
    }

    fn load() -> Result<Self, config::ConfigError> {
        Self::defaults_builder()?
            .add_source(config::File::with_name("me2l-followup").required(false))
            .add_source(
                config::Environment::with_prefix("ME2L")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// 只含默认值的配置层, 文件和环境变量叠加在其上
    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("sender.name", defaults.sender.name)?
            .set_default("sender.title", defaults.sender.title)?
            .set_default("sender.company", defaults.sender.company)?
            .set_default("filter.default_min_delay", defaults.filter.default_min_delay)
    }
}
