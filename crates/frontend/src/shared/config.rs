use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::shared::notification::AUTO_HIDE_MS;
use crate::state::AskPolicy;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub ask: AskConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub auto_hide_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: AUTO_HIDE_MS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AskConfig {
    #[serde(default)]
    pub policy: AskPolicy,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"

[notifications]
auto_hide_ms = 5000

[ask]
policy = "last_resolved_wins"
"#;

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid configuration, using defaults: {}", e);
        Config {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
            },
            notifications: NotificationConfig::default(),
            ask: AskConfig::default(),
        }
    }
});

/// Load the embedded configuration
///
/// `DOCUMATE_API_BASE`, when set at build time, replaces `api.base_url`.
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG, option_env!("DOCUMATE_API_BASE"))
}

fn parse_config(contents: &str, base_url_override: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Some(base_url) = base_url_override.filter(|s| !s.trim().is_empty()) {
        config.api.base_url = base_url.trim().to_string();
    }
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    Ok(config)
}

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static Config {
    &CONFIG
}
