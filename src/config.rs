use serde::{Deserialize, Serialize};

pub const DEFAULT_GENERIC_FEED_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_YOGA_FEED_URL: &str = "https://api.npoint.io/4459a9a10e43812e1152";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub generic_feed_url: String,
    pub yoga_feed_url: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generic_feed_url: DEFAULT_GENERIC_FEED_URL.to_string(),
            yoga_feed_url: DEFAULT_YOGA_FEED_URL.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GENERIC_FEED_URL"),
            option_env!("YOGA_FEED_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        generic_feed_url: Option<&str>,
        yoga_feed_url: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            generic_feed_url: non_empty(generic_feed_url).unwrap_or(defaults.generic_feed_url),
            yoga_feed_url: non_empty(yoga_feed_url).unwrap_or(defaults.yoga_feed_url),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: non_empty(log_level).unwrap_or(defaults.log_level),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Level handed to the console logger; unknown names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
