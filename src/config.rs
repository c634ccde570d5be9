//! Client configuration baked in at build time.
//!
//! Variables are read with `option_env!` when the WASM bundle is compiled:
//! - `RLARNDG_API_BASE`: API origin prefix, empty for same-origin (default)
//! - `RLARNDG_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
//! - `RLARNDG_SOURCE_URL`: link target for the top bar "Source" entry

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/RustLangES/rlarndg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub log_level: log::Level,
    pub source_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_vars(None, None, None)
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("RLARNDG_API_BASE"),
            option_env!("RLARNDG_LOG_LEVEL"),
            option_env!("RLARNDG_SOURCE_URL"),
        )
    }

    fn from_vars(api_base: Option<&str>, log_level: Option<&str>, source_url: Option<&str>) -> Self {
        Self {
            api_base: parse_api_base(api_base),
            log_level: parse_log_level(log_level),
            source_url: source_url
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_SOURCE_URL)
                .to_owned(),
        }
    }

    /// Prefix `path` with the configured API base.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

/// Process-wide configuration, resolved once.
pub fn config() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_build_env)
}

fn parse_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}
