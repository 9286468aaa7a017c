use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const MAX_RECORD_COUNT: usize = 10_000;

/// Tunables read once at start-up. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub loading_delay_ms: u32,
    pub refresh_interval_ms: u32,
    pub page_size: usize,
    pub record_count: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 2_000,
            refresh_interval_ms: 30_000,
            page_size: crate::pages::dashboard::table::DEFAULT_PAGE_SIZE,
            record_count: 50,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("runtime config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{0}` must be greater than zero")]
    Zero(&'static str),
    #[error("`record_count` must be at most {max}, got {value}")]
    TooManyRecords { value: usize, max: usize },
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<RuntimeConfig>(raw)?.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Zero("page_size"));
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::Zero("refresh_interval_ms"));
        }
        if self.record_count > MAX_RECORD_COUNT {
            return Err(ConfigError::TooManyRecords {
                value: self.record_count,
                max: MAX_RECORD_COUNT,
            });
        }
        Ok(self)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn cache(config: RuntimeConfig) -> RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| config).clone()
}

/// The resolved config, or defaults when [`init`] has not finished.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ConfigError, RuntimeConfig};
    use anyhow::{anyhow, Context};

    const WINDOW_KEY: &str = "__INSIGHTS_CONFIG";

    // window.__INSIGHTS_CONFIG = { page_size: 20, ... }
    pub fn from_window_global() -> Option<Result<RuntimeConfig, ConfigError>> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &WINDOW_KEY.into()).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let raw: String = js_sys::JSON::stringify(&value).ok()?.into();
        Some(RuntimeConfig::from_json(&raw))
    }

    fn config_url() -> anyhow::Result<String> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window`"))?;
        let href = window
            .location()
            .href()
            .map_err(|_| anyhow!("location.href is unavailable"))?;
        let url = web_sys::Url::new_with_base("./config.json", &href)
            .map_err(|_| anyhow!("cannot resolve config.json against {href}"))?;
        Ok(url.href())
    }

    pub async fn fetch() -> anyhow::Result<RuntimeConfig> {
        let url = config_url()?;
        let response = reqwest::get(&url)
            .await
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?;
        let raw = response.text().await.context("reading config.json body")?;
        RuntimeConfig::from_json(&raw).context("decoding config.json")
    }
}

#[cfg(target_arch = "wasm32")]
async fn resolve() -> RuntimeConfig {
    match browser::from_window_global() {
        Some(Ok(config)) => {
            log::info!("Runtime config taken from window global");
            return config;
        }
        Some(Err(err)) => log::warn!("Ignoring window runtime config: {err}"),
        None => {}
    }
    match browser::fetch().await {
        Ok(config) => {
            log::info!("Runtime config loaded from config.json");
            config
        }
        Err(err) => {
            log::warn!("Using default runtime config: {err:#}");
            RuntimeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    cache(resolve().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = RuntimeConfig::from_json(r#"{ "page_size": 25 }"#).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.loading_delay_ms, 2_000);
        assert_eq!(config.refresh_interval_ms, 30_000);
        assert_eq!(config.record_count, 50);
    }

    #[test]
    fn empty_object_is_the_default_config() {
        assert_eq!(RuntimeConfig::from_json("{}").unwrap(), RuntimeConfig::default());
    }

    #[test]
    fn zero_page_size_or_interval_is_rejected() {
        assert!(matches!(
            RuntimeConfig::from_json(r#"{ "page_size": 0 }"#),
            Err(ConfigError::Zero("page_size"))
        ));
        assert!(matches!(
            RuntimeConfig::from_json(r#"{ "refresh_interval_ms": 0 }"#),
            Err(ConfigError::Zero("refresh_interval_ms"))
        ));
    }

    #[test]
    fn oversized_record_count_is_rejected() {
        let err = RuntimeConfig::from_json(r#"{ "record_count": 10001 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooManyRecords {
                value: 10_001,
                max: MAX_RECORD_COUNT
            }
        ));
        assert!(RuntimeConfig::from_json(r#"{ "record_count": 10000 }"#).is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = RuntimeConfig::from_json("{ page_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("runtime config is not valid JSON"));
    }

    #[test]
    fn host_init_resolves_defaults() {
        let resolved = futures::executor::block_on(init());
        assert_eq!(resolved, RuntimeConfig::default());
        assert_eq!(current(), RuntimeConfig::default());
    }
}
