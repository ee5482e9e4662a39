use crate::api::ARTICLES_API_URL;
use crate::internal::aggregator::FetchStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.ron";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Articles endpoint; pages are requested as `<base_url>?page=<n>`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// How many ranked articles to print.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// `Sequential` or `Concurrent` page fetching for pages after the first.
    pub strategy: FetchStrategy,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level used when `RUST_LOG` is not set (e.g. "info", "debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Per-module overrides, e.g. `{"top_articles::api": "debug"}`.
    pub module_levels: BTreeMap<String, String>,
    /// When set, logs go to a daily rotating file in this directory instead of stderr.
    pub log_directory: Option<String>,
}

fn default_base_url() -> String {
    ARTICLES_API_URL.to_string()
}

fn default_top_n() -> usize {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            top_n: default_top_n(),
            strategy: FetchStrategy::default(),
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            module_levels: BTreeMap::new(),
            log_directory: None,
        }
    }
}

impl LoggingConfig {
    /// Build an `EnvFilter` directive string such as `info,top_articles::api=debug`.
    pub fn filter_directive(&self) -> String {
        let mut filter_str = self.level.clone();
        for (module, level) in &self.module_levels {
            filter_str.push_str(&format!(",{}={}", module, level));
        }
        filter_str
    }
}

/// Outcome of the config file search.
///
/// Loading happens before the tracing subscriber exists, so what was found
/// and what was rejected is kept here and logged afterwards with [`ConfigLoad::log`].
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: AppConfig,
    /// File the config came from, `None` when defaults are used.
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed, with the reason.
    pub rejected: Vec<(PathBuf, String)>,
}

impl ConfigLoad {
    pub fn log(&self) {
        for (path, reason) in &self.rejected {
            tracing::error!("Failed to load config at {}: {}", path.display(), reason);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {}", path.display()),
            None => tracing::info!("No config file found, using defaults"),
        }
    }
}

impl AppConfig {
    /// Load configuration from the first readable `config.ron`.
    ///
    /// Search order: `explicit` (if given), the current directory, next to the
    /// executable, then the user config directory. Files that fail to parse
    /// are recorded in [`ConfigLoad::rejected`] and skipped. Falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> ConfigLoad {
        let mut rejected = Vec::new();

        for path in Self::candidates(explicit) {
            if !path.exists() {
                continue;
            }

            let parsed = fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| {
                    ron::from_str::<AppConfig>(&content).map_err(|e| e.to_string())
                });

            match parsed {
                Ok(config) => {
                    return ConfigLoad {
                        config,
                        source: Some(path),
                        rejected,
                    };
                }
                Err(reason) => rejected.push((path, reason)),
            }
        }

        ConfigLoad {
            config: Self::default(),
            source: None,
            rejected,
        }
    }

    fn candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(path) = explicit {
            candidates.push(path.to_path_buf());
        }

        candidates.push(PathBuf::from(CONFIG_FILE_NAME));

        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            candidates.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("top-articles").join(CONFIG_FILE_NAME));
        }

        candidates
    }
}
