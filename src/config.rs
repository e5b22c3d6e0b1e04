//! Configuration management for the FAQ lookup server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the .env
//! file silently if present.

use crate::error::{ConfigError, ConfigResult};
use crate::matching::DuplicatePolicy;
use crate::search::StrategyKind;
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Where the corpus snapshot is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// `http://` or `https://` URL
    Url(String),
    /// Local filesystem path
    Path(PathBuf),
}

impl DataSource {
    /// Classify a raw setting: URLs by scheme, anything else is a path.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "FAQ_DATA_SOURCE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(Self::Url(raw.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(raw)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration for the FAQ lookup server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Corpus snapshot location
    pub data_source: DataSource,

    /// Ranking strategy for FAQ entries (default: lexical)
    pub strategy: StrategyKind,

    /// Directory for the persistent embedding cache (default: in-memory only)
    pub cache_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Maximum number of contacts shown (default: 5)
    pub max_contact_results: usize,

    /// Maximum number of related suggestions (default: 2)
    pub max_related_results: usize,

    /// Minimum cosine similarity for embedding matches (default: 0.35)
    pub embedding_threshold: f32,

    /// Width of the hashing embedder (default: 256)
    pub embedding_dimensions: usize,

    /// Fuzzy distance threshold, 0-1 (default: 0.3)
    pub fuzzy_threshold: f64,

    /// How content-identical rows are reported (default: distinct)
    pub duplicate_policy: DuplicatePolicy,

    /// Tracing filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `FAQ_DATA_SOURCE`: URL or path of the corpus JSON document
    ///
    /// Optional environment variables:
    /// - `FAQ_STRATEGY`: `lexical`, `fuzzy` or `embedding` (default: lexical)
    /// - `FAQ_CACHE_DIR`: embedding cache directory (default: unset)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `MAX_CONTACT_RESULTS`: contact panel cap (default: 5)
    /// - `MAX_RELATED_RESULTS`: related suggestion cap (default: 2)
    /// - `EMBEDDING_THRESHOLD`: cosine threshold in [-1, 1] (default: 0.35)
    /// - `EMBEDDING_DIMENSIONS`: hashing embedder width (default: 256)
    /// - `FUZZY_THRESHOLD`: fuzzy distance threshold in [0, 1] (default: 0.3)
    /// - `MERGE_DUPLICATE_ROWS`: merge content-identical rows (default: false)
    /// - `LOG_LEVEL`: tracing filter directive, overridden by `RUST_LOG` (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let raw_source = env::var("FAQ_DATA_SOURCE")
            .map_err(|_| ConfigError::MissingVar("FAQ_DATA_SOURCE".to_string()))?;
        let data_source = DataSource::parse(&raw_source)?;

        let strategy = match env::var("FAQ_STRATEGY") {
            Ok(val) => val
                .parse::<StrategyKind>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "FAQ_STRATEGY".to_string(),
                    reason,
                })?,
            Err(_) => StrategyKind::default(),
        };

        let cache_dir = env::var("FAQ_CACHE_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let max_contact_results = Self::parse_env_usize("MAX_CONTACT_RESULTS", 5)?;
        let max_related_results = Self::parse_env_usize("MAX_RELATED_RESULTS", 2)?;

        let embedding_threshold = Self::parse_env_f32("EMBEDDING_THRESHOLD", 0.35)?;
        if !(-1.0..=1.0).contains(&embedding_threshold) {
            return Err(ConfigError::InvalidValue {
                var: "EMBEDDING_THRESHOLD".to_string(),
                reason: "Must be between -1 and 1".to_string(),
            });
        }

        let embedding_dimensions = Self::parse_env_usize("EMBEDDING_DIMENSIONS", 256)?;
        if embedding_dimensions == 0 {
            return Err(ConfigError::InvalidValue {
                var: "EMBEDDING_DIMENSIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let fuzzy_threshold = Self::parse_env_f64("FUZZY_THRESHOLD", 0.3)?;
        if !(0.0..=1.0).contains(&fuzzy_threshold) {
            return Err(ConfigError::InvalidValue {
                var: "FUZZY_THRESHOLD".to_string(),
                reason: "Must be between 0 and 1".to_string(),
            });
        }

        let duplicate_policy = if Self::parse_env_bool("MERGE_DUPLICATE_ROWS", false)? {
            DuplicatePolicy::MergeIdentical
        } else {
            DuplicatePolicy::Distinct
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if let Err(e) = EnvFilter::try_new(&log_level) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            });
        }

        Ok(Config {
            data_source,
            strategy,
            cache_dir,
            request_timeout,
            max_contact_results,
            max_related_results,
            embedding_threshold,
            embedding_dimensions,
            fuzzy_threshold,
            duplicate_policy,
            log_level,
        })
    }

    /// Tracing filter: `RUST_LOG` when set, otherwise `log_level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_f32(var_name: &str, default: f32) -> ConfigResult<f32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<f32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag (true/false, 1/0, yes/no).
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_source: DataSource::Path(PathBuf::from("data.json")),
            strategy: StrategyKind::Lexical,
            cache_dir: None,
            request_timeout: 10,
            max_contact_results: 5,
            max_related_results: 2,
            embedding_threshold: 0.35,
            embedding_dimensions: 256,
            fuzzy_threshold: 0.3,
            duplicate_policy: DuplicatePolicy::Distinct,
            log_level: "error".to_string(),
        }
    }
}
