// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{LookupError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://www.wordnik.com";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.169 Safari/537.36";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub lookup: LookupConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    pub base_url: String,
    pub user_agent: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub strict_extraction: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub styled: bool,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

/// What to do when some words of a batch fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// The first failure, in input order, fails the whole batch and nothing is printed.
    #[default]
    Abort,
    /// Successful words are printed and failures are reported per word.
    Isolate,
}

impl Config {
    /// Layers built-in defaults, the optional TOML file and
    /// `DICT_LOOKUP__SECTION__KEY` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| LookupError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DICT_LOOKUP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| LookupError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| LookupError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            lookup: LookupConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                user_agent: DEFAULT_USER_AGENT.to_string(),
                request_timeout_secs: None,
                strict_extraction: false,
            },
            output: OutputConfig {
                styled: true,
                failure_policy: FailurePolicy::Abort,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.lookup.base_url)
            .map_err(|e| LookupError::Config(e.to_string()))?;

        if self.lookup.user_agent.trim().is_empty() {
            return Err(LookupError::Config(
                "user_agent must not be empty".to_string(),
            ));
        }

        if self.lookup.request_timeout_secs == Some(0) {
            return Err(LookupError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
