use crate::error::MintError;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub generator: GeneratorConfig,
}

/// Length bounds for generated passwords, both inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:passmint.sqlite".to_string(),
            loglevel: "info".to_string(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_len: 8,
            max_len: 16,
        }
    }
}

impl Config {
    /// Defaults overlaid with `PASSMINT_*` environment variables.
    /// Nested keys use `__`, e.g. `PASSMINT_GENERATOR__MAX_LEN=20`.
    pub fn load() -> Result<Self, MintError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("PASSMINT_").split("__"))
            .extract()?;
        Ok(cfg)
    }
}
