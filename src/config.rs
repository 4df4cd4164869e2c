//! List configuration.
//!
//! Supports a YAML file and environment variable overrides.

use serde::Deserialize;

use crate::error::Result;
use crate::list::MAX_CAPACITY;

/// Default configuration file name (extension resolved by the loader).
pub const DEFAULT_CONFIG_FILE: &str = "boundlist";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "BOUNDLIST_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "BOUNDLIST";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "BOUNDLIST_LOG";

/// Settings applied to lists built with [`BoundedList::from_config`].
///
/// [`BoundedList::from_config`]: crate::BoundedList::from_config
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Maximum number of records a list may hold.
    ///
    /// Default: 5,000.
    pub capacity: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CAPACITY,
        }
    }
}

impl ListConfig {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `boundlist.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, e.g.
    ///    `BOUNDLIST__CAPACITY=100`
    pub fn load(path: Option<&str>) -> Result<Self> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ListConfig = config.try_deserialize()?;
        tracing::debug!(capacity = config.capacity, "loaded list configuration");
        Ok(config)
    }

    /// Create config for testing.
    pub fn for_test() -> Self {
        Self::default()
    }
}
