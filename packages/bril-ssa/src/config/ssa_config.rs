//! Runtime configuration for the SSA conversion
//!
//! Layered, later sources override earlier ones:
//! 1. Defaults (sequential, verification on)
//! 2. YAML file named by `BRIL_SSA_CONFIG`
//! 3. `BRIL_SSA_PARALLEL` / `BRIL_SSA_VERIFY` environment variables
//!
//! ```yaml
//! version: 1
//! parallel: true
//! verify: false
//! ```

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Path of an optional YAML configuration file
pub const ENV_CONFIG_PATH: &str = "BRIL_SSA_CONFIG";
pub const ENV_PARALLEL: &str = "BRIL_SSA_PARALLEL";
pub const ENV_VERIFY: &str = "BRIL_SSA_VERIFY";

const SUPPORTED_VERSIONS: [u32; 1] = [1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsaConfig {
    /// Convert functions on the rayon pool. Output is identical either way.
    pub parallel: bool,

    /// Check SSA post-conditions after each function
    pub verify: bool,
}

impl Default for SsaConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            verify: true,
        }
    }
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
}

impl SsaConfig {
    /// Defaults, then the YAML file and environment overrides
    pub fn load() -> ConfigResult<Self> {
        Self::load_with(|var| std::env::var(var).ok())
    }

    /// [`SsaConfig::load`] with an explicit environment lookup
    pub fn load_with<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_CONFIG_PATH).filter(|p| !p.is_empty()) {
            config = config.merge_yaml_file(&path)?;
        }

        config.apply_env(lookup)
    }

    /// Parse a YAML document on top of `self`
    pub fn merge_yaml(self, content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        Ok(Self {
            parallel: file.parallel.unwrap_or(self.parallel),
            verify: file.verify.unwrap_or(self.verify),
        })
    }

    pub fn merge_yaml_file(self, path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        tracing::debug!("Loaded configuration from {}", path);
        self.merge_yaml(&content)
    }

    fn apply_env<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PARALLEL) {
            self.parallel = parse_flag(ENV_PARALLEL, &value)?;
        }
        if let Some(value) = lookup(ENV_VERIFY) {
            self.verify = parse_flag(ENV_VERIFY, &value)?;
        }
        Ok(self)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            parallel: Some(self.parallel),
            verify: Some(self.verify),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

fn parse_flag(var: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
