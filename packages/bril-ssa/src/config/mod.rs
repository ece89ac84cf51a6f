//! Configuration system

pub mod error;
pub mod ssa_config;

pub use error::{ConfigError, ConfigResult};
pub use ssa_config::{ConfigFileV1, SsaConfig, ENV_CONFIG_PATH, ENV_PARALLEL, ENV_VERIFY};
