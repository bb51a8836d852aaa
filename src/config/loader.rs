//! ConfigLoader: composes config sources and deserializes to [`AppConfig`].

use super::AppConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "sportsdesk.toml";

/// Environment prefix; nested keys use `__`, e.g. `SPORTSDESK__STORAGE__DATA_DIR`.
pub const ENV_PREFIX: &str = "SPORTSDESK";

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `sportsdesk.toml` from `working_dir` if present, then the environment.
    pub fn load(working_dir: &Path) -> Result<AppConfig, ConfigError> {
        Self::load_with_env_prefix(working_dir, ENV_PREFIX)
    }

    /// Same as [`ConfigLoader::load`] with environment keys read under `prefix`.
    pub fn load_with_env_prefix(working_dir: &Path, prefix: &str) -> Result<AppConfig, ConfigError> {
        let path = working_dir.join(DEFAULT_CONFIG_FILE);
        let builder = Config::builder().add_source(File::from(path).required(false));
        Self::finish(builder, prefix)
    }

    /// Load a specific file, which must exist, then the environment.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
        let builder = Config::builder().add_source(File::from(path).required(true));
        Self::finish(builder, ENV_PREFIX)
    }

    fn finish(
        builder: ConfigBuilder<DefaultState>,
        prefix: &str,
    ) -> Result<AppConfig, ConfigError> {
        let builder = builder.add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
        builder.build()?.try_deserialize()
    }
}
