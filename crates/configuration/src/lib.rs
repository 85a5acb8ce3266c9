use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    AnalysisConfig, Config, CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig,
    StorageBackend, StorageConfig,
};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `POKERRANGE__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "POKERRANGE";

/// Loads the application configuration from `config.toml` and the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new(DEFAULT_CONFIG_FILE))
}

/// Loads the configuration from an explicit file path.
///
/// The file is optional: a missing file leaves every section at its default.
/// Environment variables are layered on top of whatever the file provides.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(environment());
    finish(builder)
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Rejects settings that deserialize fine but cannot work at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "server.body_limit_bytes must be positive".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
