// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    Config, ContentConfig, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig,
    ServerConfig,
};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from the given file path (without extension)
    ///
    /// The file is optional; `ESQUIE_*` environment variables override it,
    /// using `__` between nested keys (e.g. `ESQUIE_SERVER__PORT=9000`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, Self::environment())
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        Self::builder(config_path)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    // Single `_` after the prefix, `__` between nested keys
    fn environment() -> config::Environment {
        config::Environment::with_prefix("ESQUIE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Built-in defaults only, without file or environment overrides
    pub fn defaults() -> Result<Self, config::ConfigError> {
        Self::with_defaults(config::Config::builder())?
            .build()?
            .try_deserialize()
    }

    fn builder(
        config_path: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        Self::with_defaults(
            config::Config::builder()
                .add_source(config::File::with_name(config_path).required(false)),
        )
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8787)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "esquie")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("content.assets_dir", "assets")?
            .set_default("content.quotes_path", "quotes.json")?
            .set_default("content.image_config_path", "image-config.json")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
