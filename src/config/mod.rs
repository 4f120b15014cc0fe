// Configuration module entry point
// Loads application configuration and owns the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    Config, DescriptorConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

impl Config {
    /// Load configuration from "config.toml" in the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    /// The file is optional; environment variables (`TIMETOOL__` prefix)
    /// override it, and built-in defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("TIMETOOL").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", true)?
            .set_default("descriptors.dir", "public")?
            .set_default("descriptors.synthesize", true)?
            .set_default("descriptors.contact_email", "support@example.com")?
            .set_default("descriptors.legal_info", "https://www.example.com/legal")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Externally visible base URL embedded in the manifest and the OpenAPI
    /// document. Falls back to the listening address, which keeps the
    /// manifest's `api.url` pointing at this process by construction.
    pub fn base_url(&self) -> String {
        self.descriptors.base_url.clone().unwrap_or_else(|| {
            format!("http://{}:{}", self.server.host, self.server.port)
        })
    }
}
