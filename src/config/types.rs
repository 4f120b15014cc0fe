// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub descriptors: DescriptorConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
}

/// Descriptor store configuration
///
/// Where the discovery documents live on disk and how the synthesized
/// manifest and schema are parameterized.
#[derive(Debug, Deserialize, Clone)]
pub struct DescriptorConfig {
    /// Directory holding openapi.yaml, ai-plugin.json and logo.png
    pub dir: String,
    /// Externally visible base URL; derived from server.host/port when unset
    #[serde(default)]
    pub base_url: Option<String>,
    /// Write missing descriptor files once at startup
    pub synthesize: bool,
    pub contact_email: String,
    pub legal_info: String,
}
