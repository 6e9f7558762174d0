//! Server configuration for the thingd REST API.
//!
//! Supports programmatic configuration, command line arguments and
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `THINGD_PORT` | 4567 | Server port |
//! | `THINGD_HOST` | 127.0.0.1 | Host to bind |
//! | `THINGD_LOG_LEVEL` | info | Log level |
//! | `THINGD_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `THINGD_ENABLE_CORS` | true | Enable CORS |
//! | `THINGD_CORS_ORIGINS` | * | Allowed origins |
//! | `THINGD_STRICT_RELATION_READS` | false | 404 on relation reads with a missing parent |
//! | `THINGD_NO_SEED` | false | Start with an empty store |

use clap::Parser;

/// Server configuration for the thingd REST API.
///
/// Construct from the environment with [`ServerConfig::from_env`], from
/// command line arguments with [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "thingd")]
#[command(about = "REST entity/relationship server for projects, todos and categories")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "THINGD_PORT", default_value = "4567")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "THINGD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "THINGD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "THINGD_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "THINGD_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "THINGD_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Answer 404 instead of an empty 200 when listing relations of a
    /// missing parent.
    ///
    /// The original service answers 200 with an empty collection for an
    /// invalid parent id on `GET /X/:id/rel`. Off (the default) reproduces
    /// that observed behavior; on diverges to a strict 404.
    #[arg(long, env = "THINGD_STRICT_RELATION_READS", default_value = "false")]
    pub strict_relation_reads: bool,

    /// Start with an empty store instead of the demo fixture.
    #[arg(long, env = "THINGD_NO_SEED", default_value = "false")]
    pub no_seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4567,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            strict_relation_reads: false,
            no_seed: false,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing: ephemeral port, short
    /// timeout, no CORS, no seed data.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            strict_relation_reads: false,
            no_seed: true,
        }
    }
}
