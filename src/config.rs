//! Vision Assist configuration. Fixed response strings are constants; the
//! runtime `Settings` are layered from defaults, a TOML file and the
//! environment.

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Name reported in startup logs
pub const SERVICE_NAME: &str = "Vision Assist API";

/// Body of the liveness route
pub const STATUS_MESSAGE: &str = "Vision Assist API is running!";

/// Returned for every image that passes validation. Stands in for real model
/// output
pub const PLACEHOLDER_DESCRIPTION: &str =
    "Placeholder response: The image was received successfully!";

/// Prefix of the environment variables read by `Settings::load`
pub const ENV_PREFIX: &str = "VISION_ASSIST";

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "vision-assist.toml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG: &str = "info";

/// Upper bound on a JSON request body. Camera captures encoded as base 64
/// are a few megabytes
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Runtime settings of the HTTP server
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    /// Tracing filter directive, used when `RUST_LOG` is unset
    pub log: String,

    /// Maximum accepted size of a JSON request body, in bytes
    pub max_payload_bytes: usize,

    /// Number of HTTP workers. Defaults to one per physical core
    pub workers: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            log: DEFAULT_LOG.into(),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            workers: None,
        }
    }
}

impl Settings {
    /// Load settings. An explicit `path` must exist; otherwise
    /// `DEFAULT_CONFIG_FILE` is read if present. `VISION_ASSIST_*`
    /// environment variables override both.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT as i64)?
            .set_default("log", DEFAULT_LOG)?
            .set_default("max_payload_bytes", DEFAULT_MAX_PAYLOAD_BYTES as i64)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
