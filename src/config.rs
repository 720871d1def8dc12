/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the authorization service client
pub struct Config {
    /// Base URL of the authorization service, including any API prefix
    pub base_url: String,
    /// Static token sent verbatim in the `Authorization` header
    pub token: String,
    /// Timeout in seconds for requests to the service
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables
    ///
    /// Reads `AUTHZ_BASE_URL`, `AUTHZ_TOKEN` and `AUTHZ_TIMEOUT`, loading a
    /// `.env` file first if one is present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("AUTHZ_BASE_URL", String::from("default_base_url"));
        let token = get_env_or_default("AUTHZ_TOKEN", String::from("default_token"));

        if base_url == "default_base_url" {
            error!("AUTHZ_BASE_URL not found in environment variables or .env file");
        }
        if token == "default_token" {
            error!("AUTHZ_TOKEN not found in environment variables or .env file");
        }

        Config {
            base_url,
            token,
            timeout: get_env_or_default("AUTHZ_TIMEOUT", DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a configuration with explicit values, bypassing the environment
    pub fn with_values(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}
