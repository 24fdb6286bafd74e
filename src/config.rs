//! Startup configuration.
//!
//! [`Config`] is built once in `main` from the parsed [`crate::cli::Cli`] and
//! handed to the components that need it. It never changes afterwards.

use crate::cli::Cli;
use crate::error::AutopostError;
use std::fmt;
use tracing::{error, info, instrument};
use url::Url;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const WP_URL: &str = "WP_URL";
pub const WP_USERNAME: &str = "WP_USERNAME";
pub const WP_APP_PASSWORD: &str = "WP_APP_PASSWORD";

/// The four secrets a run needs.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub openai_api_key: String,
    pub wp_url: String,
    pub wp_username: String,
    pub wp_app_password: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("wp_url", &self.wp_url)
            .field("wp_username", &self.wp_username)
            .field("wp_app_password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Build the configuration from the CLI/environment values.
    pub fn from_cli(args: &Cli) -> Result<Self, AutopostError> {
        Self::resolve(
            args.openai_api_key.as_deref(),
            args.wp_url.as_deref(),
            args.wp_username.as_deref(),
            args.wp_app_password.as_deref(),
        )
    }

    /// Validate raw values. Blank values count as missing, and every missing
    /// name is reported in a single error.
    #[instrument(level = "info", skip_all)]
    pub fn resolve(
        openai_api_key: Option<&str>,
        wp_url: Option<&str>,
        wp_username: Option<&str>,
        wp_app_password: Option<&str>,
    ) -> Result<Self, AutopostError> {
        let mut missing = Vec::new();
        let mut take = |name: &'static str, value: Option<&str>| -> String {
            match value.map(str::trim) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let config = Config {
            openai_api_key: take(OPENAI_API_KEY, openai_api_key),
            wp_url: take(WP_URL, wp_url),
            wp_username: take(WP_USERNAME, wp_username),
            wp_app_password: take(WP_APP_PASSWORD, wp_app_password),
        };

        if !missing.is_empty() {
            error!(missing = ?missing, "Required configuration is missing");
            return Err(AutopostError::Config { missing });
        }

        match Url::parse(&config.wp_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(AutopostError::InvalidConfig(format!(
                    "{WP_URL} must use http or https, got scheme {:?}",
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(AutopostError::InvalidConfig(format!(
                    "{WP_URL} is not a valid URL: {e}"
                )));
            }
        }

        info!(wp_url = %config.wp_url, wp_username = %config.wp_username, "Configuration loaded");
        Ok(config)
    }
}
