//! Command-line interface definitions for SEO Autopost.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The four secrets are normally supplied through environment variables (or a
//! `.env` file); they are kept optional here so that a missing value is
//! reported by [`crate::config::Config::resolve`] with every missing name at
//! once instead of clap's first-error message.

use clap::Parser;

/// Command-line arguments for the SEO Autopost application.
///
/// # Examples
///
/// ```sh
/// # Scheduled run, secrets from the environment
/// seo_autopost
///
/// # Manual run without the startup delay, printing the draft instead of posting it
/// seo_autopost --max-delay-secs 0 --keyword "jasa pembuatan website" --dry-run
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// API key for the OpenAI-compatible provider
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Base URL of the WordPress site (e.g. https://example.com)
    #[arg(long, env = "WP_URL")]
    pub wp_url: Option<String>,

    /// WordPress username owning the application password
    #[arg(long, env = "WP_USERNAME")]
    pub wp_username: Option<String>,

    /// WordPress application password
    #[arg(long, env = "WP_APP_PASSWORD", hide_env_values = true)]
    pub wp_app_password: Option<String>,

    /// Upper bound, in seconds, of the random delay before generation (0 disables it)
    #[arg(long, default_value_t = 120)]
    pub max_delay_secs: u64,

    /// Use this keyword instead of picking one at random
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Chat model identifier sent to the provider
    #[arg(long, default_value = crate::api::DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the chat-completions API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = crate::api::DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Generate and validate the article, print the draft payload, skip posting
    #[arg(long)]
    pub dry_run: bool,
}
