//! # SEO Autopost
//!
//! Scheduled job that writes one SEO article per run and leaves it as a
//! WordPress draft for an editor to review.
//!
//! ## Usage
//!
//! ```sh
//! OPENAI_API_KEY=... WP_URL=https://blog.example.com \
//! WP_USERNAME=editor WP_APP_PASSWORD="xxxx xxxx xxxx" seo_autopost
//! ```
//!
//! ## Architecture
//!
//! 1. **Config check**: all four secrets must be present, otherwise exit 1
//! 2. **Delay**: sleep a random 0..=120 s so runs drift from the cron trigger
//! 3. **Generate**: ask the LLM for `{title, meta_description, content}` (retried)
//! 4. **Validate**: title and content must be non-empty
//! 5. **Publish**: `POST /wp-json/wp/v2/posts` with `status: draft` (retried)

use clap::Parser;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod generator;
mod keywords;
mod models;
mod publish;
mod retry;
mod utils;
mod workflow;

use api::OpenAiClient;
use cli::Cli;
use config::Config;
use keywords::ThreadRandom;
use publish::WordPressPublisher;
use retry::{Retry, TokioSleeper};
use workflow::{Workflow, WorkflowOptions};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is the normal case in production.
    let dotenv = dotenvy::dotenv().ok();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = Instant::now();
    info!(version = env!("CARGO_PKG_VERSION"), "seo_autopost starting up");
    if let Some(path) = dotenv {
        debug!(path = %path.display(), "Loaded .env file");
    }

    let args = Cli::parse();
    debug!(
        max_delay_secs = args.max_delay_secs,
        keyword = ?args.keyword,
        model = %args.model,
        dry_run = args.dry_run,
        "Parsed CLI arguments"
    );

    let config = match Config::from_cli(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration check failed; aborting before any network call");
            return ExitCode::FAILURE;
        }
    };

    let chat = match OpenAiClient::new(&config.openai_api_key, &args.openai_base_url, &args.model) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Could not create AI client");
            return ExitCode::FAILURE;
        }
    };
    let publisher = match WordPressPublisher::new(&config) {
        Ok(publisher) => publisher,
        Err(e) => {
            error!(error = %e, "Could not create WordPress client");
            return ExitCode::FAILURE;
        }
    };
    debug!(endpoint = publisher.endpoint(), "WordPress publisher ready");

    let options = WorkflowOptions {
        max_delay: Duration::from_secs(args.max_delay_secs),
        keyword: args.keyword,
        dry_run: args.dry_run,
    };
    let workflow = Workflow::new(chat, publisher, ThreadRandom, Retry::new(TokioSleeper), options);

    let elapsed = || start_time.elapsed();
    match workflow.run().await {
        Ok(report) => {
            let elapsed = elapsed();
            info!(
                keyword = %report.keyword,
                title = %report.title,
                link = report.link.as_deref().unwrap_or("<dry run>"),
                delay_secs = report.delay.as_secs(),
                secs = elapsed.as_secs(),
                millis = elapsed.subsec_millis(),
                "Execution complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let elapsed = elapsed();
            error!(error = %e, secs = elapsed.as_secs(), "Run failed");
            ExitCode::FAILURE
        }
    }
}
