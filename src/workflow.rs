//! One generate-then-publish run.
//!
//! ```text
//! (config already checked) -> DELAY -> GENERATE (retry) -> VALIDATE -> PUBLISH (retry) -> DONE
//! ```
//!
//! Every error ends the run; `main` turns it into a nonzero exit code. A
//! validation failure is never retried and nothing is published.

use crate::api::ChatClient;
use crate::error::AutopostError;
use crate::generator::generate_article;
use crate::keywords::{KEYWORDS, RandomSource, select_keyword};
use crate::models::{GeneratedArticle, META_DESCRIPTION_SOFT_LIMIT};
use crate::publish::{DraftPublisher, prepare_payload};
use crate::retry::{Retry, Sleeper};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Per-run knobs coming from the command line.
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Upper bound of the random startup delay. Zero skips the delay.
    pub max_delay: Duration,
    /// Fixed keyword; when `None` one is drawn from [`KEYWORDS`].
    pub keyword: Option<String>,
    /// Stop after validation and print the draft payload instead of posting.
    pub dry_run: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            max_delay: Duration::from_secs(120),
            keyword: None,
            dry_run: false,
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub keyword: String,
    pub delay: Duration,
    pub title: String,
    /// Public link of the created draft; `None` on a dry run.
    pub link: Option<String>,
}

pub struct Workflow<C, P, R, S> {
    chat: C,
    publisher: P,
    random: R,
    retry: Retry<S>,
    options: WorkflowOptions,
}

impl<C, P, R, S> Workflow<C, P, R, S>
where
    C: ChatClient,
    P: DraftPublisher,
    R: RandomSource,
    S: Sleeper,
{
    pub fn new(chat: C, publisher: P, random: R, retry: Retry<S>, options: WorkflowOptions) -> Self {
        Self {
            chat,
            publisher,
            random,
            retry,
            options,
        }
    }

    #[instrument(level = "info", skip_all)]
    pub async fn run(mut self) -> Result<RunReport, AutopostError> {
        let keyword = match self.options.keyword.take() {
            Some(k) => {
                info!(keyword = %k, "Using keyword from command line");
                k
            }
            None => select_keyword(&mut self.random, KEYWORDS).to_string(),
        };

        let delay = if self.options.max_delay.is_zero() {
            Duration::ZERO
        } else {
            self.random.delay(self.options.max_delay)
        };
        if !delay.is_zero() {
            info!(delay_secs = delay.as_secs(), "Waiting before generation");
            self.retry.sleeper().sleep(delay).await;
        }

        info!(%keyword, "Generating article");
        let chat = &self.chat;
        let kw = keyword.as_str();
        let article = self
            .retry
            .run("generate", move || generate_article(chat, kw))
            .await?;

        validate(&article)?;

        if self.options.dry_run {
            let payload = prepare_payload(&article)?;
            let pretty = serde_json::to_string_pretty(&payload)?;
            println!("{pretty}");
            info!(slug = %payload.slug, "Dry run: draft not posted");
            return Ok(RunReport {
                keyword,
                delay,
                title: payload.title,
                link: None,
            });
        }

        info!("Publishing draft");
        let publisher = &self.publisher;
        let art = &article;
        let created = self
            .retry
            .run("publish", move || publisher.publish(art))
            .await?;

        let link = created.get("link").and_then(Value::as_str).map(str::to_string);
        info!(link = link.as_deref().unwrap_or("<none>"), "Workflow finished");

        Ok(RunReport {
            keyword,
            delay,
            title: article.title.trim().to_string(),
            link,
        })
    }
}

/// Reject articles without a title or content and log length metrics.
pub fn validate(article: &GeneratedArticle) -> Result<(), AutopostError> {
    let title_len = article.title_len();
    let meta_len = article.meta_len();
    let content_len = article.content.trim().chars().count();
    info!(title_len, meta_len, content_len, "Generated article metrics");

    if title_len == 0 || content_len == 0 {
        error!(title_len, content_len, "Generated article is missing title or content");
        return Err(AutopostError::Validation(
            "generated article has an empty title or content".into(),
        ));
    }
    if meta_len > META_DESCRIPTION_SOFT_LIMIT {
        warn!(
            meta_len,
            limit = META_DESCRIPTION_SOFT_LIMIT,
            "Meta description exceeds recommended length"
        );
    }
    Ok(())
}
