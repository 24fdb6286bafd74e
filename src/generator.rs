//! Article generation.
//!
//! Builds the system and user prompts for a keyword, asks the [`ChatClient`]
//! for a JSON completion and parses it into a [`GeneratedArticle`]. The parsed
//! object is not validated here; see [`crate::workflow`].

use crate::api::ChatClient;
use crate::error::AutopostError;
use crate::models::GeneratedArticle;
use crate::utils::{looks_truncated, truncate_for_log};
use tracing::{info, instrument, warn};

/// Domain every article must link out to once.
pub const REFERENCE_LINK: &str = "https://developers.google.com/search/docs";

pub const MIN_WORDS: usize = 1200;
pub const MAX_WORDS: usize = 1500;
pub const MIN_SUBHEADINGS: usize = 4;

const SYSTEM_PROMPT: &str = "You are a senior Indonesian SEO copywriter and web \
development consultant. You write accurate, helpful, people-first articles in natural \
Bahasa Indonesia and always answer with a single JSON object.";

/// System/persona instruction.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// User instruction embedding the keyword and the formatting rules.
pub fn user_prompt(keyword: &str) -> String {
    format!(
        "Write an SEO article in Bahasa Indonesia targeting the keyword \"{keyword}\".\n\
         \n\
         Requirements:\n\
         - Length between {MIN_WORDS} and {MAX_WORDS} words.\n\
         - Use the keyword naturally in the title, the first paragraph and at least one subheading.\n\
         - At least {MIN_SUBHEADINGS} subheadings using <h2> (and <h3> where useful).\n\
         - End with an FAQ section: an <h2> titled \"FAQ\" followed by at least 3 questions \
         in <h3> with answers in <p>.\n\
         - Include exactly one outbound link to {REFERENCE_LINK} as an <a href> with \
         descriptive anchor text.\n\
         - Output an HTML fragment only: use <p>, <h2>, <h3>, <ul>, <ol>, <li>, <strong>, <a>. \
         Do not use <h1>, <html>, <head> or <body>, and no Markdown.\n\
         - meta_description must be at most 155 characters and contain the keyword.\n\
         \n\
         Respond with a JSON object with exactly these keys:\n\
         {{\"title\": string, \"meta_description\": string, \"content\": string}}"
    )
}

/// Generate one article for `keyword`.
///
/// Provider failures and unparseable completions are returned as errors so
/// the caller's retry regenerates from scratch.
#[instrument(level = "info", skip(client))]
pub async fn generate_article<C: ChatClient>(
    client: &C,
    keyword: &str,
) -> Result<GeneratedArticle, AutopostError> {
    let user = user_prompt(keyword);
    let raw = client.complete_json(system_prompt(), &user).await?;

    match serde_json::from_str::<GeneratedArticle>(&raw) {
        Ok(article) => {
            info!(
                title = %article.title,
                content_bytes = article.content.len(),
                "Article generated"
            );
            Ok(article)
        }
        Err(e) => {
            if looks_truncated(&e) {
                warn!(error = %e, "Completion looks truncated");
            }
            warn!(
                error = %e,
                response_preview = %truncate_for_log(&raw, 300),
                "Model returned non-conforming JSON"
            );
            Err(e.into())
        }
    }
}
