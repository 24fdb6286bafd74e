//! Data models for generated articles and WordPress drafts.
//!
//! - [`GeneratedArticle`]: the JSON object the model is asked to return
//! - [`DraftPostPayload`]: the body sent to `POST /wp-json/wp/v2/posts`

use serde::{Deserialize, Serialize};

/// Meta descriptions longer than this are truncated by search engines.
pub const META_DESCRIPTION_SOFT_LIMIT: usize = 155;

/// An SEO article as produced by the language model.
///
/// Missing keys deserialize to empty strings; deciding whether the article is
/// usable is left to the workflow's validation step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratedArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    /// HTML fragment (no `<h1>`, no document wrapper).
    #[serde(default)]
    pub content: String,
}

impl GeneratedArticle {
    /// Title length in characters after trimming.
    pub fn title_len(&self) -> usize {
        self.title.trim().chars().count()
    }

    /// Meta description length in characters after trimming.
    pub fn meta_len(&self) -> usize {
        self.meta_description.trim().chars().count()
    }
}

/// Publication state of a post. Only drafts are ever created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
}

/// JSON body for the WordPress post creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftPostPayload {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub status: PostStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_missing_keys_default_to_empty() {
        let article: GeneratedArticle = serde_json::from_str(r#"{"title":"Judul"}"#).unwrap();
        assert_eq!(article.title, "Judul");
        assert!(article.meta_description.is_empty());
        assert!(article.content.is_empty());
    }

    #[test]
    fn test_article_ignores_unknown_keys() {
        let article: GeneratedArticle = serde_json::from_value(json!({
            "title": "A",
            "meta_description": "B",
            "content": "<p>C</p>",
            "keywords": ["x"]
        }))
        .unwrap();
        assert_eq!(article.content, "<p>C</p>");
    }

    #[test]
    fn test_lengths_count_chars_after_trim() {
        let article = GeneratedArticle {
            title: "  Café  ".into(),
            meta_description: "é".repeat(160),
            content: String::new(),
        };
        assert_eq!(article.title_len(), 4);
        assert_eq!(article.meta_len(), 160);
    }

    #[test]
    fn test_payload_serializes_draft_status() {
        let payload = DraftPostPayload {
            title: "T".into(),
            content: "<p>x</p>".into(),
            excerpt: "E".into(),
            slug: "t".into(),
            status: PostStatus::Draft,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "title": "T",
                "content": "<p>x</p>",
                "excerpt": "E",
                "slug": "t",
                "status": "draft"
            })
        );
    }
}
