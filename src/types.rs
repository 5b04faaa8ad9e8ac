//! Shared data types: articles pulled from feeds and the records persisted to the store.

use serde::{Deserialize, Serialize};

/// An article as read from a feed, before and after classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Unique key across the store.
    pub url: String,
    /// ISO-8601 publish timestamp.
    pub date: String,
    /// Markup-free body, truncated.
    pub content: String,
    pub source: String,
    pub summary: Option<String>,
    pub is_relevant: bool,
}

impl Article {
    pub fn new(title: String, url: String, date: String, content: String, source: String) -> Self {
        Self {
            title,
            url,
            date,
            content,
            source,
            summary: None,
            is_relevant: false,
        }
    }

    /// Record the classifier's verdict. Called once per article.
    pub fn mark_relevant(&mut self, summary: String) {
        self.summary = Some(summary);
        self.is_relevant = true;
    }
}

/// Persisted form of an accepted article, as consumed by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub id: u64,
    pub source: String,
    pub date: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    /// Processing time, ISO-8601.
    pub timestamp: String,
}

impl UpdateRecord {
    pub fn from_article(id: u64, article: &Article, timestamp: String) -> Self {
        Self {
            id,
            source: article.source.clone(),
            date: article.date.clone(),
            title: article.title.clone(),
            summary: article.summary.clone().unwrap_or_default(),
            url: article.url.clone(),
            timestamp,
        }
    }
}

/// Positive classifier outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub summary: String,
}
