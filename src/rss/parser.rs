//! Feed parsing logic for RSS and Atom documents.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use feed_rs::model::{Entry, Feed};
use feed_rs::parser;
use std::io::Cursor;
use tracing::{debug, warn};

use super::types::CONTENT_LIMIT;
use super::util::{cleanup_xml, html_to_text, truncate_chars};
use crate::types::Article;
use crate::TARGET_WEB_REQUEST;

/// Parse a feed document, retrying once on a cleaned copy if the raw text is rejected.
pub fn parse_feed_document(body: &str, feed_url: &str) -> Result<Feed> {
    match parser::parse(Cursor::new(body)) {
        Ok(feed) => Ok(feed),
        Err(first_err) => {
            let cleaned = cleanup_xml(body);
            if !(cleaned.contains("<rss") || cleaned.contains("<feed")) {
                let preview = if body
                    .chars()
                    .all(|c| c.is_ascii_graphic() || c.is_whitespace())
                {
                    body.chars().take(100).collect::<String>()
                } else {
                    "[binary data]".to_string()
                };
                return Err(anyhow!(
                    "Content from {} is not an RSS or Atom feed: {}",
                    feed_url,
                    preview
                ));
            }

            match parser::parse(Cursor::new(cleaned)) {
                Ok(feed) => {
                    warn!(target: TARGET_WEB_REQUEST, "Feed from {} parsed only after XML cleanup", feed_url);
                    Ok(feed)
                }
                Err(second_err) => Err(anyhow!(
                    "Failed to parse feed from {} even after cleanup. First error: {}. Second error: {}",
                    feed_url,
                    first_err,
                    second_err
                )),
            }
        }
    }
}

/// Parse a feed document into articles attributed to `source_name`.
///
/// `now` stands in for entries that carry no timestamp at all.
pub fn parse_articles(
    body: &str,
    feed_url: &str,
    source_name: &str,
    now: DateTime<Utc>,
) -> Result<Vec<Article>> {
    let feed = parse_feed_document(body, feed_url)?;
    debug!(target: TARGET_WEB_REQUEST, "Parsed feed {} with {} entries", feed_url, feed.entries.len());

    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| entry_to_article(entry, source_name, now))
        .collect())
}

fn entry_to_article(entry: Entry, source_name: &str, now: DateTime<Utc>) -> Option<Article> {
    let url = match entry.links.first() {
        Some(link) => link.href.clone(),
        None => {
            warn!(target: TARGET_WEB_REQUEST, "Feed entry missing link in {}, skipping", source_name);
            return None;
        }
    };

    let title = entry.title.map(|t| t.content).unwrap_or_default();

    let date = entry
        .published
        .or(entry.updated)
        .unwrap_or(now)
        .to_rfc3339();

    // Summary first, full content as fallback.
    let raw_body = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();
    let content = truncate_chars(&html_to_text(&raw_body), CONTENT_LIMIT);

    Some(Article::new(title, url, date, content, source_name.to_string()))
}
