//! Feed source registry and the capability every source implements.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::rss::{create_http_client, is_valid_url, RssFeedSource};
use crate::types::Article;
use crate::TARGET_WEB_REQUEST;

/// Anything that can produce a batch of articles for one run.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Display name, copied onto every article this source yields.
    fn name(&self) -> &str;

    /// Retrieve and parse the source. An error means nothing from this source is used.
    async fn fetch(&self) -> Result<Vec<Article>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Rss,
    Html,
    #[serde(other)]
    Unknown,
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSourceConfig {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

impl FeedSourceConfig {
    pub fn rss(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            kind: SourceKind::Rss,
        }
    }
}

/// The built-in list of advertising-platform feeds.
pub fn default_sources() -> Vec<FeedSourceConfig> {
    vec![
        FeedSourceConfig::rss(
            "Google Ads Blog",
            "https://blog.google/products/ads-commerce/rss/",
        ),
        FeedSourceConfig::rss(
            "Yahoo! JAPAN Ads",
            "https://www.lycbiz.com/jp/news/yahoo-ads/rss.xml",
        ),
    ]
}

/// Read a replacement registry from a JSON array of `{name, url, type}`.
pub fn load_sources(path: &Path) -> Result<Vec<FeedSourceConfig>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed sources from {}", path.display()))?;
    let sources: Vec<FeedSourceConfig> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse feed sources in {}", path.display()))?;
    info!("Loaded {} feed sources from {}", sources.len(), path.display());
    Ok(sources)
}

/// Turn registry entries into runnable sources, preserving order.
///
/// Only RSS entries produce a source; other kinds and non-http(s) URLs are dropped.
pub fn build_sources(configs: &[FeedSourceConfig]) -> Result<Vec<Box<dyn FeedSource>>> {
    let client = create_http_client()?;
    let mut sources: Vec<Box<dyn FeedSource>> = Vec::new();

    for config in configs {
        if config.kind != SourceKind::Rss {
            debug!(target: TARGET_WEB_REQUEST, "No scraper for {} ({:?})", config.name, config.kind);
            continue;
        }
        if !is_valid_url(&config.url) {
            warn!(target: TARGET_WEB_REQUEST, "Skipping {}: invalid feed URL {}", config.name, config.url);
            continue;
        }
        sources.push(Box::new(RssFeedSource::new(
            config.name.clone(),
            config.url.clone(),
            client.clone(),
        )));
    }

    Ok(sources)
}
