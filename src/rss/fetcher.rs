//! RSS implementation of [`FeedSource`].

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::client::download_feed;
use super::parser::parse_articles;
use crate::sources::FeedSource;
use crate::types::Article;
use crate::TARGET_WEB_REQUEST;

pub struct RssFeedSource {
    name: String,
    url: String,
    client: reqwest::Client,
}

impl RssFeedSource {
    pub fn new(name: String, url: String, client: reqwest::Client) -> Self {
        Self { name, url, client }
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        info!(target: TARGET_WEB_REQUEST, "Scraping RSS: {} - {}", self.name, self.url);
        let body = download_feed(&self.client, &self.url).await?;
        let articles = parse_articles(&body, &self.url, &self.name, Utc::now())?;
        info!(target: TARGET_WEB_REQUEST, "Found {} entries in {}", articles.len(), self.name);
        Ok(articles)
    }
}
