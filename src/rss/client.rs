//! HTTP client creation and feed download.

use anyhow::{Context, Result};
use reqwest::header;
use tracing::debug;

use super::types::{FEED_ACCEPT, USER_AGENT};
use crate::TARGET_WEB_REQUEST;

/// Build the shared client used for all feed requests. Timeouts are left at the library default.
pub fn create_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .redirect(reqwest::redirect::Policy::default())
        .build()
        .context("Failed to build HTTP client")
}

/// Download a feed document, treating any non-success status as a failure.
pub async fn download_feed(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(target: TARGET_WEB_REQUEST, "Requesting {}", url);

    let response = client
        .get(url)
        .header(header::ACCEPT, FEED_ACCEPT)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Non-success status {} from {}", status, url);
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;
    debug!(target: TARGET_WEB_REQUEST, "Received {} bytes from {}", body.len(), url);
    Ok(body)
}
