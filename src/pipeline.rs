//! One collection run: fetch, filter, classify, persist.

use anyhow::Result;
use chrono::Utc;
use tracing::{error, info};

use crate::classifier::RelevanceClassifier;
use crate::filter::accept;
use crate::sources::FeedSource;
use crate::store::{known_urls, UpdateStore};
use crate::types::{Article, UpdateRecord};
use crate::TARGET_WEB_REQUEST;

/// What a run did, for the caller's final report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub sources_fetched: usize,
    pub sources_failed: usize,
    pub candidates: usize,
    pub accepted: usize,
}

/// Run the pipeline once over `sources`, strictly one network call at a time.
///
/// Only store I/O errors escape; a failed source or classification just drops that input.
pub async fn run_once(
    sources: &[Box<dyn FeedSource>],
    classifier: &RelevanceClassifier,
    store: &UpdateStore,
    window_days: i64,
) -> Result<RunReport> {
    let existing = store.load()?;
    let mut seen = known_urls(&existing);
    let mut report = RunReport::default();

    let now = Utc::now();
    let mut candidates: Vec<Article> = Vec::new();
    for source in sources {
        match source.fetch().await {
            Ok(articles) => {
                report.sources_fetched += 1;
                for article in articles {
                    if accept(&article, &seen, window_days, now) {
                        seen.insert(article.url.clone());
                        candidates.push(article);
                    }
                }
            }
            Err(err) => {
                report.sources_failed += 1;
                error!(target: TARGET_WEB_REQUEST, "Error scraping {}: {:#}", source.name(), err);
            }
        }
    }
    report.candidates = candidates.len();
    info!("Found {} potential new articles.", candidates.len());

    let mut accepted: Vec<UpdateRecord> = Vec::new();
    for mut article in candidates {
        info!("Processing: {}", article.title);
        match classifier.classify(&article.title, &article.content).await {
            Some(classification) => {
                article.mark_relevant(classification.summary);
                let id = (existing.len() + accepted.len() + 1) as u64;
                accepted.push(UpdateRecord::from_article(id, &article, Utc::now().to_rfc3339()));
            }
            None => info!(" -> Skipped (Not relevant or not an update)"),
        }
    }
    report.accepted = accepted.len();

    if accepted.is_empty() {
        info!("No new relevant updates found.");
        return Ok(report);
    }

    let count = accepted.len();
    accepted.extend(existing);
    store.save(&accepted)?;
    info!("Saved {} new updates.", count);

    Ok(report)
}
