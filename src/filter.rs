//! Novelty and recency checks applied to freshly fetched articles.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use tracing::debug;

use crate::rss::parse_date;
use crate::types::Article;
use crate::TARGET_WEB_REQUEST;

/// True when `date` falls after `now - window_days`.
///
/// Dates that cannot be parsed are treated as recent so nothing is dropped silently.
/// A window too large to represent has no cutoff.
pub fn is_recent(date: &str, window_days: i64, now: DateTime<Utc>) -> bool {
    match parse_date(date) {
        Some(published) => match Duration::try_days(window_days).and_then(|d| now.checked_sub_signed(d)) {
            Some(cutoff) => published > cutoff,
            None => {
                debug!(target: TARGET_WEB_REQUEST, "Window of {} days has no cutoff, keeping article", window_days);
                true
            }
        },
        None => {
            debug!(target: TARGET_WEB_REQUEST, "Unparsable date {:?}, keeping article", date);
            true
        }
    }
}

/// Accept an article that is neither already stored nor older than the window.
pub fn accept(
    article: &Article,
    known_urls: &HashSet<String>,
    window_days: i64,
    now: DateTime<Utc>,
) -> bool {
    if known_urls.contains(&article.url) {
        return false;
    }
    is_recent(&article.date, window_days, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn article(url: &str, date: &str) -> Article {
        Article::new(
            "Title".to_string(),
            url.to_string(),
            date.to_string(),
            String::new(),
            "Source".to_string(),
        )
    }

    #[test]
    fn test_within_window_is_accepted() {
        let known = HashSet::new();
        let fresh = article("https://a.example/1", "2025-03-09T12:00:00+00:00");
        assert!(accept(&fresh, &known, 2, now()));
    }

    #[test]
    fn test_older_than_window_is_rejected() {
        let known = HashSet::new();
        let stale = article("https://a.example/1", "2025-03-07T11:59:59+00:00");
        assert!(!accept(&stale, &known, 2, now()));
    }

    #[test]
    fn test_cutoff_is_exclusive() {
        assert!(!is_recent("2025-03-08T12:00:00Z", 2, now()));
        assert!(is_recent("2025-03-08T12:00:01Z", 2, now()));
    }

    #[test]
    fn test_known_url_is_rejected_even_when_fresh() {
        let mut known = HashSet::new();
        known.insert("https://a.example/1".to_string());
        let fresh = article("https://a.example/1", "2025-03-10T11:00:00Z");
        assert!(!accept(&fresh, &known, 2, now()));
    }

    #[test]
    fn test_unparsable_date_is_accepted_regardless_of_window() {
        let known = HashSet::new();
        let undated = article("https://a.example/2", "sometime last week");
        assert!(accept(&undated, &known, 0, now()));
        assert!(accept(&undated, &known, 2, now()));
    }

    #[test]
    fn test_unrepresentable_window_keeps_article() {
        assert!(is_recent("2025-03-10T00:00:00Z", 200_000_000, now()));
        assert!(is_recent("1990-01-01T00:00:00Z", 1_000_000_000_000, now()));
        assert!(is_recent("2025-03-10T00:00:00Z", i64::MAX, now()));
    }

    #[test]
    fn test_naive_timestamps_are_compared() {
        assert!(is_recent("2025-03-10T08:30:00", 2, now()));
        assert!(!is_recent("2025-01-01T08:30:00", 2, now()));
    }
}
