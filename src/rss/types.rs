//! Constants for the RSS module.

/// Maximum characters of entry body kept on an article.
pub const CONTENT_LIMIT: usize = 1000;

pub const USER_AGENT: &str = concat!("adwatch/", env!("CARGO_PKG_VERSION"));

pub const FEED_ACCEPT: &str =
    "application/rss+xml, application/atom+xml, application/xml, text/xml, */*;q=0.9";
