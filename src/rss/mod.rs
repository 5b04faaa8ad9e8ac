//! RSS feed retrieval for the collector.
//!
//! Fetches feed documents over HTTP, parses RSS/Atom with `feed-rs`, and
//! turns entries into [`Article`](crate::types::Article)s.

mod client;
mod fetcher;
mod parser;
mod types;
mod util;

pub use self::client::*;
pub use self::fetcher::RssFeedSource;
pub use self::parser::*;
pub use self::types::*;
pub use self::util::*;
