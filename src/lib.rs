pub mod classifier;
pub mod environment;
pub mod filter;
pub mod llm;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod rss;
pub mod sources;
pub mod store;
pub mod types;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_LLM_REQUEST: &str = "llm_request";
pub const TARGET_STORE: &str = "store";
