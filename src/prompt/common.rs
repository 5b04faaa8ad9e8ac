// Common text blocks for all prompts

/// Characters of article body embedded in a prompt.
pub const PROMPT_CONTENT_LIMIT: usize = 2000;

pub const ANALYST_ROLE: &str = "You are an expert Ad Tech analyst.";

pub const JSON_ONLY: &str = "Only return the JSON.";

/// Clip article text to what a prompt may carry.
pub fn prompt_snippet(content: &str) -> &str {
    match content.char_indices().nth(PROMPT_CONTENT_LIMIT) {
        Some((byte_idx, _)) => &content[..byte_idx],
        None => content,
    }
}
