use crate::prompt::common::{prompt_snippet, ANALYST_ROLE, JSON_ONLY};

/// Generate the prompt that asks whether an article is a Japan-relevant ad platform update,
/// and for a short Japanese summary if so.
pub fn ad_update_prompt(title: &str, content: &str) -> String {
    format!(
        r#"
{role} Analyze the following article title and content.

Article Title: {title}
Article Content Snippet: {content}

Tasks:
1. Determine if this article is announcing a Feature Update, Policy Change, or New Functionality for an advertising platform (Google Ads, Yahoo Ads, Meta, etc.).
2. Determine if this update is relevant to the Japanese market (or is a global update applicable to Japan).
3. If YES to both, generate a concise 3-line summary in Japanese.

Output Format (JSON):
{{
    "is_ad_update": true/false,
    "is_relevant_to_japan": true/false,
    "summary_ja": "string (3 lines max)"
}}

{json_only}
"#,
        role = ANALYST_ROLE,
        title = title,
        content = prompt_snippet(content),
        json_only = JSON_ONLY
    )
}
