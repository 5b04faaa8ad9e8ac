//! Relevance classification of articles via a generative model.

use serde::Deserialize;
use tracing::{error, warn};

use crate::llm::TextGenerator;
use crate::prompt::ad_update_prompt;
use crate::types::Classification;
use crate::TARGET_LLM_REQUEST;

/// The structured answer requested from the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelVerdict {
    #[serde(default)]
    pub is_ad_update: bool,
    #[serde(default)]
    pub is_relevant_to_japan: bool,
    #[serde(default)]
    pub summary_ja: Option<String>,
}

impl ModelVerdict {
    /// Accepted only when both flags are set and a summary came back.
    pub fn into_classification(self) -> Option<Classification> {
        if !(self.is_ad_update && self.is_relevant_to_japan) {
            return None;
        }
        match self.summary_ja {
            Some(summary) => Some(Classification { summary }),
            // Dropped rather than stored with an empty summary.
            None => {
                warn!(target: TARGET_LLM_REQUEST, "Relevant verdict without a summary, discarding");
                None
            }
        }
    }
}

/// Parse the model's raw text into a verdict.
pub fn parse_verdict(raw: &str) -> Result<ModelVerdict, serde_json::Error> {
    serde_json::from_str(raw.trim())
}

/// Decides whether an article is a Japan-relevant advertising platform update.
///
/// Constructed without a generator it stays disabled for its whole lifetime and
/// every call returns `None`.
pub struct RelevanceClassifier {
    generator: Option<Box<dyn TextGenerator>>,
}

impl RelevanceClassifier {
    pub fn new(generator: Option<Box<dyn TextGenerator>>) -> Self {
        if generator.is_none() {
            warn!(target: TARGET_LLM_REQUEST, "No model credential configured. Classification will be skipped.");
        }
        Self { generator }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// One model round trip. Every failure is logged here and reported as `None`.
    pub async fn classify(&self, title: &str, content: &str) -> Option<Classification> {
        let generator = self.generator.as_ref()?;
        let prompt = ad_update_prompt(title, content);

        let raw = match generator.generate(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                error!(target: TARGET_LLM_REQUEST, "Error processing with model: {:#}", err);
                return None;
            }
        };

        match parse_verdict(&raw) {
            Ok(verdict) => verdict.into_classification(),
            Err(err) => {
                error!(target: TARGET_LLM_REQUEST, "Malformed model response ({}): {}", err, raw);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Returns a canned reply and records every prompt it was sent.
    pub(crate) struct CannedGenerator {
        reply: Result<String, String>,
        pub(crate) prompts: Arc<Mutex<Vec<String>>>,
    }

    impl CannedGenerator {
        pub(crate) fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|message| anyhow!(message))
        }
    }

    fn classifier_replying(reply: &str) -> RelevanceClassifier {
        RelevanceClassifier::new(Some(Box::new(CannedGenerator::replying(reply))))
    }

    #[tokio::test]
    async fn test_relevant_update_yields_summary() {
        let classifier = classifier_replying(
            r#"{"is_ad_update": true, "is_relevant_to_japan": true, "summary_ja": "X"}"#,
        );
        assert_eq!(
            classifier.classify("Title", "Body").await,
            Some(Classification {
                summary: "X".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_other_flag_combinations_yield_nothing() {
        for (ad, japan) in [(true, false), (false, true), (false, false)] {
            let reply = format!(
                r#"{{"is_ad_update": {}, "is_relevant_to_japan": {}, "summary_ja": "X"}}"#,
                ad, japan
            );
            let classifier = classifier_replying(&reply);
            assert_eq!(classifier.classify("Title", "Body").await, None, "{}", reply);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_yields_nothing() {
        let classifier = classifier_replying("Sure! Here is the JSON: {is_ad_update: yes");
        assert_eq!(classifier.classify("Title", "Body").await, None);
    }

    #[tokio::test]
    async fn test_generator_error_yields_nothing() {
        let classifier =
            RelevanceClassifier::new(Some(Box::new(CannedGenerator::failing("quota exceeded"))));
        assert_eq!(classifier.classify("Title", "Body").await, None);
    }

    #[tokio::test]
    async fn test_disabled_classifier_never_calls_out() {
        let classifier = RelevanceClassifier::disabled();
        assert!(!classifier.is_enabled());
        assert_eq!(classifier.classify("Title", "Body").await, None);
    }

    #[tokio::test]
    async fn test_single_round_trip_with_title_and_content() {
        let generator = CannedGenerator::replying(r#"{"is_ad_update": false}"#);
        let prompts = generator.prompts.clone();
        let classifier = RelevanceClassifier::new(Some(Box::new(generator)));

        classifier.classify("Meta policy change", "Details here").await;

        let sent = prompts.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("Meta policy change"));
        assert!(sent[0].contains("Details here"));
    }

    #[test]
    fn test_missing_fields_default_to_false() {
        let verdict = parse_verdict(r#"{"summary_ja": "要約"}"#).unwrap();
        assert!(!verdict.is_ad_update);
        assert!(!verdict.is_relevant_to_japan);
        assert_eq!(verdict.into_classification(), None);
    }

    #[test]
    fn test_relevant_without_summary_is_dropped() {
        let verdict =
            parse_verdict(r#"{"is_ad_update": true, "is_relevant_to_japan": true}"#).unwrap();
        assert_eq!(verdict.into_classification(), None);
    }
}
