use anyhow::Result;
use tracing::info;

use adwatch::classifier::RelevanceClassifier;
use adwatch::environment::Config;
use adwatch::llm::{GeminiClient, TextGenerator};
use adwatch::logging::configure_logging;
use adwatch::pipeline::run_once;
use adwatch::sources::{build_sources, default_sources, load_sources};
use adwatch::store::UpdateStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    configure_logging();

    info!("Starting Daily Ad Update Collector...");

    let config = Config::from_env();

    let registry = match &config.sources_path {
        Some(path) => load_sources(path)?,
        None => default_sources(),
    };
    let sources = build_sources(&registry)?;

    let generator = GeminiClient::from_config(&config)?
        .map(|client| Box::new(client) as Box<dyn TextGenerator>);
    let classifier = RelevanceClassifier::new(generator);

    let store = UpdateStore::new(&config.updates_path);

    let report = run_once(&sources, &classifier, &store, config.window_days).await?;
    info!(
        "Run complete: {} sources fetched, {} failed, {} candidates, {} saved",
        report.sources_fetched, report.sources_failed, report.candidates, report.accepted
    );

    Ok(())
}
