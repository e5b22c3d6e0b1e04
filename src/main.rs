//! FAQ Lookup - Main entry point
//!
//! Loads the corpus snapshot once and serves FAQ lookups over the Model
//! Context Protocol (MCP) on stdio.

use anyhow::Result;
use faq_lookup::repositories;
use faq_lookup::services::{LookupLimits, LookupService, LookupSession};
use faq_lookup::{search, Config, FaqMcpServer, Metrics, SynonymTable};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let loaded = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = match &loaded {
        Ok(cfg) => cfg.env_filter(),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting FAQ lookup with data source {} ({} strategy)",
        config.data_source, config.strategy
    );

    // A failed load is fatal and not retried
    let repository = repositories::for_source(&config.data_source, config.request_timeout);
    let snapshot = match repository.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load corpus from {}: {}", repository.describe(), e);
            return Err(e.into());
        }
    };
    info!(
        "Loaded {} FAQ entries and {} contacts from {}",
        snapshot.qa.len(),
        snapshot.contacts.len(),
        repository.describe()
    );

    let metrics = Metrics::new();
    let strategy = search::from_config(&config, &metrics);

    let session = LookupSession::new(Arc::new(snapshot), strategy, metrics)
        .with_synonyms(SynonymTable::korean_default())
        .with_policy(config.duplicate_policy)
        .with_limits(LookupLimits {
            max_related: config.max_related_results,
            max_contacts: config.max_contact_results,
        });

    let server = FaqMcpServer::new(Arc::new(session) as Arc<dyn LookupService>);

    info!("Starting MCP server with stdio transport");
    faq_lookup::server::run_server(server).await?;

    info!("FAQ lookup shutdown complete");
    Ok(())
}
