use anyhow::Context;
use log::info;
use std::sync::Arc;

use video_catalog::shared::config::CatalogConfig;
use video_catalog::shared::infrastructure::elastic_search::mapping;
use video_catalog::shared::infrastructure::{DocumentStore, ElasticsearchClient};
use video_catalog::shared::utils::logger::init_logger;

/// Creates the catalog index with its mapping when it does not exist yet
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = CatalogConfig::from_env().context("invalid search engine configuration")?;
    let client: Arc<dyn DocumentStore> = Arc::new(
        ElasticsearchClient::new(&config.elasticsearch)
            .context("failed to build search engine client")?,
    );

    if client
        .index_exists()
        .await
        .context("failed to check the catalog index")?
    {
        info!("Index '{}' already exists", config.elasticsearch.index);
        return Ok(());
    }

    client
        .create_index(mapping::index_body())
        .await
        .with_context(|| format!("failed to create index '{}'", config.elasticsearch.index))?;
    info!("Index '{}' is ready", config.elasticsearch.index);
    Ok(())
}
