use std::io::Write;

use anyhow::Context;
use author_profile::{config::AppConfig, db, telemetry, Author};

/// Applies the schema and prints every stored author as one JSON object per line.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init(config.log_format);

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;

    let authors = Author::find_all(&pool).await?;
    tracing::info!(count = authors.len(), "authors loaded");

    let mut out = std::io::stdout().lock();
    for author in &authors {
        let line = serde_json::to_string(author).context("serialize author")?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}
