use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod export;
mod extract;
mod models;
mod pipeline;
mod search;

use config::{load_config, Config};
use export::{business_rows, write_workbook};
use models::Result;
use pipeline::ScrapePipeline;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("akut_scraper=info")),
        )
        .init();

    let args = cli::get_args();

    let mut config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };
    if let Some(limit) = args.limit_per_query {
        config.scraping.limit_per_query = limit;
    }
    if let Some(pause) = args.pause_seconds {
        config.scraping.pause_ms = (pause * 1000.0) as u64;
    }
    if let Some(output) = args.output {
        config.output.path = output.display().to_string();
    }

    let output_path = config.output.path.clone();
    let sheet_name = config.output.sheet_name.clone();

    let pipeline = ScrapePipeline::new(config)?;
    let businesses = pipeline.collect().await?;

    let rows = business_rows(&businesses);
    write_workbook(std::path::Path::new(&output_path), &sheet_name, &rows)?;

    println!("Saved {} businesses to {}", businesses.len(), output_path);
    Ok(())
}
