use std::sync::Arc;

use kino_catalog::{
    config::Config,
    services::KinopoiskClient,
    view::{run_session, CatalogController},
};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the rendered catalog on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kino_catalog=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.kinopoisk_api_url, page_size = config.page_size, "Starting catalog");

    let client = KinopoiskClient::from_config(&config);
    let controller = CatalogController::new(Arc::new(client), config.page_size);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_session(&controller, stdin, &mut stdout).await?;

    Ok(())
}
