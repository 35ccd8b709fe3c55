use gonews_server::{run, ServerConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gonews_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::load()?;
    tracing::debug!(?config, "configuration loaded");
    run(config).await?;
    Ok(())
}
