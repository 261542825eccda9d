use anyhow::Result;
use tracing::info;

use visual_touch::{api, config, db};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("visual_touch=info".parse()?)
        )
        .init();

    info!("Starting Visual Touch v{}", env!("CARGO_PKG_VERSION"));

    let cfg = config::load()?;
    info!("Configuration loaded");

    let db_pool = db::init(&cfg).await?;
    info!("Database initialized");

    let users = db::UserStore::new(db_pool);
    api::serve(cfg, users).await
}
