use std::sync::Arc;

use anyhow::Context;
use superstore_dashboard::config::DashboardConfig;
use superstore_dashboard::{web, Dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from_env()?;
    let dashboard = Dashboard::load(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))
        .inspect_err(|e| log::error!("Failed to load dataset: {e:#}"))?;

    web::serve(Arc::new(dashboard), config.bind_addr).await
}
