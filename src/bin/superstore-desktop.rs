use std::sync::Arc;

use anyhow::Context;
use eframe::egui;
use superstore_dashboard::app::DashboardApp;
use superstore_dashboard::config::DashboardConfig;
use superstore_dashboard::layout::DASHBOARD_TITLE;
use superstore_dashboard::Dashboard;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from_env()?;
    let dashboard = Dashboard::load(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let dashboard = Arc::new(dashboard);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        DASHBOARD_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dashboard)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with an error: {e}"))
}
