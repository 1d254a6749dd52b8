use anyhow::Context;
use disaster_stories::app::DisasterStoriesApp;
use disaster_stories::config::DashboardConfig;
use disaster_stories::data::loader;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // A dataset that cannot be loaded means no dashboard at all.
    let dataset = loader::load(&config)
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Immersive Disaster Data Stories",
        options,
        Box::new(move |_cc| Ok(Box::new(DisasterStoriesApp::new(dataset, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard: {e}"))
}
