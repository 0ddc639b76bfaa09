use anyhow::Context;
use eframe::egui;

use decarb_explorer::app::ExplorerApp;
use decarb_explorer::config::Config;
use decarb_explorer::data::loader;
use decarb_explorer::data::model::LabelMaps;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let labels = LabelMaps::default();

    // Load once; any failure here is fatal so a partial dataset is never
    // served.
    let dataset = loader::load_file(&config.dataset_path, &labels)
        .with_context(|| format!("loading dataset from {}", config.dataset_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Decarbonisation Analysis of Flat Glass Production",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(dataset, labels)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
