use anyhow::{Context, Result};
use exoplanet_explorer::{ExplorerApp, ExplorerConfig, PlanetId, Scenario, scenario};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting Exoplanet Explorer...");

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let records_file = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "data/kepler_results.json".to_string());

    let focus = match args.get(2) {
        Some(raw) => Some(
            raw.parse::<PlanetId>()
                .with_context(|| format!("invalid planet id '{raw}'"))?,
        ),
        None => None,
    };

    let config = match args.get(3) {
        Some(path) => ExplorerConfig::load(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => ExplorerConfig::default(),
    };

    log::info!("Using result set: {}", records_file);
    if let Some(focus) = focus {
        log::info!("Focusing on planet: {}", focus);
    }

    let scenario = Scenario::load(&records_file)
        .with_context(|| format!("failed to load result set from {records_file}"))?;
    scenario::require_non_empty(&scenario)?;

    let app = ExplorerApp::new(scenario, focus, &config)?;
    app.run(&config)
}
