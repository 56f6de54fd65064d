use std::env;

use anyhow::Context;
use controls_core::{App, AppConfig, ControllerChoice, JsonFileStore, PlatformRunner};
use tracing_subscriber::EnvFilter;

/// `controls_demo [settings-path] [keyboard|intermittent|gamepad]`
fn parse_args(args: &[String]) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::default();
    if let Some(path) = args.get(1) {
        config.settings_path = path.into();
    }
    if let Some(name) = args.get(2) {
        config.controller = name.parse::<ControllerChoice>()?;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args)?;

    let store = JsonFileStore::new(&config.settings_path);
    tracing::info!(
        "Loading key bindings from {} ({} controller)",
        store.path().display(),
        config.controller
    );
    let app = App::new(config.clone(), Box::new(store))
        .with_context(|| format!("cannot start without {}", config.settings_path.display()))?;

    PlatformRunner::new(app).start()?;
    tracing::info!("Exited cleanly");
    Ok(())
}
