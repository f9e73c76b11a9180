//! Skirmish sandbox binary.
//!
//! Loads the content directory, spawns the scenario's units and replays its
//! events, logging every lifecycle change.
//!
//! ```bash
//! RUST_LOG=debug SKIRMISH_SCENARIO=border_skirmish cargo run -p skirmish-sandbox
//! ```

use anyhow::Result;
use skirmish_content::ContentFactory;
use skirmish_core::Env;
use skirmish_sandbox::{SandboxConfig, Skirmish};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SandboxConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        scenario = %config.scenario,
        "starting sandbox"
    );

    let factory = ContentFactory::open(&config.data_dir)?;
    let units = factory.load_units()?;
    let skills = factory.load_skills()?;
    let scenario = factory.load_scenario(&config.scenario)?;
    let assets = factory.assets();
    let env = Env::with_all(&assets, &skills);

    let mut skirmish = Skirmish::setup(&scenario, &units, &env)?;
    skirmish.run(&scenario.events, &skills)?;
    skirmish.report();

    Ok(())
}
