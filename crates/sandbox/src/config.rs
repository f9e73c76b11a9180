//! Sandbox configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Where to find content and which scenario to replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandboxConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
}

impl SandboxConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_SCENARIO: &'static str = "border_skirmish";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_DATA_DIR` - Content directory (default: `data`)
    /// - `SKIRMISH_SCENARIO` - Scenario name under `scenarios/` (default: `border_skirmish`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env("SKIRMISH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(scenario) = read_env("SKIRMISH_SCENARIO") {
            config.scenario = scenario;
        }

        config
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            scenario: Self::DEFAULT_SCENARIO.to_string(),
        }
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
