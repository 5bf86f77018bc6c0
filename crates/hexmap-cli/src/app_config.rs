use config::{Config, ConfigError, Environment, File};
use hexmap::layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "hexmap_config.json";

/// Parameters of a map assembled from a shuffled terrain deck.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    /// Radius of the hexagonal island, at most 2 fits a single deck.
    pub radius: u32,
    /// Seed for a reproducible shuffle, thread random if missing.
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { radius: 2, seed: None }
    }
}

/// The application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Map to load, a map is generated if missing.
    pub map_file: Option<String>,
    #[serde(default)]
    pub generate: GenerateConfig,
    /// Where to write the map description, not saved if missing.
    pub save_map_file: Option<String>,
    pub output_file: String,
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Pointer positions replayed in order, the last one determines the selection.
    #[serde(default)]
    pub pointers: Vec<(f64, f64)>,
}

impl AppConfig {
    pub fn new(config_file: &str) -> Result<AppConfig, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(Path::new(config_file)))
            .add_source(Environment::with_prefix("HEXMAP").separator("--"));

        let s = builder.build()?;
        let cfg: AppConfig = s.try_deserialize()?;

        log::info!("configuration: {:#?}", cfg);
        Ok(cfg)
    }
}
