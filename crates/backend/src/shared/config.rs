use chrono::NaiveDate;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::dashboards::d402_supply_chain::generator::GenerationParams;
use crate::dashboards::d402_supply_chain::table::DEFAULT_ROW_CAP;
use crate::shared::cache::CachePolicy;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub cache: CacheConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (trunk output)
    pub static_dir: String,
}

/// A missing `[dataset]` section means the seeded default range;
/// a present section without `seed` means unseeded generation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatasetConfig {
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Same rule as the dataset: `[cache]` without `ttl_secs` caches forever.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub row_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            cache: CacheConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or(NaiveDate::MIN)
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
            seed: Some(42),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: Some(3600),
        }
    }
}

impl DatasetConfig {
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            start_date: self.start_date,
            end_date: self.end_date,
            seed: self.seed,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            row_cap: DEFAULT_ROW_CAP,
        }
    }
}

impl Config {
    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy::from_ttl_secs(self.cache.ttl_secs)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port).parse()?;
        Ok(addr)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.display.row_cap == 0 {
            anyhow::bail!("display.row_cap must be greater than zero");
        }
        self.dataset
            .generation_params()
            .day_count()
            .map_err(|e| anyhow::anyhow!("dataset: {}", e))?;
        Ok(())
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to built-in defaults
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(config_path) = config_path() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default configuration");
    Ok(Config::default())
}

fn config_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}
