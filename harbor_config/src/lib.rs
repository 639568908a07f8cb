use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
use serde::Deserialize;
use url::Url;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
///
/// Later files override earlier ones.
pub const CONFIG_PATHS_ENV: &str = "HARBOR_CONFIG";

/// Loads the config files named in [`CONFIG_PATHS_ENV`], or
/// [`DEFAULT_CONFIG_PATH`] if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATHS_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub jobs_api: JobsApiConfig,
    pub feed: FeedConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct JobsApiConfig {
    /// Defaults to the public job listing API.
    pub base_url: Option<Url>,
    pub timeout: Duration,
    /// If `false`, the built-in dataset is served without contacting the
    /// remote source, after the simulated latencies below.
    pub available: bool,
    pub list_latency: Duration,
    pub get_latency: Duration,
}

#[derive(Debug, Deserialize)]
pub struct FeedConfig {
    pub page_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
}
