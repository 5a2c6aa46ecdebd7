#[macro_use]
extern crate tracing;

mod app_config;
mod args;
mod sort_key;

use app_config::AppConfig;
pub use app_config::{
    get_config_dir,
    get_data_dir,
};
pub use args::{
    version,
    Args,
    Command,
    ListArgs,
};
use color_eyre::Result;
use eyre::Context as _;
use serde::{
    Deserialize,
    Serialize,
};
pub use sort_key::SortKey;
use std::{
    collections::HashMap,
    path::Path,
    time::Duration,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten, skip_serializing)]
    app_config: AppConfig,
    /// Base URLs of the servers the request is fanned out to.
    #[serde(default)]
    pub servers: Vec<url::Url>,
    #[serde(default = "default_status_path")]
    pub status_path: String,
    /// Collection window in humantime notation.
    #[serde(default = "default_timeout")]
    pub timeout: String,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default = "default_compact")]
    pub compact: bool,
}

const DEFAULT_CONFIG: &str = include_str!("default-config.yaml");

fn default_status_path() -> String {
    "/statsz".to_string()
}

fn default_timeout() -> String {
    "5s".to_string()
}

fn default_compact() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        serde_yml::from_str(DEFAULT_CONFIG).expect("Failed to parse default config")
    }
}

impl config::Source for Config {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        let mut cache = HashMap::<String, config::Value>::new();
        cache.insert(
            "servers".to_string(),
            self.servers.iter().map(|url| url.to_string()).collect::<Vec<_>>().into(),
        );
        cache.insert("status_path".to_string(), self.status_path.clone().into());
        cache.insert("timeout".to_string(), self.timeout.clone().into());
        cache.insert("sort".to_string(), self.sort.to_string().into());
        cache.insert("compact".to_string(), self.compact.into());
        Ok(cache)
    }
}

impl Config {
    /// Builds the effective configuration: built-in defaults, then the
    /// optional `config.yaml` in the config directory, then `args`.
    pub fn new(args: Args) -> Result<Self, config::ConfigError> {
        Self::load(&get_config_dir(), args)
    }

    pub(crate) fn load(config_dir: &Path, args: Args) -> Result<Self, config::ConfigError> {
        let mut builder =
            config::Config::builder().set_default("config_dir", config_dir.to_string_lossy().to_string())?;

        builder = builder.add_source(Config::default());

        let config_files = [("config.yaml", config::FileFormat::Yaml)];

        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
        }

        builder = builder.add_source(args);

        let cfg: Self = builder.build()?.try_deserialize()?;
        debug!(servers = cfg.servers.len(), timeout = %cfg.timeout, sort = %cfg.sort, "configuration loaded");

        Ok(cfg)
    }

    /// The collection window as a [`Duration`].
    pub fn timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.timeout).wrap_err_with(|| format!("Invalid timeout '{}'", self.timeout))
    }

    pub fn config_dir(&self) -> &Path {
        &self.app_config.config_dir
    }
}
