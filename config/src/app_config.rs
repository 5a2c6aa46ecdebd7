use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env,
    path::PathBuf,
};

/// Prefix of the directory override variables.
const ENV_PREFIX: &str = "SERVER_SURVEY";

#[derive(Clone, Debug, Deserialize, Default)]
pub(crate) struct AppConfig {
    #[serde(default)]
    pub(crate) config_dir: PathBuf,
}

lazy_static::lazy_static! {
    static ref DATA_FOLDER: Option<PathBuf> = env_override("DATA");
    static ref CONFIG_FOLDER: Option<PathBuf> = env_override("CONFIG");
}

/// `SERVER_SURVEY_DATA` or `SERVER_SURVEY_CONFIG`, read once per process.
fn env_override(kind: &str) -> Option<PathBuf> {
    env::var_os(format!("{ENV_PREFIX}_{kind}")).map(PathBuf::from)
}

pub fn get_data_dir() -> PathBuf {
    DATA_FOLDER
        .clone()
        .or_else(|| project_directory().map(|dirs| dirs.data_local_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

pub fn get_config_dir() -> PathBuf {
    CONFIG_FOLDER
        .clone()
        .or_else(|| project_directory().map(|dirs| dirs.config_local_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from(".").join(".config"))
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "server-survey", "server-survey")
}
