//! Optional `config.toml` holding world-generation tunables.

use directories::ProjectDirs;
use geocoin_core::{ConfigError, WorldConfig};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::APP_NAME;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("could not parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("invalid world config in {}: {source}", path.display())]
    Invalid { path: PathBuf, source: ConfigError },
}

pub fn get_default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.toml");
        path
    })
}

/// Reads the config at `path`; a missing file yields the defaults.
pub fn load_world_config(path: &Path) -> Result<WorldConfig, ConfigFileError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(WorldConfig::default()),
        Err(source) => return Err(ConfigFileError::Io { path: path.to_path_buf(), source }),
    };
    let config: WorldConfig = toml::from_str(&content)
        .map_err(|source| ConfigFileError::Parse { path: path.to_path_buf(), source })?;
    config
        .validate()
        .map_err(|source| ConfigFileError::Invalid { path: path.to_path_buf(), source })?;
    Ok(config)
}
