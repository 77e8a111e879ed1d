//! Locating and reading the optional `config.toml`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use diagen::{DiagenError, config::AppConfig};

/// Config file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "diagen/config.toml";

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid configuration in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl From<ConfigError> for DiagenError {
    fn from(err: ConfigError) -> Self {
        DiagenError::Config(err.to_string())
    }
}

/// Returns the configuration to run with.
///
/// An explicit path must point at a readable file. Without one,
/// `diagen/config.toml` in the working directory and then `config.toml` in
/// the platform config directory are tried; the built-in defaults apply
/// when neither exists.
///
/// # Errors
///
/// Returns [`DiagenError::Config`] if the chosen file cannot be read or
/// parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, DiagenError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match candidate_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path = path.display().to_string(); "Loading configuration");
    Ok(read_config(&path)?)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    paths.extend(ProjectDirs::from("", "", "diagen").map(|dirs| dirs.config_dir().join("config.toml")));
    paths
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
