// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use super::Config;
use crate::utils::{FsIoError, wrapfs};

pub const CONFIG_DIR: &str = "projkit";
pub const CONFIG_FILE: &str = "projkit.toml";

#[derive(Error, Debug)]
pub enum ConfigReadError {
    #[error("failed to deserialize TOML file `{0}`: {1}")]
    Toml(Box<Utf8Path>, toml::de::Error),
    #[error(transparent)]
    Io(#[from] Box<FsIoError>),
}

impl From<FsIoError> for ConfigReadError {
    fn from(v: FsIoError) -> Self {
        Self::Io(Box::new(v))
    }
}

/// Read the configuration at `path`. A missing file is an empty configuration.
///
/// Relative `search_paths` are taken relative to the directory holding the file.
pub fn get_config<P: AsRef<Utf8Path>>(path: P) -> Result<Config, ConfigReadError> {
    let path = path.as_ref();
    if !wrapfs::is_file(path)? {
        return Ok(Config::default());
    }

    let contents = wrapfs::read_to_string(path)?;
    log::debug!("reading configuration from `{path}`");
    let mut config: Config =
        toml::from_str(&contents).map_err(|e| ConfigReadError::Toml(path.into(), e))?;

    if let Some(dir) = path.parent() {
        for search_path in config.search_paths.iter_mut() {
            if search_path.is_relative() {
                *search_path = dir.join(&*search_path);
            }
        }
    }

    Ok(config)
}

/// The user-wide configuration file, if the platform has a configuration directory.
pub fn user_config_path() -> Option<Utf8PathBuf> {
    let mut path = Utf8PathBuf::from_path_buf(dirs::config_dir()?).ok()?;
    path.push(CONFIG_DIR);
    path.push(CONFIG_FILE);
    Some(path)
}

/// Load the user-wide configuration followed by `projkit.toml` in `working_dir`.
pub fn load_configs<P: AsRef<Utf8Path>>(working_dir: P) -> Result<Config, ConfigReadError> {
    load_configs_from(user_config_path(), working_dir)
}

fn load_configs_from<P: AsRef<Utf8Path>>(
    user_config: Option<Utf8PathBuf>,
    working_dir: P,
) -> Result<Config, ConfigReadError> {
    let mut config = user_config.map_or_else(|| Ok(Config::default()), get_config)?;
    config.merge(get_config(working_dir.as_ref().join(CONFIG_FILE))?);

    Ok(config)
}
