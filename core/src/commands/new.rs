// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::{
    layout::{ProjectNameError, README_FILE, SUBFOLDERS, TOP_LEVEL_FOLDERS, check_project_name},
    utils::{FsIoError, wrapfs},
};

#[derive(Error, Debug)]
pub enum NewError {
    #[error(transparent)]
    InvalidName(#[from] ProjectNameError),
    #[error(transparent)]
    Io(#[from] Box<FsIoError>),
}

impl From<FsIoError> for NewError {
    fn from(v: FsIoError) -> Self {
        Self::Io(Box::new(v))
    }
}

/// Scaffold the standard project tree at `destination/name`.
///
/// Existing folders are reused and the `README.txt` files are rewritten,
/// so running this again on a project only restores missing pieces.
/// Returns the project root.
pub fn do_new<P: AsRef<Utf8Path>>(name: &str, destination: P) -> Result<Utf8PathBuf, NewError> {
    check_project_name(name)?;
    let project_path = destination.as_ref().join(name);

    let creating = "Creating";
    let header = crate::style::get_style_config().header;
    log::info!("{header}{creating:>12}{header:#} project `{name}` in `{project_path}`");

    wrapfs::create_dir_all(&project_path)?;

    for (folder, description) in TOP_LEVEL_FOLDERS {
        let folder_path = project_path.join(folder);
        wrapfs::create_dir_all(&folder_path)?;
        wrapfs::write(
            folder_path.join(README_FILE),
            format!("{}\n", description.trim()),
        )?;
    }

    for subfolder in SUBFOLDERS {
        wrapfs::create_dir_all(project_path.join(subfolder))?;
    }

    log::debug!("project structure created in `{project_path}`");

    Ok(project_path)
}
