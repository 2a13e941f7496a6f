// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use camino::Utf8Path;
use projkit_core::{new::do_new, utils::wrapfs};

use crate::CliError;

pub fn command_new<P: AsRef<Utf8Path>>(name: String, destination: P) -> Result<()> {
    let destination = destination.as_ref();
    if wrapfs::is_file(destination)? {
        return Err(CliError::InvalidDirectory(format!(
            "destination `{destination}` is a file"
        ))
        .into());
    }

    let root = do_new(&name, destination)?;
    println!("{root}");

    Ok(())
}
