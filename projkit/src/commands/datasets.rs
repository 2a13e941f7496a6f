// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use camino::Utf8PathBuf;
use projkit_core::{DatasetsMode, locate::do_locate};

/// Prints the datasets folder, or with `DatasetsMode::Both` the raw and
/// processed folders on separate lines.
pub fn command_datasets(
    name: String,
    search_paths: Vec<Utf8PathBuf>,
    parts: Vec<Utf8PathBuf>,
    mode: DatasetsMode,
) -> Result<()> {
    let locator = do_locate(name, search_paths)?;
    for path in locator.datasets_path(&parts, mode)?.paths() {
        println!("{path}");
    }

    Ok(())
}
