// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use camino::Utf8PathBuf;
use projkit_core::locate::do_locate;

pub fn command_figures(
    name: String,
    search_paths: Vec<Utf8PathBuf>,
    parts: Vec<Utf8PathBuf>,
) -> Result<()> {
    let locator = do_locate(name, search_paths)?;
    println!("{}", locator.figures_path(&parts)?);

    Ok(())
}
