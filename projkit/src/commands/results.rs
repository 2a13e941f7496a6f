// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use camino::Utf8PathBuf;
use projkit_core::locate::do_locate;

pub fn command_results(
    name: String,
    search_paths: Vec<Utf8PathBuf>,
    parts: Vec<Utf8PathBuf>,
    plots: bool,
) -> Result<()> {
    let locator = do_locate(name, search_paths)?;
    let (results, plots) = locator.results_path(&parts, plots)?;
    println!("{results}");
    if let Some(plots) = plots {
        println!("{plots}");
    }

    Ok(())
}
