// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid directory: '{0}'")]
    InvalidDirectory(String),
    #[error("no search paths configured; pass `--search-path` or set `search_paths` in `projkit.toml`")]
    NoSearchPaths,
}
