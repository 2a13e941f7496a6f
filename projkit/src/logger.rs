// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use env_logger::{Builder, Target, fmt::Formatter};
use log::{LevelFilter, Record, SetLoggerError};
use std::io::Write;

use crate::style;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    Builder::new()
        .filter_level(level)
        .format(format)
        .target(Target::Stderr)
        .try_init()
}

fn format(buf: &mut Formatter, record: &Record<'_>) -> Result<(), std::io::Error> {
    match record.level() {
        log::Level::Error => {
            let style = style::ERROR;
            writeln!(buf, "{style}error{style:#}: {}", record.args())
        }
        log::Level::Warn => {
            let style = style::WARN;
            writeln!(buf, "{style}warning{style:#}: {}", record.args())
        }
        _ => {
            writeln!(buf, "{}", record.args())
        }
    }
}

const SP: char = ' ';

/// Print a warning that built-in default search paths are used
pub fn warn_default_search_paths() {
    log::warn!(
        "no search paths given, falling back to the default locations.\n\
        {SP:>8} Pass `--search-path` or set `search_paths` in `projkit.toml`"
    );
}
