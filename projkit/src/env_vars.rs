// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Corresponds to the `--search-path` command line argument. A list of base
/// directories in the platform's path list format (`:` separated on Unix,
/// `;` on Windows), searched in order before any configured ones.
pub const PROJKIT_SEARCH_PATH: &str = "PROJKIT_SEARCH_PATH";

/// Corresponds to the `--config-file` command line argument. Should be a file path to
/// a Projkit config file.
pub const PROJKIT_CONFIG_FILE: &str = "PROJKIT_CONFIG_FILE";

/// Corresponds to the `--no-config` command line argument. If set prevents reading of any
/// Projkit config files.
pub const PROJKIT_NO_CONFIG: &str = "PROJKIT_NO_CONFIG";
