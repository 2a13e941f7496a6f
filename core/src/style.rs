// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::OnceLock;

use anstyle::Style;

#[derive(Default)]
pub struct Config {
    /// Right-aligned verb of status lines such as `Resolved`.
    pub header: Style,
}

static STYLE_CONFIG: OnceLock<Config> = OnceLock::new();

pub fn set_style_config(config: Config) {
    let _ = STYLE_CONFIG.set(config);
}

pub fn get_style_config() -> &'static Config {
    STYLE_CONFIG.get_or_init(Config::default)
}
