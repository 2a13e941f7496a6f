// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod commands;
pub use commands::*;

pub mod config;
pub mod layout;
pub mod locator;
pub mod store;
pub mod style;
pub mod timer;
pub mod utils;

pub use locator::{DatasetsMode, DatasetsPath, LocateError, ProjectLocator};
