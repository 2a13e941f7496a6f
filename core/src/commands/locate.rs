// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8Path;

use crate::{
    locator::{LocateError, ProjectLocator},
    timer::Timer,
};

/// Resolve `name` against `candidates`, logging how long the search took.
pub fn do_locate<S, I, P>(name: S, candidates: I) -> Result<ProjectLocator, LocateError>
where
    S: Into<String>,
    I: IntoIterator<Item = P>,
    P: AsRef<Utf8Path>,
{
    let _timer = Timer::with_reporter("project search", |line| log::debug!("{line}"));
    ProjectLocator::new(name, candidates)
}
