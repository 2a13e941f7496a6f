// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

pub mod local_fs;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    /// Base directories searched for projects, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<Utf8PathBuf>,
}

impl Config {
    /// Fill in unset values from `config` and append its search paths
    /// after the ones already present.
    pub fn merge(&mut self, config: Config) {
        self.quiet = self.quiet.or(config.quiet);
        self.verbose = self.verbose.or(config.verbose);
        self.search_paths.extend(config.search_paths);
    }

    /// Candidate directories for project lookup: `explicit` ones first,
    /// then configured ones. `defaults` are only used if both are empty.
    pub fn search_paths(
        &self,
        explicit: Vec<Utf8PathBuf>,
        defaults: Vec<Utf8PathBuf>,
    ) -> Vec<Utf8PathBuf> {
        let mut paths: Vec<Utf8PathBuf> = explicit
            .into_iter()
            .chain(self.search_paths.iter().cloned())
            .collect();
        if paths.is_empty() {
            paths = defaults;
        }

        let mut seen = std::collections::HashSet::new();
        paths.retain(|p| seen.insert(p.clone()));
        paths
    }
}
