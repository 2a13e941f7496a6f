// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Names of the folders making up a standard project tree.

use camino::{Utf8Component, Utf8Path};
use thiserror::Error;

pub const DATASETS_DIR: &str = "01_Datasets";
pub const RESULTS_DIR: &str = "02_Results";
pub const FIGURES_DIR: &str = "03_Figures";
pub const DOCUMENTS_DIR: &str = "04_Documents";

pub const RAW_DIR: &str = "raw";
pub const PROCESSED_DIR: &str = "processed";
pub const PLOTS_DIR: &str = "plots";

pub const README_FILE: &str = "README.txt";

/// Top-level folders, each described by a `README.txt`.
pub const TOP_LEVEL_FOLDERS: [(&str, &str); 4] = [
    (
        DATASETS_DIR,
        "Contains the datasets used in the project.\n\
        - raw/: original datasets received or downloaded\n\
        - processed/: transformed or generated datasets",
    ),
    (
        RESULTS_DIR,
        "Results of the experiments: outputs, metrics, saved models, etc.",
    ),
    (
        FIGURES_DIR,
        "Figures useful for communication: diagrams, figures for articles or presentations.",
    ),
    (
        DOCUMENTS_DIR,
        "Project documentation:\n\
        - 01_References/: third-party material (slides, articles, papers)\n\
        - 02_Presentations/: presentations created by you\n\
        - 03_Reports/: technical reports\n\
        - 04_Bureaucracy/: bureaucratic material\n\
        - 05_Notes/: internal notes or meeting notes",
    ),
];

/// Nested folders created without a description file.
pub const SUBFOLDERS: [&str; 7] = [
    "01_Datasets/raw",
    "01_Datasets/processed",
    "04_Documents/01_References",
    "04_Documents/02_Presentations",
    "04_Documents/03_Reports",
    "04_Documents/04_Bureaucracy",
    "04_Documents/05_Notes",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProjectNameError {
    #[error("project name must not be empty")]
    Empty,
    #[error("project name `{0}` must be a single directory name")]
    NotSingleComponent(String),
}

/// A project name is used verbatim as a directory name below a base
/// directory, so it has to be exactly one normal path component.
pub fn check_project_name(name: &str) -> Result<(), ProjectNameError> {
    if name.is_empty() {
        return Err(ProjectNameError::Empty);
    }
    let mut components = Utf8Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(component)), None) if component == name => Ok(()),
        _ => Err(ProjectNameError::NotSingleComponent(name.to_string())),
    }
}
