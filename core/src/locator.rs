// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{fmt, str::FromStr};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::{
    layout::{
        DATASETS_DIR, FIGURES_DIR, PLOTS_DIR, PROCESSED_DIR, ProjectNameError, RAW_DIR,
        RESULTS_DIR, check_project_name,
    },
    utils::{FsIoError, wrapfs},
};

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("project `{name}` not found in any of the search paths:{}", list_paths(.searched))]
    NotFound {
        name: String,
        searched: Vec<Utf8PathBuf>,
    },
    #[error(transparent)]
    InvalidName(#[from] ProjectNameError),
    #[error("subpath `{0}` must be relative and stay inside the project")]
    InvalidSubpath(Utf8PathBuf),
    #[error(transparent)]
    Io(#[from] Box<FsIoError>),
}

impl From<FsIoError> for LocateError {
    fn from(v: FsIoError) -> Self {
        Self::Io(Box::new(v))
    }
}

fn list_paths(paths: &[Utf8PathBuf]) -> String {
    if paths.is_empty() {
        return " (none given)".to_string();
    }
    paths.iter().map(|p| format!("\n  '{p}'")).collect()
}

/// Find the first `candidate/name` that is an existing directory.
///
/// Candidates are probed strictly in order and probing stops at the first
/// match. Nothing is created or modified.
pub fn resolve<I, P>(name: &str, candidates: I) -> Result<Utf8PathBuf, LocateError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Utf8Path>,
{
    check_project_name(name)?;

    let mut searched = vec![];
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let project_path = candidate.join(name);
        log::debug!("looking for project `{name}` in `{candidate}`");
        if wrapfs::is_dir(&project_path)? {
            return Ok(project_path);
        }
        searched.push(candidate.to_path_buf());
    }

    Err(LocateError::NotFound {
        name: name.to_string(),
        searched,
    })
}

/// Which part of `01_Datasets` to address.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DatasetsMode {
    #[default]
    Raw,
    Processed,
    Both,
}

impl DatasetsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetsMode::Raw => RAW_DIR,
            DatasetsMode::Processed => PROCESSED_DIR,
            DatasetsMode::Both => "both",
        }
    }
}

impl fmt::Display for DatasetsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown datasets mode `{0}`, expected one of `raw`, `processed` or `both`")]
pub struct ParseDatasetsModeError(String);

impl FromStr for DatasetsMode {
    type Err = ParseDatasetsModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(DatasetsMode::Raw),
            "processed" => Ok(DatasetsMode::Processed),
            "both" => Ok(DatasetsMode::Both),
            _ => Err(ParseDatasetsModeError(s.to_string())),
        }
    }
}

/// Paths returned by [`ProjectLocator::datasets_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetsPath {
    Single(Utf8PathBuf),
    Both {
        raw: Utf8PathBuf,
        processed: Utf8PathBuf,
    },
}

impl DatasetsPath {
    /// All returned paths, raw before processed.
    pub fn paths(&self) -> Vec<&Utf8Path> {
        match self {
            DatasetsPath::Single(path) => vec![path.as_path()],
            DatasetsPath::Both { raw, processed } => vec![raw.as_path(), processed.as_path()],
        }
    }

    pub fn single(self) -> Option<Utf8PathBuf> {
        match self {
            DatasetsPath::Single(path) => Some(path),
            DatasetsPath::Both { .. } => None,
        }
    }

    pub fn pair(self) -> Option<(Utf8PathBuf, Utf8PathBuf)> {
        match self {
            DatasetsPath::Single(_) => None,
            DatasetsPath::Both { raw, processed } => Some((raw, processed)),
        }
    }
}

/// A project folder found in one of a list of base directories.
///
/// A `ProjectLocator` only exists for a project that was found; its root
/// never changes afterwards. The accessors compute paths below the root and
/// create them (including missing parents) before returning them.
#[derive(Debug, Clone)]
pub struct ProjectLocator {
    name: String,
    candidates: Vec<Utf8PathBuf>,
    root: Utf8PathBuf,
}

impl ProjectLocator {
    pub fn new<S, I, P>(name: S, candidates: I) -> Result<Self, LocateError>
    where
        S: Into<String>,
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let name = name.into();
        let candidates: Vec<Utf8PathBuf> = candidates
            .into_iter()
            .map(|c| c.as_ref().to_path_buf())
            .collect();
        let root = resolve(&name, &candidates)?;

        let resolved = "Resolved";
        let header = crate::style::get_style_config().header;
        log::info!("{header}{resolved:>12}{header:#} project `{name}` at `{root}`");

        Ok(Self {
            name,
            candidates,
            root,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn candidates(&self) -> &[Utf8PathBuf] {
        &self.candidates
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn datasets_root(&self) -> Utf8PathBuf {
        self.root.join(DATASETS_DIR)
    }

    pub fn results_root(&self) -> Utf8PathBuf {
        self.root.join(RESULTS_DIR)
    }

    pub fn figures_root(&self) -> Utf8PathBuf {
        self.root.join(FIGURES_DIR)
    }

    /// `01_Datasets/{raw,processed}/<parts>`, or both of them.
    pub fn datasets_path<I, P>(
        &self,
        parts: I,
        mode: DatasetsMode,
    ) -> Result<DatasetsPath, LocateError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let subpath = join_parts(Utf8Path::new(""), parts)?;
        let datasets_root = self.datasets_root();

        let make = |kind: &str| -> Result<Utf8PathBuf, LocateError> {
            let path = join_parts(&datasets_root.join(kind), [&subpath])?;
            create(&path, &format!("datasets ({kind})"))?;
            Ok(path)
        };

        Ok(match mode {
            DatasetsMode::Raw => DatasetsPath::Single(make(RAW_DIR)?),
            DatasetsMode::Processed => DatasetsPath::Single(make(PROCESSED_DIR)?),
            DatasetsMode::Both => DatasetsPath::Both {
                raw: make(RAW_DIR)?,
                processed: make(PROCESSED_DIR)?,
            },
        })
    }

    /// `02_Results/<parts>`, plus its `plots` subfolder when `include_plots`.
    pub fn results_path<I, P>(
        &self,
        parts: I,
        include_plots: bool,
    ) -> Result<(Utf8PathBuf, Option<Utf8PathBuf>), LocateError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let path = join_parts(&self.results_root(), parts)?;
        create(&path, "results")?;

        let plots = if include_plots {
            let plots = path.join(PLOTS_DIR);
            create(&plots, "plots")?;
            Some(plots)
        } else {
            None
        };

        Ok((path, plots))
    }

    pub fn figures_path<I, P>(&self, parts: I) -> Result<Utf8PathBuf, LocateError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let path = join_parts(&self.figures_root(), parts)?;
        create(&path, "figures")?;
        Ok(path)
    }
}

fn join_parts<I, P>(base: &Utf8Path, parts: I) -> Result<Utf8PathBuf, LocateError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Utf8Path>,
{
    let mut path = base.to_path_buf();
    for part in parts {
        let part = part.as_ref();
        for component in part.components() {
            match component {
                Utf8Component::Normal(c) => path.push(c),
                Utf8Component::CurDir => {}
                Utf8Component::ParentDir | Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                    return Err(LocateError::InvalidSubpath(part.to_path_buf()));
                }
            }
        }
    }
    Ok(path)
}

fn create(path: &Utf8Path, what: &str) -> Result<(), LocateError> {
    wrapfs::create_dir_all(path)?;
    log::info!("{what} folder: `{path}`");
    Ok(())
}
