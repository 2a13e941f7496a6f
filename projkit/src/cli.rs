// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use projkit_core::DatasetsMode;

use crate::env_vars;

/// Scaffold and find research project folders
///
/// A project is a folder named after the project inside one of the search
/// paths, laid out as `01_Datasets/{raw,processed}`, `02_Results`,
/// `03_Figures` and `04_Documents`. Path commands print the requested
/// folder, creating it first if needed.
#[derive(clap::Parser, Debug)]
#[command(version)]
#[command(long_about, verbatim_doc_comment)]
#[command(arg_required_else_help = true)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(styles=crate::style::STYLING)]
pub struct Args {
    #[command(flatten)]
    pub global_opts: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,

    /// Display the projkit version.
    #[arg(short = 'V', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the standard folder structure for a new project
    New {
        /// The name of the project, used as the name of its folder
        name: String,
        /// Directory to create the project in. Defaults to the first
        /// search path, or the current directory if none is configured
        #[clap(verbatim_doc_comment)]
        destination: Option<Utf8PathBuf>,
    },
    /// Print the root folder of a project
    Locate {
        /// The name of the project
        name: String,
    },
    /// Print (and create) a folder inside `01_Datasets`
    Datasets {
        /// The name of the project
        name: String,
        /// Path segments below `raw` or `processed`
        parts: Vec<Utf8PathBuf>,
        /// Which datasets folder to use: `raw`, `processed` or `both`.
        /// `both` prints the raw folder followed by the processed one
        #[clap(verbatim_doc_comment)]
        #[arg(long, short, default_value_t = DatasetsMode::Raw)]
        mode: DatasetsMode,
    },
    /// Print (and create) a folder inside `02_Results`
    Results {
        /// The name of the project
        name: String,
        /// Path segments below `02_Results`
        parts: Vec<Utf8PathBuf>,
        /// Also create a `plots` subfolder and print it on a second line
        #[arg(long, default_value = "false")]
        plots: bool,
    },
    /// Print (and create) a folder inside `03_Figures`
    Figures {
        /// The name of the project
        name: String,
        /// Path segments below `03_Figures`
        parts: Vec<Utf8PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
pub struct GlobalOptions {
    /// Use verbose output
    #[arg(
        long,
        short,
        group = "log-level",
        global = true,
        help_heading = "Global options"
    )]
    pub verbose: bool,
    /// Do not output log messages
    #[arg(
        long,
        short,
        group = "log-level",
        global = true,
        help_heading = "Global options"
    )]
    pub quiet: bool,
    /// Base directory to search for projects. Can be given multiple times;
    /// directories are searched in the order given, before configured ones
    #[arg(
        long,
        short,
        global = true,
        help_heading = "Global options",
        env = env_vars::PROJKIT_SEARCH_PATH,
        value_delimiter = SEARCH_PATH_DELIMITER
    )]
    pub search_path: Vec<Utf8PathBuf>,
    /// Disable discovery of configuration files
    #[arg(long, global = true, help_heading = "Global options", env = env_vars::PROJKIT_NO_CONFIG)]
    pub no_config: bool,
    /// Give path to `projkit.toml` to use for configuration
    #[arg(long, global = true, help_heading = "Global options", env = env_vars::PROJKIT_CONFIG_FILE)]
    pub config_file: Option<Utf8PathBuf>,
    /// Print help
    #[arg(long, short, global = true, action = clap::ArgAction::HelpLong, help_heading = "Global options")]
    pub help: Option<bool>,
}

#[cfg(windows)]
const SEARCH_PATH_DELIMITER: char = ';';
#[cfg(not(windows))]
const SEARCH_PATH_DELIMITER: char = ':';
