// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{ffi::OsString, panic, process::ExitCode};

use anstream::{eprint, eprintln};
use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;

use projkit_core::{
    config::{
        Config,
        local_fs::{get_config, load_configs},
    },
    utils::wrapfs,
};

use crate::{
    cli::Args,
    commands::{
        datasets::command_datasets, figures::command_figures, locate::command_locate,
        new::command_new, results::command_results,
    },
};

pub mod cli;
pub mod commands;
pub mod env_vars;
pub mod logger;
pub mod style;

mod error;
pub use error::CliError;

pub fn lib_main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    set_panic_hook();

    match Args::try_parse_from(args) {
        Ok(args) => {
            if let Err(err) = run_cli(args) {
                let style = style::ERROR;
                eprint!("{style}error{style:#}: ");
                for cause in err.chain() {
                    eprintln!("{}", cause);
                }
                return ExitCode::FAILURE;
            }
        }
        Err(err) => {
            // Nothing sensible is left to do if stderr is gone
            let _ = err.print();
            return ExitCode::from(err.exit_code() as u8);
        }
    }
    ExitCode::SUCCESS
}

fn set_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        std::eprintln!(
            "Projkit crashed. This is a bug. Please include the details\n\
            below when reporting it."
        );
        default_hook(panic_info);
    }));
}

pub fn run_cli(args: cli::Args) -> Result<()> {
    projkit_core::style::set_style_config(crate::style::CONFIG);

    let cwd = wrapfs::current_dir()?;

    let auto_config = if args.global_opts.no_config {
        Config::default()
    } else {
        load_configs(&cwd)?
    };

    let mut config = if let Some(config_file) = &args.global_opts.config_file {
        get_config(config_file)?
    } else {
        Config::default()
    };

    config.merge(auto_config);

    let verbose = args.global_opts.verbose
        || (!args.global_opts.quiet && config.verbose.unwrap_or(false));
    let quiet = !verbose && (args.global_opts.quiet || config.quiet.unwrap_or(false));
    let log_level = get_log_level(verbose, quiet);
    if logger::init(log_level).is_err() {
        let warn = style::WARN;
        eprintln!(
            "{warn}warning{warn:#}: failed to set up logger because it has already been set up;\n\
            {:>8} log messages may not be formatted properly",
            ' '
        );
        log::set_max_level(log_level);
    }

    config.search_paths = absolutise(&cwd, std::mem::take(&mut config.search_paths));
    let explicit_paths = absolutise(&cwd, args.global_opts.search_path);
    let configured = !(explicit_paths.is_empty() && config.search_paths.is_empty());
    let search_paths = config.search_paths(explicit_paths, default_search_paths());

    match args.command {
        cli::Command::New { name, destination } => {
            let destination = match destination {
                Some(destination) if destination.is_relative() => cwd.join(destination),
                Some(destination) => destination,
                None if configured => search_paths[0].clone(),
                None => cwd,
            };
            command_new(name, destination)
        }
        cli::Command::Locate { name } => {
            command_locate(name, lookup_paths(configured, search_paths)?)
        }
        cli::Command::Datasets { name, parts, mode } => command_datasets(
            name,
            lookup_paths(configured, search_paths)?,
            parts,
            mode,
        ),
        cli::Command::Results { name, parts, plots } => {
            command_results(name, lookup_paths(configured, search_paths)?, parts, plots)
        }
        cli::Command::Figures { name, parts } => {
            command_figures(name, lookup_paths(configured, search_paths)?, parts)
        }
    }
}

fn lookup_paths(
    configured: bool,
    search_paths: Vec<Utf8PathBuf>,
) -> Result<Vec<Utf8PathBuf>, CliError> {
    if !configured {
        crate::logger::warn_default_search_paths();
    }
    if search_paths.is_empty() {
        return Err(CliError::NoSearchPaths);
    }
    Ok(search_paths)
}

/// Built-in project locations, used only when neither the command line nor
/// the configuration name any.
pub fn default_search_paths() -> Vec<Utf8PathBuf> {
    let Some(home) = dirs::home_dir().and_then(|h| Utf8PathBuf::from_path_buf(h).ok()) else {
        return vec![];
    };
    vec![home.join("Projects"), home.join("Documents").join("Projects")]
}

fn absolutise(cwd: &Utf8Path, paths: Vec<Utf8PathBuf>) -> Vec<Utf8PathBuf> {
    paths
        .into_iter()
        .map(|p| if p.is_absolute() { p } else { cwd.join(p) })
        .collect()
}

fn get_log_level(verbose: bool, quiet: bool) -> log::LevelFilter {
    match (verbose, quiet) {
        (true, true) => unreachable!(),
        (true, false) => log::LevelFilter::Debug,
        (false, true) => log::LevelFilter::Error,
        (false, false) => log::LevelFilter::Info,
    }
}
