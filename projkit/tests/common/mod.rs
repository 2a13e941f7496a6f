// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use std::{
    error::Error,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output},
};
use tempfile::TempDir;

pub fn projkit_cmd_in<'a, I: IntoIterator<Item = &'a str>>(
    cwd: &Path,
    args: I,
    cfg: Option<&str>,
) -> Result<Command, Box<dyn Error>> {
    let cfg_args = if let Some(config) = cfg {
        let config_path = cwd.join("projkit.toml");
        let mut config_file = std::fs::File::create_new(&config_path)?;
        config_file.write_all(config.as_bytes())?;
        vec![
            "--config-file".to_string(),
            config_path.display().to_string(),
        ]
    } else {
        vec![]
    };
    let args = [
        args.into_iter().map(|s| s.to_string()).collect(),
        vec!["--no-config".to_string()],
        cfg_args,
    ]
    .concat();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("projkit"));

    cmd.env("NO_COLOR", "1");
    cmd.env_remove("PROJKIT_SEARCH_PATH");
    cmd.env_remove("PROJKIT_CONFIG_FILE");
    cmd.env_remove("PROJKIT_NO_CONFIG");

    cmd.args(args);

    cmd.current_dir(cwd);

    Ok(cmd)
}

/// Like `projkit_cmd_in`, but with configuration discovery enabled. The
/// home and configuration directories point into `cwd/home`, so only files
/// written by the test are found.
pub fn projkit_cmd_discovering<'a, I: IntoIterator<Item = &'a str>>(
    cwd: &Path,
    args: I,
) -> Result<Command, Box<dyn Error>> {
    let home = cwd.join("home");
    std::fs::create_dir_all(&home)?;
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("projkit"));

    cmd.env("NO_COLOR", "1");
    cmd.env_remove("PROJKIT_SEARCH_PATH");
    cmd.env_remove("PROJKIT_CONFIG_FILE");
    cmd.env_remove("PROJKIT_NO_CONFIG");
    cmd.env("HOME", &home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));

    cmd.args(args);
    cmd.current_dir(cwd);

    Ok(cmd)
}

/// Creates a temporary directory and returns the tuple of the temporary
/// directory handle and the canonicalised path to it. The CLI anchors
/// relative paths at its working directory as reported by the OS, which
/// is the canonical path, so tests compare against that.
pub fn new_temp_cwd() -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let temp_dir = TempDir::with_prefix("projkit_test_")?;
    let temp_dir_path = temp_dir.path().canonicalize()?;

    Ok((temp_dir, temp_dir_path))
}

pub fn projkit_cmd<'a, I: IntoIterator<Item = &'a str>>(
    args: I,
    cfg: Option<&str>,
) -> Result<(TempDir, PathBuf, Command), Box<dyn Error>> {
    let (temp_dir, cwd) = new_temp_cwd()?;
    let cmd = projkit_cmd_in(&cwd, args, cfg)?;

    Ok((temp_dir, cwd, cmd))
}

pub fn run_projkit_in<'a, I: IntoIterator<Item = &'a str>>(
    cwd: &Path,
    args: I,
    cfg: Option<&str>,
) -> Result<Output, Box<dyn Error>> {
    Ok(projkit_cmd_in(cwd, args, cfg)?.output()?)
}

pub fn run_projkit<'a, I: IntoIterator<Item = &'a str>>(
    args: I,
    cfg: Option<&str>,
) -> Result<(TempDir, PathBuf, Output), Box<dyn Error>> {
    let (temp_dir, cwd, mut cmd) = projkit_cmd(args, cfg)?;

    Ok((temp_dir, cwd, cmd.output()?))
}

/// Creates `cwd/<base>/<project>` for each pair, returning the base paths.
pub fn make_projects(cwd: &Path, projects: &[(&str, &str)]) -> Result<(), Box<dyn Error>> {
    for (base, project) in projects {
        std::fs::create_dir_all(cwd.join(base).join(project))?;
    }
    Ok(())
}

/// Expected stdout for the given paths, one per line.
pub fn lines<P: AsRef<Path>>(paths: &[P]) -> String {
    paths
        .iter()
        .map(|p| format!("{}\n", p.as_ref().display()))
        .collect()
}
