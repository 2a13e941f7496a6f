// SPDX-FileCopyrightText: © 2025 Projkit contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use assert_cmd::prelude::*;
use predicates::prelude::*;

// pub due to https://github.com/rust-lang/rust/issues/46379
mod common;
pub use common::*;

fn project() -> Result<(tempfile::TempDir, PathBuf, PathBuf), Box<dyn std::error::Error>> {
    let (temp_dir, cwd) = new_temp_cwd()?;
    make_projects(&cwd, &[("base", "MyProj")])?;
    let root = cwd.join("base").join("MyProj");
    Ok((temp_dir, cwd, root))
}

#[test]
fn datasets_raw_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd, root) = project()?;

    let out = run_projkit_in(&cwd, ["datasets", "MyProj", "2024", "jan", "-s", "base"], None)?;

    let expected = root.join("01_Datasets/raw/2024/jan");
    out.assert().success().stdout(lines(&[&expected]));
    assert!(expected.is_dir());
    assert!(!root.join("01_Datasets/processed").exists());

    Ok(())
}

#[test]
fn datasets_both() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd, root) = project()?;

    let out = run_projkit_in(
        &cwd,
        ["datasets", "MyProj", "jan", "--mode", "both", "-s", "base"],
        None,
    )?;

    let raw = root.join("01_Datasets/raw/jan");
    let processed = root.join("01_Datasets/processed/jan");
    out.assert().success().stdout(lines(&[&raw, &processed]));
    assert!(raw.is_dir());
    assert!(processed.is_dir());

    Ok(())
}

#[test]
fn datasets_rejects_unknown_mode() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd, root) = project()?;

    let out = run_projkit_in(
        &cwd,
        ["datasets", "MyProj", "jan", "-m", "cooked", "-s", "base"],
        None,
    )?;

    out.assert().failure();
    assert!(!root.join("01_Datasets").exists());

    Ok(())
}

#[test]
fn results_with_plots() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd, root) = project()?;

    let out = run_projkit_in(
        &cwd,
        ["results", "MyProj", "exp1", "--plots", "-s", "base"],
        None,
    )?;

    let results = root.join("02_Results/exp1");
    let plots = results.join("plots");
    out.assert().success().stdout(lines(&[&results, &plots]));
    assert!(plots.is_dir());

    Ok(())
}

#[test]
fn results_without_plots() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd, root) = project()?;

    let out = run_projkit_in(&cwd, ["results", "MyProj", "exp1", "-s", "base"], None)?;

    let results = root.join("02_Results/exp1");
    out.assert().success().stdout(lines(&[&results]));
    assert!(!results.join("plots").exists());

    Ok(())
}

#[test]
fn figures_path() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd, root) = project()?;

    let out = run_projkit_in(&cwd, ["figures", "MyProj", "paper", "-s", "base"], None)?;

    let figures = root.join("03_Figures/paper");
    out.assert().success().stdout(lines(&[&figures]));
    assert!(figures.is_dir());

    let again = run_projkit_in(&cwd, ["figures", "MyProj", "paper", "-s", "base"], None)?;
    again.assert().success().stdout(lines(&[&figures]));

    Ok(())
}

#[test]
fn figures_rejects_escaping_subpath() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd, root) = project()?;

    let out = run_projkit_in(&cwd, ["figures", "MyProj", "../../x", "-s", "base"], None)?;

    out.assert()
        .failure()
        .stderr(predicate::str::contains("error"));
    assert!(!root.join("03_Figures").exists());

    Ok(())
}

#[test]
fn missing_project_creates_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, cwd) = new_temp_cwd()?;
    std::fs::create_dir(cwd.join("base"))?;

    let out = run_projkit_in(&cwd, ["figures", "MyProj", "paper", "-s", "base"], None)?;

    out.assert().failure();
    assert_eq!(std::fs::read_dir(cwd.join("base"))?.count(), 0);

    Ok(())
}
