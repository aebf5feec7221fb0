use super::{apply_config, load_config_file, types::ConfigFile};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{Axis, CollaboratorBackend, SweepArgs};
use crate::error::{AppError, AppResult};

fn args_from(argv: &[&str]) -> AppResult<(SweepArgs, clap::ArgMatches)> {
    let matches = SweepArgs::command().try_get_matches_from(argv)?;
    let args = SweepArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

const SAMPLE_TOML: &str = r#"
verbose = true

[target]
url = "http://localhost:8080/api/timeline"
user_param = "uid"
limit = 50
timeout = "5s"
max_in_flight = 64

[sweep]
repetitions = 4
axes = ["posts", "follows"]

[baseline]
users = 200
concurrency = 25
posts = 0

[axes.posts]
values = [1, 5, 25]
title = "Posts sweep"

[collaborators]
backend = "memory"

[collaborators.seeder]
program = "python3"
args = ["seed.py"]

[output]
path = "./results"
export_json = true
"#;

#[test]
fn parse_toml_config_sections() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("loadsweep.toml");
    std::fs::write(&path, SAMPLE_TOML)?;

    let config = load_config_file(&path)?;
    let target = config
        .target
        .as_ref()
        .ok_or_else(|| AppError::config("Expected target section"))?;
    if target.url.as_deref() != Some("http://localhost:8080/api/timeline") {
        return Err(AppError::config("Unexpected target url"));
    }
    let posts = config
        .axes
        .as_ref()
        .and_then(|axes| axes.get(Axis::Posts))
        .ok_or_else(|| AppError::config("Expected axes.posts"))?;
    if posts.values.as_deref() != Some(&[1, 5, 25][..]) {
        return Err(AppError::config("Unexpected posts values"));
    }
    if posts.title.as_deref() != Some("Posts sweep") {
        return Err(AppError::config("Unexpected posts title"));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("loadsweep.json");
    std::fs::write(
        &path,
        r#"{"target": {"url": "http://localhost:9000/feed", "timeout": 3}, "sweep": {"repetitions": 2}}"#,
    )?;

    let config = load_config_file(&path)?;
    let repetitions = config.sweep.as_ref().and_then(|sweep| sweep.repetitions);
    if repetitions != Some(2) {
        return Err(AppError::config("Unexpected repetitions"));
    }
    Ok(())
}

#[test]
fn load_config_rejects_unknown_extension() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("loadsweep.yaml");
    std::fs::write(&path, "target: {}")?;
    if load_config_file(&path).is_ok() {
        return Err(AppError::config("Expected unsupported extension error"));
    }
    Ok(())
}

#[test]
fn apply_config_fills_unset_args() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("loadsweep.toml");
    std::fs::write(&path, SAMPLE_TOML)?;
    let config = load_config_file(&path)?;

    let (mut args, matches) = args_from(&["loadsweep"])?;
    apply_config(&mut args, &matches, &config)?;

    let checks = [
        (args.verbose, "Expected verbose from config"),
        (
            args.url.as_deref() == Some("http://localhost:8080/api/timeline"),
            "Unexpected url",
        ),
        (args.user_param == "uid", "Unexpected user param"),
        (args.limit.get() == 50, "Unexpected limit"),
        (
            args.request_timeout == Duration::from_secs(5),
            "Unexpected timeout",
        ),
        (
            args.max_in_flight.map(|value| value.get()) == Some(64),
            "Unexpected max in flight",
        ),
        (args.repetitions.get() == 4, "Unexpected repetitions"),
        (
            args.axes == vec![Axis::Posts, Axis::Follows],
            "Unexpected axes",
        ),
        (args.users.get() == 200, "Unexpected users"),
        (args.concurrency.get() == 25, "Unexpected concurrency"),
        (args.posts == 0, "Unexpected posts baseline"),
        (args.follows == 20, "Expected follows default to remain"),
        (
            args.posts_values.iter().map(|v| v.get()).collect::<Vec<_>>() == vec![1, 5, 25],
            "Unexpected posts values",
        ),
        (
            matches!(args.backend, CollaboratorBackend::Memory),
            "Expected memory backend",
        ),
        (
            args.seeder_program.as_deref() == Some("python3"),
            "Unexpected seeder program",
        ),
        (
            args.seeder_args == vec!["seed.py".to_owned()],
            "Unexpected seeder args",
        ),
        (args.output_path == "./results", "Unexpected output path"),
        (args.export_json, "Expected export_json"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::config(message));
        }
    }
    Ok(())
}

#[test]
fn apply_config_keeps_cli_values() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("loadsweep.toml");
    std::fs::write(&path, SAMPLE_TOML)?;
    let config = load_config_file(&path)?;

    let (mut args, matches) = args_from(&[
        "loadsweep",
        "--url",
        "http://cli-host/api",
        "-r",
        "7",
        "--posts-values",
        "2,4",
    ])?;
    apply_config(&mut args, &matches, &config)?;

    if args.url.as_deref() != Some("http://cli-host/api") {
        return Err(AppError::config("CLI url should win"));
    }
    if args.repetitions.get() != 7 {
        return Err(AppError::config("CLI repetitions should win"));
    }
    if args.posts_values.iter().map(|v| v.get()).collect::<Vec<_>>() != vec![2, 4] {
        return Err(AppError::config("CLI posts values should win"));
    }
    Ok(())
}

#[test]
fn apply_config_rejects_zero_axis_values() -> AppResult<()> {
    let config: ConfigFile = toml::from_str(
        r#"
[axes.concurrency]
values = [1, 0]
"#,
    )
    .map_err(|err| AppError::config(format!("parse failed: {}", err)))?;
    let (mut args, matches) = args_from(&["loadsweep"])?;
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err(AppError::config("Expected zero axis value error"));
    }

    let empty: ConfigFile = toml::from_str(
        r#"
[axes.follows]
values = []
"#,
    )
    .map_err(|err| AppError::config(format!("parse failed: {}", err)))?;
    if apply_config(&mut args, &matches, &empty).is_ok() {
        return Err(AppError::config("Expected empty axis values error"));
    }
    Ok(())
}

#[test]
fn apply_config_rejects_zero_repetitions() -> AppResult<()> {
    let config: ConfigFile = toml::from_str(
        r#"
[sweep]
repetitions = 0
"#,
    )
    .map_err(|err| AppError::config(format!("parse failed: {}", err)))?;
    let (mut args, matches) = args_from(&["loadsweep"])?;
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err(AppError::config("Expected repetitions error"));
    }
    Ok(())
}
