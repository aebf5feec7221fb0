mod support;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use support::{run_loadsweep, spawn_timeline_server_or_skip};

fn failure_details(output: &std::process::Output) -> String {
    format!(
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn single_run_dir(output_path: &Path) -> Result<PathBuf, String> {
    let mut run_dirs = Vec::new();
    for entry in fs::read_dir(output_path).map_err(|err| format!("read_dir failed: {}", err))? {
        let entry = entry.map_err(|err| format!("dir entry failed: {}", err))?;
        if entry.file_name().to_string_lossy().starts_with("run-") {
            run_dirs.push(entry.path());
        }
    }
    match run_dirs.as_slice() {
        [only] => Ok(only.clone()),
        _ => Err(format!("Expected one run dir, found {:?}", run_dirs)),
    }
}

#[test]
fn e2e_sweep_with_memory_backend() -> Result<(), String> {
    let Some((url, server)) = spawn_timeline_server_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output_path = dir.path().join("results");

    let output = run_loadsweep([
        "-u",
        url.as_str(),
        "--backend",
        "memory",
        "--users",
        "20",
        "--concurrency",
        "3",
        "-r",
        "2",
        "--concurrency-values",
        "1,4",
        "--posts-values",
        "2,5",
        "--follows-values",
        "1,3",
        "--no-charts",
        "--export-json",
        "--no-color",
        "-o",
        output_path.to_string_lossy().as_ref(),
    ])?;
    if !output.status.success() {
        return Err(failure_details(&output));
    }

    let run_dir = single_run_dir(&output_path)?;
    for axis in ["concurrency", "posts", "follows"] {
        let csv = fs::read_to_string(run_dir.join(format!("{}.csv", axis)))
            .map_err(|err| format!("read {} csv failed: {}", axis, err))?;
        if !csv.starts_with("PARAM, AVG_TIME(ms), RUN, FAILED\n") {
            return Err(format!("Unexpected {} CSV header", axis));
        }
        if csv.lines().count() != 5 {
            return Err(format!("Expected 4 {} trial rows, got:\n{}", axis, csv));
        }
        if !run_dir.join(format!("{}.json", axis)).exists() {
            return Err(format!("Missing {} JSON export", axis));
        }
    }

    // Each trial sends one warm-up plus its concurrency: 14 on the
    // concurrency axis, 16 on each of the other two.
    let expected_hits = 46;
    if server.hits() != expected_hits {
        return Err(format!(
            "Expected {} requests, got {}",
            expected_hits,
            server.hits()
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Axis: follows") {
        return Err(format!("Missing summary table:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_missing_url_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_loadsweep([
        "--backend",
        "memory",
        "-o",
        dir.path().to_string_lossy().as_ref(),
    ])?;
    if output.status.success() {
        return Err("Expected missing URL to fail".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_unavailable_collaborator_fails_run() -> Result<(), String> {
    let Some((url, server)) = spawn_timeline_server_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_loadsweep([
        "-u",
        url.as_str(),
        "--seeder-program",
        "loadsweep-missing-seeder",
        "--reset-program",
        "loadsweep-missing-reset",
        "-a",
        "posts",
        "--no-charts",
        "-o",
        dir.path().to_string_lossy().as_ref(),
    ])?;
    if output.status.success() {
        return Err("Expected unavailable collaborators to fail the run".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Runtime errors") {
        return Err(failure_details(&output));
    }
    if server.hits() != 0 {
        return Err("No request should be sent after the axis aborts".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_reset_rejects_memory_backend() -> Result<(), String> {
    let output = run_loadsweep(["--backend", "memory", "reset", "--dry-run"])?;
    if output.status.success() {
        return Err(format!(
            "Memory backend reset should fail\n{}",
            failure_details(&output)
        ));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.contains("Entities") {
        return Err(format!("No count should be printed:\n{}", stdout));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("ResetNeedsProcessBackend") {
        return Err(format!("Unexpected reset error:\n{}", stderr));
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn e2e_reset_dry_run_with_process_backend() -> Result<(), String> {
    let output = run_loadsweep([
        "--backend",
        "process",
        "--reset-program",
        "sh",
        "--reset-arg=-c",
        "--reset-arg=echo \"would be removed: 10\"",
        "--reset-arg=reset",
        "reset",
        "--dry-run",
    ])?;
    if !output.status.success() {
        return Err(failure_details(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Entities that would be removed: 10") {
        return Err(format!("Unexpected reset output:\n{}", stdout));
    }
    Ok(())
}
