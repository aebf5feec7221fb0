use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, CollaboratorError, CollaboratorRole};

use super::types::{ResetReport, ResetRequest, SeedRequest};
use super::{Resetter, Seeder};

/// Seeder backed by an external program. The program receives the configured
/// leading arguments followed by
/// `--users N --follows-min A --follows-max B --posts P`.
#[derive(Debug, Clone)]
pub struct ProcessSeeder {
    program: String,
    args: Vec<String>,
}

impl ProcessSeeder {
    #[must_use]
    pub const fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

#[async_trait]
impl Seeder for ProcessSeeder {
    async fn seed(&self, request: SeedRequest) -> AppResult<String> {
        let mut args = self.args.clone();
        args.extend([
            "--users".to_owned(),
            request.users.to_string(),
            "--follows-min".to_owned(),
            request.follows_min.to_string(),
            "--follows-max".to_owned(),
            request.follows_max.to_string(),
            "--posts".to_owned(),
            request.posts.to_string(),
        ]);
        run_program(CollaboratorRole::Seeder, &self.program, &args).await
    }
}

/// Reset backed by an external program, invoked with the configured leading
/// arguments plus optional `--kind K` and `--dry-run`. The entity count is the
/// last integer printed on stdout.
#[derive(Debug, Clone)]
pub struct ProcessResetter {
    program: String,
    args: Vec<String>,
}

impl ProcessResetter {
    #[must_use]
    pub const fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

#[async_trait]
impl Resetter for ProcessResetter {
    async fn reset(&self, request: ResetRequest) -> AppResult<ResetReport> {
        let mut args = self.args.clone();
        if let Some(kind) = request.kind {
            args.push("--kind".to_owned());
            args.push(kind);
        }
        if request.dry_run {
            args.push("--dry-run".to_owned());
        }
        let output = run_program(CollaboratorRole::Reset, &self.program, &args).await?;
        let count = last_integer(&output).ok_or_else(|| {
            AppError::collaborator(CollaboratorError::UnparseableCount {
                role: CollaboratorRole::Reset,
            })
        })?;
        Ok(ResetReport {
            count,
            dry_run: request.dry_run,
        })
    }
}

async fn run_program(role: CollaboratorRole, program: &str, args: &[String]) -> AppResult<String> {
    info!("Running {} program: {} {}", role, program, args.join(" "));
    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| {
            let program = program.to_owned();
            if source.kind() == ErrorKind::NotFound {
                AppError::collaborator(CollaboratorError::Unavailable {
                    role,
                    program,
                    source,
                })
            } else {
                AppError::collaborator(CollaboratorError::Launch {
                    role,
                    program,
                    source,
                })
            }
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    for line in stdout.lines() {
        debug!("[{}] {}", role, line);
    }
    if !output.status.success() {
        return Err(AppError::collaborator(CollaboratorError::Failed {
            role,
            program: program.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        }));
    }
    Ok(stdout)
}

pub(super) fn last_integer(output: &str) -> Option<u64> {
    output
        .split(|ch: char| !ch.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<u64>().ok())
        .next_back()
}
