use tracing::info;

use crate::args::ResetArgs;
use crate::collaborators::{ResetReport, ResetRequest};
use crate::error::AppResult;

use super::settings::CollaboratorSettings;

/// Runs the `reset` command against the configured reset collaborator.
///
/// # Errors
///
/// Returns an error on the memory backend, or when the reset collaborator
/// is missing or fails.
pub async fn run_reset(
    args: ResetArgs,
    collaborators: &CollaboratorSettings,
) -> AppResult<ResetReport> {
    let resetter = collaborators.build_resetter()?;

    info!("[reset] Starting entity deletion");
    if args.dry_run {
        info!("[reset] Dry run: nothing will be deleted");
    }
    match args.kind.as_deref() {
        Some(kind) => info!("[reset] Target: kind '{}'", kind),
        None => info!("[reset] Target: every non-reserved kind"),
    }

    let report = resetter
        .reset(ResetRequest {
            kind: args.kind,
            dry_run: args.dry_run,
        })
        .await?;

    if report.dry_run {
        println!("Entities that would be removed: {}", report.count);
    } else {
        println!("Entities removed: {}", report.count);
    }
    info!("[reset] Done");
    Ok(report)
}
