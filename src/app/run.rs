use std::io::Write;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::collaborators::Collaborators;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{RequestExecutor, build_client};
use crate::report::{AxisArtifacts, ReportWriter, resolve_run_dir, summary_lines};
use crate::sweep::ExperimentSweeper;
use crate::trial::{HttpTrialRunner, TrialPort};

use super::runtime_errors::write_runtime_errors;
use super::settings::{CollaboratorSettings, SweepSettings};

/// Runs every configured axis against the HTTP target and writes the
/// artifacts.
///
/// # Errors
///
/// Returns an error when the client cannot be built, a trial loses a request
/// task, or any axis failed.
pub async fn run_sweep(settings: &SweepSettings) -> AppResult<Vec<AxisArtifacts>> {
    let client = build_client(settings.request_timeout, settings.connect_timeout)?;
    let trials = HttpTrialRunner::new(
        RequestExecutor::new(client),
        Arc::new(settings.target.clone()),
        settings.max_in_flight,
    );
    let collaborators = settings
        .collaborators
        .as_ref()
        .map(CollaboratorSettings::build)
        .transpose()?;
    let writer = ReportWriter::new(
        resolve_run_dir(
            &settings.output_path,
            settings.target.host(),
            settings.target.port(),
        ),
        settings.charts,
        settings.export_json,
    );
    run_axes(settings, &trials, collaborators.as_ref(), &writer).await
}

/// Sweeps each axis in turn. Collaborator and report failures end only the
/// axis they happen in; the run still fails at the end.
///
/// # Errors
///
/// Returns an error on a non-collaborator sweep failure or when any axis
/// failed.
pub async fn run_axes<T>(
    settings: &SweepSettings,
    trials: &T,
    collaborators: Option<&Collaborators>,
    writer: &ReportWriter,
) -> AppResult<Vec<AxisArtifacts>>
where
    T: TrialPort,
{
    sweep_axes(
        settings,
        trials,
        collaborators,
        writer,
        &mut std::io::stderr(),
    )
    .await
}

/// Body of [`run_axes`], writing the runtime error block to `errors_out`.
pub(crate) async fn sweep_axes<T, W>(
    settings: &SweepSettings,
    trials: &T,
    collaborators: Option<&Collaborators>,
    writer: &ReportWriter,
    errors_out: &mut W,
) -> AppResult<Vec<AxisArtifacts>>
where
    T: TrialPort,
    W: Write,
{
    info!(
        "Sweeping {} against {} ({} repetitions per value)",
        settings
            .axes
            .iter()
            .map(|plan| plan.axis.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        settings.target.base(),
        settings.repetitions
    );
    if collaborators.is_none() {
        warn!("Seeding disabled; measuring the store as it is");
    }

    let sweeper = ExperimentSweeper::new(
        trials,
        collaborators,
        settings.baseline,
        settings.repetitions,
    );
    let mut artifacts = Vec::with_capacity(settings.axes.len());
    let mut runtime_errors = Vec::new();

    for plan in &settings.axes {
        info!("Starting {} axis", plan.axis);
        let record = match sweeper.run_axis(plan.axis, &plan.values).await {
            Ok(record) => record,
            Err(err) if err.is_collaborator() => {
                error!("Aborting {} axis: {}", plan.axis, err);
                runtime_errors.push(format!("{} axis: {}", plan.axis, err));
                continue;
            }
            Err(err) => {
                if !runtime_errors.is_empty()
                    && let Err(write_err) = write_runtime_errors(errors_out, &runtime_errors)
                {
                    warn!("Could not write runtime errors: {}", write_err);
                }
                return Err(err);
            }
        };

        match writer.write_axis(&record, &plan.labels).await {
            Ok(axis_artifacts) => {
                for line in summary_lines(plan.axis, &axis_artifacts.stats) {
                    println!("{}", line);
                }
                artifacts.push(axis_artifacts);
            }
            Err(err) => {
                warn!("Skipping {} artifacts: {}", plan.axis, err);
                runtime_errors.push(format!("{} report: {}", plan.axis, err));
            }
        }
    }

    if !runtime_errors.is_empty() {
        write_runtime_errors(errors_out, &runtime_errors)?;
        return Err(AppError::validation(ValidationError::RuntimeErrors));
    }
    info!("Artifacts written to {}", writer.dir().display());
    Ok(artifacts)
}
