use clap::ArgMatches;
use tracing::info;

use crate::app::{CollaboratorSettings, SweepSettings, run_reset, run_sweep};
use crate::args::{Command, ResetArgs, SweepArgs};
use crate::error::AppResult;

pub(super) enum RunPlan {
    Sweep(Box<SweepSettings>),
    Reset {
        args: ResetArgs,
        collaborators: CollaboratorSettings,
    },
}

pub(super) struct LoggingPlan {
    pub(super) verbose: bool,
    pub(super) no_color: bool,
}

pub(super) fn build_plan(
    mut args: SweepArgs,
    matches: &ArgMatches,
) -> AppResult<(RunPlan, LoggingPlan)> {
    let config = crate::config::load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        crate::config::apply_config(&mut args, matches, config)?;
    }
    let logging = LoggingPlan {
        verbose: args.verbose,
        no_color: args.no_color,
    };

    let plan = match args.command.take() {
        Some(Command::Reset(reset_args)) => RunPlan::Reset {
            args: reset_args,
            collaborators: CollaboratorSettings::from_args(&args),
        },
        None => RunPlan::Sweep(Box::new(SweepSettings::resolve(&args, config.as_ref())?)),
    };
    Ok((plan, logging))
}

pub(super) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Sweep(settings) => {
            let artifacts = run_sweep(&settings).await?;
            info!("Completed {} axes", artifacts.len());
            Ok(())
        }
        RunPlan::Reset {
            args,
            collaborators,
        } => {
            run_reset(args, &collaborators).await?;
            Ok(())
        }
    }
}
