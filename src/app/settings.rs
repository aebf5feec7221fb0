use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::args::{Axis, CollaboratorBackend, PositiveU64, PositiveUsize, SweepArgs};
use crate::collaborators::{
    Collaborators, MemoryStore, ProcessResetter, ProcessSeeder, Resetter, Seeder,
};
use crate::config::types::ConfigFile;
use crate::error::{AppError, AppResult, CollaboratorRole, ValidationError};
use crate::http::{QueryShape, TargetEndpoint};
use crate::report::ChartLabels;
use crate::sweep::Baseline;

/// One axis to sweep, with the labels its artifacts carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisPlan {
    pub axis: Axis,
    pub values: Vec<PositiveU64>,
    pub labels: ChartLabels,
}

/// An external program plus its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSpec {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorSettings {
    pub backend: CollaboratorBackend,
    pub seeder: Option<ProgramSpec>,
    pub reset: Option<ProgramSpec>,
}

impl CollaboratorSettings {
    #[must_use]
    pub fn from_args(args: &SweepArgs) -> Self {
        let program = |program: Option<&String>, extra: &[String]| {
            program.map(|program| ProgramSpec {
                program: program.clone(),
                args: extra.to_vec(),
            })
        };
        Self {
            backend: args.backend,
            seeder: program(args.seeder_program.as_ref(), &args.seeder_args),
            reset: program(args.reset_program.as_ref(), &args.reset_args),
        }
    }

    /// Builds the seeder/reset pair for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the process backend is missing a program.
    pub fn build(&self) -> AppResult<Collaborators> {
        match self.backend {
            CollaboratorBackend::Memory => {
                Ok(Collaborators::in_memory(&Arc::new(MemoryStore::new())))
            }
            CollaboratorBackend::Process => {
                let seeder = required(self.seeder.as_ref(), CollaboratorRole::Seeder)?;
                Ok(Collaborators {
                    seeder: Arc::new(ProcessSeeder::new(
                        seeder.program.clone(),
                        seeder.args.clone(),
                    )) as Arc<dyn Seeder>,
                    resetter: self.build_resetter()?,
                })
            }
        }
    }

    /// Builds only the reset collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error for the memory backend, whose store is created per
    /// run and is always empty here, or when the process backend has no
    /// reset program.
    pub fn build_resetter(&self) -> AppResult<Arc<dyn Resetter>> {
        match self.backend {
            CollaboratorBackend::Memory => Err(AppError::validation(
                ValidationError::ResetNeedsProcessBackend,
            )),
            CollaboratorBackend::Process => {
                let reset = required(self.reset.as_ref(), CollaboratorRole::Reset)?;
                Ok(Arc::new(ProcessResetter::new(
                    reset.program.clone(),
                    reset.args.clone(),
                )) as Arc<dyn Resetter>)
            }
        }
    }
}

fn required(spec: Option<&ProgramSpec>, role: CollaboratorRole) -> AppResult<&ProgramSpec> {
    spec.ok_or_else(|| AppError::validation(ValidationError::MissingCollaboratorProgram { role }))
}

/// Everything a sweep run needs, validated.
#[derive(Debug, Clone)]
pub struct SweepSettings {
    pub target: TargetEndpoint,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_in_flight: Option<PositiveUsize>,
    pub baseline: Baseline,
    pub repetitions: PositiveUsize,
    pub axes: Vec<AxisPlan>,
    /// `None` when seeding and resets are disabled.
    pub collaborators: Option<CollaboratorSettings>,
    pub output_path: PathBuf,
    pub charts: bool,
    pub export_json: bool,
}

impl SweepSettings {
    /// Resolves CLI arguments (already merged with the config file) into a
    /// run description. Chart labels come from the config file only.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is missing or invalid, or when a sweep
    /// axis has no values.
    pub fn resolve(args: &SweepArgs, config: Option<&ConfigFile>) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        let target = TargetEndpoint::new(
            url,
            QueryShape {
                user_param: args.user_param.clone(),
                user_prefix: args.user_prefix.clone(),
                limit_param: args.limit_param.clone(),
                limit: args.limit.get(),
            },
        )?;

        let selected = if args.axes.is_empty() {
            Axis::ALL.to_vec()
        } else {
            let mut unique = Vec::with_capacity(args.axes.len());
            for axis in &args.axes {
                if !unique.contains(axis) {
                    unique.push(*axis);
                }
            }
            unique
        };
        let axes = selected
            .into_iter()
            .map(|axis| axis_plan(args, config, axis))
            .collect::<AppResult<Vec<_>>>()?;
        if axes.is_empty() {
            return Err(AppError::validation(ValidationError::NoAxesSelected));
        }

        let collaborators = if args.no_seed {
            None
        } else {
            let settings = CollaboratorSettings::from_args(args);
            // Fail on a missing program before the first axis starts.
            settings.build()?;
            Some(settings)
        };

        Ok(Self {
            target,
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            max_in_flight: args.max_in_flight,
            baseline: Baseline {
                users: args.users,
                concurrency: args.concurrency,
                posts: args.posts,
                follows: args.follows,
            },
            repetitions: args.repetitions,
            axes,
            collaborators,
            output_path: PathBuf::from(&args.output_path),
            charts: !args.no_charts,
            export_json: args.export_json,
        })
    }
}

fn axis_plan(args: &SweepArgs, config: Option<&ConfigFile>, axis: Axis) -> AppResult<AxisPlan> {
    let values = match axis {
        Axis::Concurrency => args.concurrency_values.clone(),
        Axis::Posts => args.posts_values.clone(),
        Axis::Follows => args.follows_values.clone(),
    };
    if values.is_empty() {
        return Err(AppError::validation(ValidationError::ValueListEmpty));
    }

    let mut labels = ChartLabels::for_axis(axis);
    if let Some(axis_config) = config
        .and_then(|config| config.axes.as_ref())
        .and_then(|axes| axes.get(axis))
    {
        if let Some(title) = axis_config.title.clone() {
            labels.title = title;
        }
        if let Some(x_label) = axis_config.x_label.clone() {
            labels.x_label = x_label;
        }
        if let Some(y_label) = axis_config.y_label.clone() {
            labels.y_label = y_label;
        }
        if let Some(file_name) = axis_config.file_name.clone() {
            labels.file_name = file_name;
        }
    }
    Ok(AxisPlan {
        axis,
        values,
        labels,
    })
}
