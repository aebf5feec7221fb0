use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{Axis, PositiveU64, PositiveUsize, SweepArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{AxisConfig, ConfigFile, DurationValue, ProgramConfig};

/// Applies configuration values to CLI arguments. Values given on the command
/// line always win.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut SweepArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }
    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if let Some(target) = config.target.as_ref() {
        if !is_cli(matches, "url")
            && let Some(url) = target.url.clone()
        {
            args.url = Some(url);
        }
        if !is_cli(matches, "user_param")
            && let Some(param) = target.user_param.clone()
        {
            args.user_param = param;
        }
        if !is_cli(matches, "user_prefix")
            && let Some(prefix) = target.user_prefix.clone()
        {
            args.user_prefix = prefix;
        }
        if !is_cli(matches, "limit_param")
            && let Some(param) = target.limit_param.clone()
        {
            args.limit_param = param;
        }
        if !is_cli(matches, "limit")
            && let Some(limit) = target.limit
        {
            args.limit = ensure_positive_u64(limit, "target.limit")?;
        }
        if !is_cli(matches, "request_timeout")
            && let Some(timeout) = target.timeout.as_ref()
        {
            args.request_timeout = to_duration(timeout, "target.timeout")?;
        }
        if !is_cli(matches, "connect_timeout")
            && let Some(timeout) = target.connect_timeout.as_ref()
        {
            args.connect_timeout = to_duration(timeout, "target.connect_timeout")?;
        }
        if !is_cli(matches, "max_in_flight")
            && let Some(max_in_flight) = target.max_in_flight
        {
            args.max_in_flight = Some(ensure_positive_usize(
                max_in_flight,
                "target.max_in_flight",
            )?);
        }
    }

    if let Some(sweep) = config.sweep.as_ref() {
        if !is_cli(matches, "repetitions")
            && let Some(repetitions) = sweep.repetitions
        {
            args.repetitions = ensure_positive_usize(repetitions, "sweep.repetitions")?;
        }
        if !is_cli(matches, "axes")
            && let Some(axes) = sweep.axes.clone()
        {
            args.axes = axes;
        }
    }

    if let Some(baseline) = config.baseline.as_ref() {
        if !is_cli(matches, "users")
            && let Some(users) = baseline.users
        {
            args.users = ensure_positive_u64(users, "baseline.users")?;
        }
        if !is_cli(matches, "concurrency")
            && let Some(concurrency) = baseline.concurrency
        {
            args.concurrency = ensure_positive_usize(concurrency, "baseline.concurrency")?;
        }
        if !is_cli(matches, "posts")
            && let Some(posts) = baseline.posts
        {
            args.posts = posts;
        }
        if !is_cli(matches, "follows")
            && let Some(follows) = baseline.follows
        {
            args.follows = follows;
        }
    }

    if let Some(axes) = config.axes.as_ref() {
        for axis in Axis::ALL {
            let Some(values) = axes.get(axis).and_then(axis_values) else {
                continue;
            };
            let (field, slot) = match axis {
                Axis::Concurrency => ("concurrency_values", &mut args.concurrency_values),
                Axis::Posts => ("posts_values", &mut args.posts_values),
                Axis::Follows => ("follows_values", &mut args.follows_values),
            };
            if !is_cli(matches, field) {
                *slot = ensure_axis_values(values, axis)?;
            }
        }
    }

    if let Some(collaborators) = config.collaborators.as_ref() {
        if !is_cli(matches, "backend")
            && let Some(backend) = collaborators.backend
        {
            args.backend = backend;
        }
        if !is_cli(matches, "no_seed")
            && let Some(no_seed) = collaborators.no_seed
        {
            args.no_seed = no_seed;
        }
        apply_program(
            matches,
            collaborators.seeder.as_ref(),
            ("seeder_program", &mut args.seeder_program),
            ("seeder_args", &mut args.seeder_args),
        );
        apply_program(
            matches,
            collaborators.reset.as_ref(),
            ("reset_program", &mut args.reset_program),
            ("reset_args", &mut args.reset_args),
        );
    }

    if let Some(output) = config.output.as_ref() {
        if !is_cli(matches, "output_path")
            && let Some(path) = output.path.clone()
        {
            args.output_path = path;
        }
        if !is_cli(matches, "no_charts")
            && let Some(no_charts) = output.no_charts
        {
            args.no_charts = no_charts;
        }
        if !is_cli(matches, "export_json")
            && let Some(export_json) = output.export_json
        {
            args.export_json = export_json;
        }
    }

    Ok(())
}

fn apply_program(
    matches: &ArgMatches,
    config: Option<&ProgramConfig>,
    program: (&str, &mut Option<String>),
    program_args: (&str, &mut Vec<String>),
) {
    let Some(config) = config else {
        return;
    };
    let (program_field, program_slot) = program;
    if !is_cli(matches, program_field)
        && let Some(value) = config.program.clone()
    {
        *program_slot = Some(value);
    }
    let (args_field, args_slot) = program_args;
    if !is_cli(matches, args_field)
        && let Some(values) = config.args.clone()
    {
        *args_slot = values;
    }
}

const fn axis_values(config: &AxisConfig) -> Option<&Vec<u64>> {
    config.values.as_ref()
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn to_duration(value: &DurationValue, field: &str) -> AppResult<std::time::Duration> {
    value.to_duration().map_err(|err| {
        AppError::config(ConfigError::InvalidDuration {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_axis_values(values: &[u64], axis: Axis) -> AppResult<Vec<PositiveU64>> {
    if values.is_empty() {
        return Err(AppError::config(ConfigError::EmptyAxisValues {
            axis: axis.as_str(),
        }));
    }
    values
        .iter()
        .map(|value| {
            PositiveU64::try_from(*value).map_err(|_err| {
                AppError::config(ConfigError::ZeroAxisValue {
                    axis: axis.as_str(),
                })
            })
        })
        .collect()
}
