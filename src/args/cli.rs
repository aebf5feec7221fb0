use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::defaults::{
    DEFAULT_CONCURRENCY_VALUES, DEFAULT_FOLLOWS_VALUES, DEFAULT_POSTS_VALUES, default_output_path,
};
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize,
};
use super::types::{Axis, CollaboratorBackend, PositiveU64, PositiveUsize};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Delete entities from the target store through the reset collaborator
    Reset(ResetArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ResetArgs {
    /// Only delete entities of this kind (all non-reserved kinds when omitted)
    #[arg(long = "kind")]
    pub kind: Option<String>,

    /// Count the entities that would be deleted without deleting anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Parameter-sweep HTTP load harness - concurrent trial bursts, seeded dataset axes, and per-axis CSV and chart reports.",
    next_help_heading = "Advanced Options"
)]
pub struct SweepArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Target endpoint URL (without the user/limit query parameters)
    #[arg(long, short, help_heading = "Common Options")]
    pub url: Option<String>,

    /// Axes to sweep (repeatable, defaults to every axis)
    #[arg(
        long = "axis",
        short = 'a',
        value_enum,
        help_heading = "Common Options"
    )]
    pub axes: Vec<Axis>,

    /// Trials run per parameter value
    #[arg(
        long = "repetitions",
        short = 'r',
        default_value = "3",
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub repetitions: PositiveUsize,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADSWEEP_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug", help_heading = "Common Options")]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./loadsweep.toml or ./loadsweep.json if present.
    #[arg(long, short = 'c', help_heading = "Common Options")]
    pub config: Option<String>,

    /// Directory receiving per-run CSV/chart folders
    #[arg(long = "output-path", short = 'o', default_value_t = default_output_path(), help_heading = "Common Options")]
    pub output_path: String,

    /// Query parameter carrying the user identifier
    #[arg(long = "user-param", default_value = "user")]
    pub user_param: String,

    /// Prefix prepended to the numeric user identifier
    #[arg(long = "user-prefix", default_value = "user")]
    pub user_prefix: String,

    /// Query parameter carrying the result limit
    #[arg(long = "limit-param", default_value = "limit")]
    pub limit_param: String,

    /// Result limit sent with every request
    #[arg(long = "limit", default_value = "20", value_parser = parse_positive_u64)]
    pub limit: PositiveU64,

    /// Per-request timeout; expiry counts as a failure (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "30s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Cap on requests in flight within a trial (defaults to the trial's concurrency)
    #[arg(long = "max-in-flight", value_parser = parse_positive_usize)]
    pub max_in_flight: Option<PositiveUsize>,

    /// Baseline user population (also the upper bound of requested user ids)
    #[arg(long = "users", default_value = "1000", value_parser = parse_positive_u64, help_heading = "Baseline")]
    pub users: PositiveU64,

    /// Baseline concurrent requests per trial
    #[arg(long = "concurrency", default_value = "50", value_parser = parse_positive_usize, help_heading = "Baseline")]
    pub concurrency: PositiveUsize,

    /// Baseline posts per user
    #[arg(long = "posts", default_value = "10", help_heading = "Baseline")]
    pub posts: u64,

    /// Baseline followees per user
    #[arg(long = "follows", default_value = "20", help_heading = "Baseline")]
    pub follows: u64,

    /// Values swept on the concurrency axis (comma separated)
    #[arg(
        long = "concurrency-values",
        value_delimiter = ',',
        default_value = DEFAULT_CONCURRENCY_VALUES,
        value_parser = parse_positive_u64,
        help_heading = "Axes"
    )]
    pub concurrency_values: Vec<PositiveU64>,

    /// Values swept on the posts axis (comma separated)
    #[arg(
        long = "posts-values",
        value_delimiter = ',',
        default_value = DEFAULT_POSTS_VALUES,
        value_parser = parse_positive_u64,
        help_heading = "Axes"
    )]
    pub posts_values: Vec<PositiveU64>,

    /// Values swept on the follows axis (comma separated)
    #[arg(
        long = "follows-values",
        value_delimiter = ',',
        default_value = DEFAULT_FOLLOWS_VALUES,
        value_parser = parse_positive_u64,
        help_heading = "Axes"
    )]
    pub follows_values: Vec<PositiveU64>,

    /// Seeder/reset backend
    #[arg(
        long = "backend",
        default_value = "process",
        value_enum,
        help_heading = "Collaborators"
    )]
    pub backend: CollaboratorBackend,

    /// Seeder program (process backend)
    #[arg(long = "seeder-program", help_heading = "Collaborators")]
    pub seeder_program: Option<String>,

    /// Extra leading arguments for the seeder program (repeatable)
    #[arg(long = "seeder-arg", allow_hyphen_values = true, help_heading = "Collaborators")]
    pub seeder_args: Vec<String>,

    /// Reset program (process backend)
    #[arg(long = "reset-program", help_heading = "Collaborators")]
    pub reset_program: Option<String>,

    /// Extra leading arguments for the reset program (repeatable)
    #[arg(long = "reset-arg", allow_hyphen_values = true, help_heading = "Collaborators")]
    pub reset_args: Vec<String>,

    /// Skip seeding and resets; measure the store as it is
    #[arg(long = "no-seed", help_heading = "Collaborators")]
    pub no_seed: bool,

    /// Disable chart generation
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Also write a JSON report per axis
    #[arg(long = "export-json")]
    pub export_json: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
