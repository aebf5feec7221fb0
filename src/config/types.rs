use std::time::Duration;

use serde::Deserialize;

use crate::args::{Axis, CollaboratorBackend};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
    pub target: Option<TargetConfig>,
    pub sweep: Option<SweepConfig>,
    pub baseline: Option<BaselineConfig>,
    pub axes: Option<AxesConfig>,
    pub collaborators: Option<CollaboratorsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TargetConfig {
    pub url: Option<String>,
    pub user_param: Option<String>,
    pub user_prefix: Option<String>,
    pub limit_param: Option<String>,
    pub limit: Option<u64>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub max_in_flight: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SweepConfig {
    pub repetitions: Option<usize>,
    pub axes: Option<Vec<Axis>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BaselineConfig {
    pub users: Option<u64>,
    pub concurrency: Option<usize>,
    pub posts: Option<u64>,
    pub follows: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AxesConfig {
    pub concurrency: Option<AxisConfig>,
    pub posts: Option<AxisConfig>,
    pub follows: Option<AxisConfig>,
}

impl AxesConfig {
    #[must_use]
    pub const fn get(&self, axis: Axis) -> Option<&AxisConfig> {
        match axis {
            Axis::Concurrency => self.concurrency.as_ref(),
            Axis::Posts => self.posts.as_ref(),
            Axis::Follows => self.follows.as_ref(),
        }
    }
}

/// Per-axis overrides: the swept values and the chart labels.
#[derive(Debug, Default, Deserialize)]
pub struct AxisConfig {
    pub values: Option<Vec<u64>>,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollaboratorsConfig {
    pub backend: Option<CollaboratorBackend>,
    pub no_seed: Option<bool>,
    pub seeder: Option<ProgramConfig>,
    pub reset: Option<ProgramConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProgramConfig {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub no_charts: Option<bool>,
    pub export_json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => crate::args::parsers::parse_duration_value(text),
        }
    }
}
