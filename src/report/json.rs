use serde::Serialize;

use crate::args::Axis;
use crate::error::ReportError;
use crate::sweep::{ExperimentRecord, TrialResult};

use super::aggregate::AggregatedStat;

#[derive(Serialize)]
struct AxisReport<'report> {
    axis: Axis,
    trials: &'report [TrialResult],
    stats: &'report [AggregatedStat],
}

/// Pretty-printed JSON holding every trial and the per-value statistics.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_json(
    record: &ExperimentRecord,
    stats: &[AggregatedStat],
) -> Result<Vec<u8>, ReportError> {
    let report = AxisReport {
        axis: record.axis(),
        trials: record.results(),
        stats,
    };
    serde_json::to_vec_pretty(&report).map_err(|err| ReportError::Serialize { source: err })
}
