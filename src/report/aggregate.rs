use serde::Serialize;

use crate::error::ReportError;
use crate::sweep::ExperimentRecord;

/// Per-value reduction of the trial means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregatedStat {
    pub param: u64,
    pub mean_us: u64,
    /// Population standard deviation of the per-trial means.
    pub stddev_us: u64,
    pub runs: usize,
    pub failed: usize,
}

/// Groups the record by parameter value, ascending.
///
/// # Errors
///
/// Returns [`ReportError::EmptyRecord`] when the record holds no trials.
pub fn aggregate(record: &ExperimentRecord) -> Result<Vec<AggregatedStat>, ReportError> {
    if record.is_empty() {
        return Err(ReportError::EmptyRecord {
            axis: record.axis().to_string(),
        });
    }
    let stats = record
        .by_param()
        .into_iter()
        .map(|(param, group)| {
            let means: Vec<u64> = group.iter().map(|result| result.mean_latency_us).collect();
            let failed = group
                .iter()
                .fold(0usize, |acc, result| acc.saturating_add(result.failed));
            let (mean_us, stddev_us) = mean_and_stddev(&means);
            AggregatedStat {
                param,
                mean_us,
                stddev_us,
                runs: group.len(),
                failed,
            }
        })
        .collect();
    Ok(stats)
}

fn mean_and_stddev(values: &[u64]) -> (u64, u64) {
    let count = u128::try_from(values.len()).unwrap_or(u128::MAX);
    let sum = values
        .iter()
        .fold(0u128, |acc, value| acc.saturating_add(u128::from(*value)));
    let Some(mean) = sum.checked_div(count) else {
        return (0, 0);
    };
    let squares = values.iter().fold(0u128, |acc, value| {
        let diff = u128::from(*value).abs_diff(mean);
        acc.saturating_add(diff.saturating_mul(diff))
    });
    let variance = squares.checked_div(count).unwrap_or(0);
    (
        u64::try_from(mean).unwrap_or(u64::MAX),
        u64::try_from(variance.isqrt()).unwrap_or(u64::MAX),
    )
}

