use crate::args::Axis;

use super::aggregate::AggregatedStat;
use super::format_ms;

/// Console table for one axis.
#[must_use]
pub fn summary_lines(axis: Axis, stats: &[AggregatedStat]) -> Vec<String> {
    let mut lines = Vec::with_capacity(stats.len().saturating_add(2));
    lines.push(format!("Axis: {}", axis));
    lines.push(format!(
        "{:>12} {:>14} {:>14} {:>6} {:>8}",
        "PARAM", "MEAN(ms)", "STDDEV(ms)", "RUNS", "FAILED"
    ));
    lines.extend(stats.iter().map(|stat| {
        format!(
            "{:>12} {:>14} {:>14} {:>6} {:>8}",
            stat.param,
            format_ms(stat.mean_us),
            format_ms(stat.stddev_us),
            stat.runs,
            stat.failed
        )
    }));
    lines
}
