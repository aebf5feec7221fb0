use crate::sweep::ExperimentRecord;

use super::format_ms;

pub const CSV_HEADER: &str = "PARAM, AVG_TIME(ms), RUN, FAILED";

/// One row per trial, in the order the trials ran.
#[must_use]
pub fn render_csv(record: &ExperimentRecord) -> String {
    let mut lines = Vec::with_capacity(record.results().len().saturating_add(1));
    lines.push(CSV_HEADER.to_owned());
    lines.extend(record.results().iter().map(|result| {
        format!(
            "{}, {}, {}, {}",
            result.param,
            format_ms(result.mean_latency_us),
            result.run,
            result.failed
        )
    }));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
