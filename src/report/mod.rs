//! Reduction of experiment records into statistics and on-disk artifacts.
mod aggregate;
mod chart;
mod csv;
mod json;
mod naming;
mod summary;
mod writer;


pub use aggregate::{AggregatedStat, aggregate};
pub use chart::{ChartLabels, render_chart};
pub use csv::{CSV_HEADER, render_csv};
pub use json::render_json;
pub use naming::{resolve_run_dir, run_dir_name};
pub use summary::summary_lines;
pub use writer::{AxisArtifacts, ReportWriter};

/// Formats whole microseconds as milliseconds with three decimals.
#[must_use]
pub fn format_ms(micros: u64) -> String {
    format!("{}.{:03}", micros / 1_000, micros % 1_000)
}
