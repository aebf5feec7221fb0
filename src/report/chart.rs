use std::path::Path;

use plotters::prelude::*;

use crate::args::Axis;
use crate::error::ReportError;

use super::aggregate::AggregatedStat;
use super::format_ms;

/// Caller-supplied text for one axis chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// File stem shared by the CSV, PNG and JSON artifacts.
    pub file_name: String,
}

impl ChartLabels {
    #[must_use]
    pub fn for_axis(axis: Axis) -> Self {
        Self {
            title: axis.default_title().to_owned(),
            x_label: axis.default_x_label().to_owned(),
            y_label: "Mean latency (ms)".to_owned(),
            file_name: axis.as_str().to_owned(),
        }
    }
}

/// Draws one bar per value (height = mean of means) with a stddev error bar.
///
/// # Errors
///
/// Returns an error when the PNG cannot be drawn or written.
pub fn render_chart(
    stats: &[AggregatedStat],
    labels: &ChartLabels,
    path: &Path,
) -> Result<(), ReportError> {
    let bars = u32::try_from(stats.len()).unwrap_or(u32::MAX);
    let y_top = stats
        .iter()
        .map(|stat| stat.mean_us.saturating_add(stat.stddev_us))
        .max()
        .unwrap_or(0);
    let y_max = y_top.saturating_add(y_top / 10).max(1_000);

    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(|err| plot_error(path, &err))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&labels.title, ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..bars).into_segmented(), 0u64..y_max)
        .map_err(|err| plot_error(path, &err))?;

    let param_label = |segment: &SegmentValue<u32>| match segment {
        SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => usize::try_from(*index)
            .ok()
            .and_then(|index| stats.get(index))
            .map(|stat| stat.param.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    let ms_label = |micros: &u64| format_ms(*micros);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(labels.x_label.as_str())
        .y_desc(labels.y_label.as_str())
        .x_labels(stats.len())
        .y_labels(10)
        .x_label_formatter(&param_label)
        .y_label_formatter(&ms_label)
        .draw()
        .map_err(|err| plot_error(path, &err))?;

    chart
        .draw_series(stats.iter().zip(0u32..).map(|(stat, index)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0),
                    (SegmentValue::Exact(index.saturating_add(1)), stat.mean_us),
                ],
                BLUE.mix(0.6).filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|err| plot_error(path, &err))?;

    chart
        .draw_series(stats.iter().zip(0u32..).map(|(stat, index)| {
            ErrorBar::new_vertical(
                SegmentValue::CenterOf(index),
                stat.mean_us.saturating_sub(stat.stddev_us),
                stat.mean_us,
                stat.mean_us.saturating_add(stat.stddev_us),
                BLACK.filled(),
                12,
            )
        }))
        .map_err(|err| plot_error(path, &err))?;

    root.present().map_err(|err| plot_error(path, &err))?;
    Ok(())
}

fn plot_error<E>(path: &Path, err: &E) -> ReportError
where
    E: std::fmt::Display,
{
    ReportError::Plot {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
