use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::error::ReportError;
use crate::sweep::ExperimentRecord;

use super::aggregate::{AggregatedStat, aggregate};
use super::chart::{ChartLabels, render_chart};
use super::csv::render_csv;
use super::json::render_json;

/// Paths written for one axis, plus the statistics they were built from.
#[derive(Debug, Clone)]
pub struct AxisArtifacts {
    pub stats: Vec<AggregatedStat>,
    pub csv: PathBuf,
    pub chart: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

/// Writes per-axis artifacts into one run directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
    charts: bool,
    json: bool,
}

impl ReportWriter {
    #[must_use]
    pub const fn new(dir: PathBuf, charts: bool, json: bool) -> Self {
        Self { dir, charts, json }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Aggregates the record and writes its CSV, chart and optional JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the record is empty or an artifact cannot be
    /// written.
    pub async fn write_axis(
        &self,
        record: &ExperimentRecord,
        labels: &ChartLabels,
    ) -> Result<AxisArtifacts, ReportError> {
        let stats = aggregate(record)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| ReportError::CreateDir {
                path: self.dir.clone(),
                source: err,
            })?;

        let csv = self.dir.join(format!("{}.csv", labels.file_name));
        write_file(&csv, render_csv(record).as_bytes()).await?;
        info!("Wrote {}", csv.display());

        let chart = if self.charts {
            let path = self.dir.join(format!("{}.png", labels.file_name));
            render_chart(&stats, labels, &path)?;
            info!("Wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        let json = if self.json {
            let path = self.dir.join(format!("{}.json", labels.file_name));
            write_file(&path, &render_json(record, &stats)?).await?;
            info!("Wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(AxisArtifacts {
            stats,
            csv,
            chart,
            json,
        })
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    fs::write(path, contents)
        .await
        .map_err(|err| ReportError::Write {
            path: path.to_path_buf(),
            source: err,
        })
}
