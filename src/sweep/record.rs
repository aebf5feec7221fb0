use std::collections::BTreeMap;

use serde::Serialize;

use crate::args::Axis;

/// One trial, tagged with the parameter value it ran under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub param: u64,
    pub mean_latency_us: u64,
    pub failed: usize,
    pub run: usize,
}

/// Every trial of one axis, in the order they ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentRecord {
    axis: Axis,
    results: Vec<TrialResult>,
}

impl ExperimentRecord {
    #[must_use]
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: TrialResult) {
        self.results.push(result);
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results grouped by parameter value, keys ascending.
    #[must_use]
    pub fn by_param(&self) -> BTreeMap<u64, Vec<&TrialResult>> {
        let mut groups: BTreeMap<u64, Vec<&TrialResult>> = BTreeMap::new();
        for result in &self.results {
            groups.entry(result.param).or_default().push(result);
        }
        groups
    }
}
