// ============================================================
// Layer 3 — Batch Jobs and Reports
// ============================================================
// BatchJob    — one (source, destination) pair, created during
//               discovery and handed to exactly one worker.
// Outcome     — terminal state of a job.
// BatchReport — filename → Outcome, keyed by the original
//               input file name.
//
// The report is a BTreeMap so iteration (and the JSON output)
// is sorted by filename no matter which worker finished first.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::PathBuf};

/// One unit of batch work. Never mutated after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    /// Input file name, used as the report key
    pub name:   String,
    pub source: PathBuf,
    pub dest:   PathBuf,
}

/// Terminal state of a single BatchJob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Aggregated result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    outcomes: BTreeMap<String, Outcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `name`. A later record for the same
    /// name replaces the earlier one.
    pub fn record(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.outcomes.insert(name.into(), outcome);
    }

    pub fn get(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.get(name)
    }

    /// Iterate in filename order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        self.outcomes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    /// Names of the files that failed, with their reasons
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|(k, v)| match v {
            Outcome::Failure(reason) => Some((k.as_str(), reason.as_str())),
            Outcome::Success         => None,
        })
    }
}

impl FromIterator<(String, Outcome)> for BatchReport {
    fn from_iter<I: IntoIterator<Item = (String, Outcome)>>(iter: I) -> Self {
        Self { outcomes: iter.into_iter().collect() }
    }
}
