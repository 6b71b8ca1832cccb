// ============================================================
// Layer 6 — Report Store
// ============================================================
// Persists a BatchReport as pretty-printed JSON so a batch run
// can be inspected by scripts after the console output is gone.
//
// Example file:
//   {
//     "outcomes": {
//       "a.txt": "Success",
//       "b.txt": { "Failure": "'txt/b.txt' is not valid UTF-8: ..." }
//     }
//   }

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::report::BatchReport;

/// Render the report as pretty JSON
pub fn to_json(report: &BatchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Cannot serialise batch report")
}

/// Write the report to `path`, creating parent directories.
pub fn save_report(report: &BatchReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }

    fs::write(path, to_json(report)?)
        .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

    tracing::debug!("Saved batch report to '{}'", path.display());
    Ok(())
}

/// Read a report previously written by `save_report`.
pub fn load_report(path: &Path) -> Result<BatchReport> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read report from '{}'", path.display()))?;
    Ok(serde_json::from_str(&json)?)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::Outcome;

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("run.json");

        let mut report = BatchReport::new();
        report.record("a.txt", Outcome::Success);
        report.record("b.txt", Outcome::Failure("bad bytes".into()));
        save_report(&report, &path).unwrap();

        assert_eq!(load_report(&path).unwrap(), report);
    }
}
