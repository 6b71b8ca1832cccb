// ============================================================
// Layer 2 — BatchUseCase
// ============================================================
// Normalizes every input file in a directory:
//
//   Step 1: Build the normalizer once      (Layer 4 - data)
//   Step 2: Discover *.txt input files     (Layer 4 - data)
//   Step 3: Create the output directory
//   Step 4: Build the bounded worker pool  (Layer 6 - infra)
//   Step 5: Run read → normalize → write per file
//   Step 6: Fold per-file results into a BatchReport
//
// Steps 2–4 are fatal on failure: nothing has been dispatched
// yet. From Step 5 on, a failing file only produces a Failure
// entry in the report; its siblings keep going.
//
// Reference: Rust Book §16 (Fearless Concurrency)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, sync::Arc, time::Duration};

use crate::data::{
    loader::{discover_jobs, read_document, write_output},
    normalizer::TextNormalizer,
    segmenter::SegmenterKind,
};
use crate::domain::{
    error::{JobError, PipelineError},
    report::{BatchJob, BatchReport, Outcome},
};
use crate::infra::worker_pool::WorkerPool;

// ─── Batch Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir:        String,
    pub output_dir:       String,
    pub stopwords:        String,
    pub extension:        String,
    pub suffix:           String,
    pub segmenter:        SegmenterKind,
    /// 0 = one worker per available CPU
    pub workers:          usize,
    pub job_timeout_secs: Option<u64>,
}

impl BatchConfig {
    pub fn job_timeout(&self) -> Option<Duration> {
        self.job_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir:        "txt".to_string(),
            output_dir:       "LLM".to_string(),
            stopwords:        "cn_stopwords.txt".to_string(),
            extension:        "txt".to_string(),
            suffix:           "_LLM".to_string(),
            segmenter:        SegmenterKind::Jieba,
            workers:          0,
            job_timeout_secs: None,
        }
    }
}

// ─── BatchUseCase ────────────────────────────────────────────────────────────
pub struct BatchUseCase {
    config:     BatchConfig,
    normalizer: Arc<TextNormalizer>,
}

impl BatchUseCase {
    /// Load stopwords and the segmenter once for the whole run.
    pub fn new(config: BatchConfig) -> Result<Self> {
        let normalizer = TextNormalizer::from_stopword_file(&config.stopwords, config.segmenter)
            .context("Cannot build text normalizer")?;
        Ok(Self::with_normalizer(config, Arc::new(normalizer)))
    }

    /// Use an already built normalizer (shared with other callers).
    pub fn with_normalizer(config: BatchConfig, normalizer: Arc<TextNormalizer>) -> Self {
        Self { config, normalizer }
    }

    /// Run over the configured directories
    pub fn execute(&self) -> Result<BatchReport> {
        let cfg = &self.config;
        tracing::info!(
            "Batch run: '{}' → '{}' (segmenter={})",
            cfg.input_dir,
            cfg.output_dir,
            self.normalizer.segmenter_name()
        );
        Ok(self.run(Path::new(&cfg.input_dir), Path::new(&cfg.output_dir))?)
    }

    /// Normalize every matching file in `input_dir` into `output_dir`.
    /// Returns once every job has succeeded or failed.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport, PipelineError> {
        let cfg = &self.config;

        // ── Fatal checks, before any dispatch ────────────────────────────────
        let jobs = discover_jobs(input_dir, output_dir, &cfg.extension, &cfg.suffix)?;

        fs::create_dir_all(output_dir).map_err(|source| PipelineError::OutputDirectory {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let pool = WorkerPool::new(cfg.workers, cfg.job_timeout())?;
        tracing::info!("Processing {} files on {} workers", jobs.len(), pool.size());

        // ── Dispatch ─────────────────────────────────────────────────────────
        let names: Vec<String> = jobs.iter().map(|j| j.name.clone()).collect();
        let normalizer         = Arc::clone(&self.normalizer);
        let results            = pool.run(jobs, move |job: BatchJob| process_job(&normalizer, &job));

        // ── Aggregate ────────────────────────────────────────────────────────
        let report: BatchReport = names
            .into_iter()
            .zip(results)
            .map(|(name, result)| {
                let outcome = match result {
                    Ok(()) => {
                        tracing::debug!("Processed '{}'", name);
                        Outcome::Success
                    }
                    Err(e) => {
                        tracing::warn!("Failed '{}': {}", name, e);
                        Outcome::Failure(e.to_string())
                    }
                };
                (name, outcome)
            })
            .collect();

        tracing::info!(
            "Batch finished: {} succeeded, {} failed",
            report.success_count(),
            report.failure_count()
        );
        Ok(report)
    }
}

/// read → normalize → write for a single file
fn process_job(normalizer: &TextNormalizer, job: &BatchJob) -> Result<(), JobError> {
    let doc        = read_document(&job.source)?;
    let normalized = normalizer.process_text(&doc.text);
    write_output(&job.dest, &normalized)
}
