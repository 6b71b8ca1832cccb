// ============================================================
// Layer 3 — Error Types
// ============================================================
// Two families of errors, split by blast radius:
//
//   PipelineError — fatal. Raised before any job is dispatched
//                   (bad stopword file, bad directories, no pool).
//                   Propagates to the CLI and ends the run.
//
//   JobError      — scoped to one BatchJob. The batch runner
//                   converts it into a Failure outcome and the
//                   remaining jobs keep going.
//
// A missing stopword file is neither: the loader substitutes
// an empty set and logs a warning.

use std::{io, path::PathBuf, string::FromUtf8Error, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Stopword file exists but cannot be read or decoded
    #[error("cannot load stopwords from '{path}': {source}")]
    Config {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input directory is missing or cannot be listed
    #[error("cannot read input directory '{path}': {source}")]
    InputDirectory {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output directory cannot be created
    #[error("cannot create output directory '{path}': {source}")]
    OutputDirectory {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not valid UTF-8: {source}")]
    Decode {
        path:   PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("cannot write '{path}': {source}")]
    Write {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The segmenter (or anything else inside normalization) panicked
    #[error("normalization failed: {0}")]
    Processing(String),

    #[error("job timed out after {0:?}")]
    Timeout(Duration),
}
