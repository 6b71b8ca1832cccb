// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing what the pipeline
// works with. Nothing here touches the filesystem, spawns
// threads, or knows which segmentation dictionary is in use.
//
// Rules for this layer:
//   - NO file I/O
//   - NO thread pools
//   - NO concrete segmenters (jieba lives in Layer 4)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A document read from disk
pub mod document;

// Per-file jobs and the aggregated batch outcome
pub mod report;

// Fatal and per-job error types
pub mod error;

// The pluggable segmentation seam
pub mod traits;
