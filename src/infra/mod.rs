// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting machinery the use cases lean on:
//
//   worker_pool.rs  — Bounded rayon thread pool. Catches panics
//                     and enforces the optional per-job timeout
//                     at the job boundary.
//
//   report_store.rs — Batch report persistence. Serialises a
//                     BatchReport to JSON for `--json` output
//                     and the `--report` file.
//
// Reference: Rust Book §16 (Fearless Concurrency)
//            Rust Book §9 (Error Handling with anyhow)

/// Fixed-size worker pool with per-job isolation
pub mod worker_pool;

/// BatchReport JSON rendering and persistence
pub mod report_store;
