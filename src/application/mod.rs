// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only. Each use case builds one
// TextNormalizer, feeds documents through it and decides what
// happens to the result. No printing here (that's Layer 1).
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Directory-wide normalization on a worker pool
pub mod batch_use_case;

// Single-document normalization
pub mod process_use_case;
