// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a raw .txt file and its normalized form.
//
// The pipeline flows in this order:
//
//   .txt files
//       │
//       ▼
//   loader          → discovers files, reads UTF-8 text
//       │
//       ▼
//   Preprocessor    → collapses whitespace, drops disallowed chars
//       │
//       ▼
//   Segmenter       → jieba (dictionary + HMM) or whitespace
//       │
//       ▼
//   StopwordSet     → filters stopwords (plus the length filter)
//       │
//       ▼
//   LineChunker     → 5 tokens per line
//       │
//       ▼
//   loader          → writes {stem}_LLM.txt
//
// TextNormalizer wires the middle four steps together behind
// a single `process_text` call.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Discovers input files, reads and writes documents
pub mod loader;

/// Whitespace collapse and character-class filtering
pub mod preprocessor;

/// Jieba and whitespace implementations of `Segmenter`
pub mod segmenter;

/// Newline-delimited stopword list → lookup set
pub mod stopwords;

/// Groups tokens into fixed-width lines
pub mod chunker;

/// The full clean → segment → filter → chunk pipeline
pub mod normalizer;
