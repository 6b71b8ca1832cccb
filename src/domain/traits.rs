// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The normalizer programs against `Segmenter`, never against
// a concrete word-segmentation algorithm. Implementations:
//   - JiebaSegmenter      → dictionary + HMM segmentation for
//                           unspaced Chinese text
//   - WhitespaceSegmenter → splits on spaces for scripts that
//                           already delimit words
//
// A segmenter is shared by every batch worker at once, so the
// trait requires Send + Sync and takes `&self` only.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

// ─── Segmenter ────────────────────────────────────────────────────────────────
/// Splits cleaned text into tokens.
///
/// Tokens borrow from the input, so segmentation never allocates
/// per-token strings. Implementations may emit whitespace-only or
/// single-character tokens; the normalizer filters them afterwards.
pub trait Segmenter: Send + Sync {
    /// Segment `text` into an ordered sequence of tokens.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
