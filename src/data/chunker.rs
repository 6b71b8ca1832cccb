// ============================================================
// Layer 4 — Line Chunker
// ============================================================
// Re-wraps a token sequence into fixed-width lines.
//
// Example with tokens_per_line=5:
//   Tokens: A B C D E F G
//   Line 1: "A B C D E"
//   Line 2: "F G"            (only the last line may be short)
//
// Tokens within a line are joined by a single space, lines by
// a single '\n'. No trailing newline is written.
//
// Reference: Rust Book §8 (Slices)

/// Number of tokens per output line
pub const TOKENS_PER_LINE: usize = 5;

pub struct LineChunker {
    tokens_per_line: usize,
}

impl LineChunker {
    /// # Panics
    /// Panics if `tokens_per_line` is 0
    pub fn new(tokens_per_line: usize) -> Self {
        assert!(tokens_per_line > 0, "tokens_per_line must be at least 1");
        Self { tokens_per_line }
    }

    /// Join `tokens` into lines of at most `tokens_per_line` tokens.
    /// An empty slice gives an empty string.
    pub fn chunk(&self, tokens: &[&str]) -> String {
        tokens
            .chunks(self.tokens_per_line)
            .map(|line| line.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns how many lines `token_count` tokens would produce
    pub fn num_lines(&self, token_count: usize) -> usize {
        token_count.div_ceil(self.tokens_per_line)
    }
}

impl Default for LineChunker {
    fn default() -> Self {
        Self::new(TOKENS_PER_LINE)
    }
}
