// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Character-level cleaning applied before segmentation.
//
// Cleaning steps (applied in order):
//   1. Collapse every run of whitespace (space, tab, newline,
//      U+3000 ideographic space, ...) into one ASCII space
//   2. Keep only:
//        - ASCII letters, digits and '_'
//        - CJK Unified Ideographs U+4E00..=U+9FA5
//        - the ASCII space separator
//      Everything else is deleted outright, not replaced.
//
// Deleting in place can glue neighbouring fragments together:
// "猫，狗" becomes "猫狗" before segmentation sees it. The
// segmenter decides what to do with the merged run.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

/// First code point of the retained CJK range
const CJK_START: char = '\u{4E00}';
/// Last code point of the retained CJK range
const CJK_END: char = '\u{9FA5}';

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw text string for segmentation.
    /// Never fails; the result may be empty.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Collapse whitespace runs ─────────────────────────────────
        let mut collapsed  = String::with_capacity(text.len());
        let mut last_space = false;

        for c in text.chars() {
            if c.is_whitespace() {
                if !last_space {
                    collapsed.push(' ');
                }
                last_space = true;
            } else {
                collapsed.push(c);
                last_space = false;
            }
        }

        // ── Step 2: Drop characters outside the retained classes ─────────────
        collapsed.chars().filter(|&c| is_retained(c)).collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// True for characters that survive cleaning
pub fn is_retained(c: char) -> bool {
    c == ' ' || c == '_' || c.is_ascii_alphanumeric() || (CJK_START..=CJK_END).contains(&c)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello \t\n  world"), "hello world");
        // Ideographic space is whitespace too
        assert_eq!(p.clean("你好\u{3000}\u{3000}世界"), "你好 世界");
    }

    #[test]
    fn test_keeps_leading_and_trailing_space() {
        // No trimming: segmenters see the separator and drop it
        let p = Preprocessor::new();
        assert_eq!(p.clean("\n\nabc\n"), " abc ");
    }

    #[test]
    fn test_removes_punctuation() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("你好，世界！今天天气真好。"), "你好世界今天天气真好");
        assert_eq!(p.clean("don't stop-me_now"), "dont stopme_now");
    }

    #[test]
    fn test_deletion_merges_fragments() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("猫，狗"), "猫狗");
    }

    #[test]
    fn test_removes_out_of_range_characters() {
        let p = Preprocessor::new();
        // emoji, accented Latin, CJK Extension B, U+9FA6 (just past the range)
        assert_eq!(p.clean("a😀b café 𠀀\u{9FA6}中"), "ab caf 中");
    }

    #[test]
    fn test_range_boundaries() {
        assert!(is_retained('\u{4E00}'));
        assert!(is_retained('\u{9FA5}'));
        assert!(!is_retained('\u{4DFF}'));
        assert!(!is_retained('\u{9FA6}'));
        assert!(!is_retained('\t'));
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
        assert_eq!(p.clean("，。！？"), "");
    }
}
