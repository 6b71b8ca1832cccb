// ============================================================
// Layer 4 — Stopword Set Loader
// ============================================================
// Reads a newline-delimited stopword list into a lookup set.
//
// File format: UTF-8 text, one stopword per line. Each line is
// trimmed; blank lines are ignored; duplicates collapse.
//
// Missing file  → empty set, logged as a warning (no filtering)
// Anything else → PipelineError::Config, since the filter state
//                 would otherwise be unknown

use std::{collections::HashSet, fs, io, path::Path};

use crate::domain::error::PipelineError;

/// Immutable set of stopwords, built once per normalizer.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set: nothing is filtered by name
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load stopwords from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Stopword file '{}' not found, continuing without stopword filtering",
                    path.display()
                );
                return Ok(Self::empty());
            }
            Err(source) => {
                return Err(PipelineError::Config {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let set = Self::from_words(text.lines());
        tracing::info!("Loaded {} stopwords from '{}'", set.len(), path.display());
        Ok(set)
    }

    /// Build a set from an in-memory word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = StopwordSet::load(dir.path().join("nope.txt")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_lines_are_trimmed_and_deduplicated() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "的\r\n  了 \n\n的\n今天\n").unwrap();

        let set = StopwordSet::load(&path).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("的"));
        assert!(set.contains("了"));
        assert!(set.contains("今天"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_directory_path_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StopwordSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Config { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_a_config_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = StopwordSet::load(&path).unwrap_err();
        match err {
            PipelineError::Config { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
