// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// The single entry point of the pipeline:
//
//   raw text
//       │
//       ▼
//   Preprocessor   → collapse whitespace, drop disallowed chars
//       │
//       ▼
//   Segmenter      → split into tokens (jieba or whitespace)
//       │
//       ▼
//   filter         → drop stopwords and tokens shorter than 2 chars
//       │
//       ▼
//   LineChunker    → 5 tokens per line, lines joined by '\n'
//
// `process_text` never fails: empty input, input that cleans to
// nothing, and input made only of stopwords all give "".
//
// The normalizer holds no mutable state. Sharing one instance
// between batch workers through an Arc needs no locking.

use std::{path::Path, sync::Arc};

use crate::data::{
    chunker::LineChunker,
    preprocessor::Preprocessor,
    segmenter::{build_segmenter, SegmenterKind},
    stopwords::StopwordSet,
};
use crate::domain::{error::PipelineError, traits::Segmenter};

/// Tokens with fewer characters than this are always dropped
pub const MIN_TOKEN_CHARS: usize = 2;

pub struct TextNormalizer {
    preprocessor: Preprocessor,
    segmenter:    Arc<dyn Segmenter>,
    stopwords:    StopwordSet,
    chunker:      LineChunker,
}

impl TextNormalizer {
    /// Build a normalizer around an already loaded stopword set
    /// and segmenter.
    pub fn new(stopwords: StopwordSet, segmenter: Arc<dyn Segmenter>) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            segmenter,
            stopwords,
            chunker: LineChunker::default(),
        }
    }

    /// Load stopwords from `stopword_path` and build the segmenter
    /// selected by `kind`. A missing stopword file is fine; an
    /// unreadable one is a `PipelineError::Config`.
    pub fn from_stopword_file(
        stopword_path: impl AsRef<Path>,
        kind:          SegmenterKind,
    ) -> Result<Self, PipelineError> {
        let stopwords = StopwordSet::load(stopword_path)?;
        let segmenter = build_segmenter(kind);
        tracing::debug!(
            "Normalizer ready (segmenter={}, stopwords={})",
            segmenter.name(),
            stopwords.len()
        );
        Ok(Self::new(stopwords, segmenter))
    }

    /// Normalize one document.
    pub fn process_text(&self, raw: &str) -> String {
        let cleaned = self.preprocessor.clean(raw);
        let tokens  = self.segmenter.segment(&cleaned);
        let kept    = self.filter(tokens);
        self.chunker.chunk(&kept)
    }

    /// Drop stopwords and short tokens, preserving order.
    pub fn filter<'a>(&self, tokens: Vec<&'a str>) -> Vec<&'a str> {
        tokens.into_iter().filter(|t| self.keeps(t)).collect()
    }

    /// True when `token` survives filtering
    pub fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= MIN_TOKEN_CHARS && !self.stopwords.contains(token)
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn segmenter_name(&self) -> &'static str {
        self.segmenter.name()
    }
}
