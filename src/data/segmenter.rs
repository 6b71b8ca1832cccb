// ============================================================
// Layer 4 — Segmenters
// ============================================================
// Concrete implementations of the domain `Segmenter` trait.
//
//   JiebaSegmenter      — dictionary-based segmentation with the
//                         HMM enabled for unknown words. Needed for
//                         Chinese, where words are not separated by
//                         spaces.
//   WhitespaceSegmenter — splits on whitespace. Enough for text
//                         whose words are already delimited.
//
// The jieba dictionary is loaded once when the segmenter is
// built and then only read. One instance is shared by every
// worker through an Arc, so nothing is cached in a global.

use std::sync::Arc;

use clap::ValueEnum;
use jieba_rs::Jieba;
use serde::{Deserialize, Serialize};

use crate::domain::traits::Segmenter;

/// Which segmentation algorithm to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    #[default]
    Jieba,
    Whitespace,
}

/// Build the segmenter selected by `kind`, ready to share across workers
pub fn build_segmenter(kind: SegmenterKind) -> Arc<dyn Segmenter> {
    match kind {
        SegmenterKind::Jieba      => Arc::new(JiebaSegmenter::new()),
        SegmenterKind::Whitespace => Arc::new(WhitespaceSegmenter),
    }
}

// ─── JiebaSegmenter ───────────────────────────────────────────────────────────
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Load the bundled default dictionary
    pub fn new() -> Self {
        tracing::debug!("Loading jieba default dictionary");
        Self { jieba: Jieba::new() }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, true)
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

// ─── WhitespaceSegmenter ──────────────────────────────────────────────────────
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
