// ============================================================
// Layer 2 — ProcessUseCase
// ============================================================
// Single-document flow: read one file, normalize it, and either
// save the result or hand it back to the caller for display.
//
// Any failure ends this one operation with an error; the caller
// can simply try again with a different file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::Arc};

use crate::data::{
    loader::{read_document, write_output},
    normalizer::TextNormalizer,
    segmenter::SegmenterKind,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    pub input:     String,
    /// Where to save the result; `None` means return it only
    pub output:    Option<String>,
    pub stopwords: String,
    pub segmenter: SegmenterKind,
}

pub struct ProcessUseCase {
    config:     ProcessConfig,
    normalizer: Arc<TextNormalizer>,
}

impl ProcessUseCase {
    pub fn new(config: ProcessConfig) -> Result<Self> {
        let normalizer = TextNormalizer::from_stopword_file(&config.stopwords, config.segmenter)
            .context("Cannot build text normalizer")?;
        Ok(Self::with_normalizer(config, Arc::new(normalizer)))
    }

    pub fn with_normalizer(config: ProcessConfig, normalizer: Arc<TextNormalizer>) -> Self {
        Self { config, normalizer }
    }

    /// Normalize the configured file and return the result.
    /// When an output path is configured the result is also saved there.
    pub fn execute(&self) -> Result<String> {
        let input = Path::new(&self.config.input);
        if !input.is_file() {
            bail!("Input file '{}' does not exist", input.display());
        }

        let doc = read_document(input)?;
        tracing::info!("Read '{}' ({} chars)", doc.source, doc.char_len());

        let normalized = self.normalizer.process_text(&doc.text);

        if let Some(output) = &self.config.output {
            write_output(Path::new(output), &normalized)?;
            tracing::info!("Saved result to '{}'", output);
        }

        Ok(normalized)
    }
}
