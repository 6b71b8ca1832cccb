// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `batch` and `process`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::{batch_use_case::BatchConfig, process_use_case::ProcessConfig};
use crate::data::segmenter::SegmenterKind;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize every .txt file in a directory
    Batch(BatchArgs),

    /// Normalize a single document
    Process(ProcessArgs),
}

/// All arguments for the `batch` command.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing the raw input documents
    #[arg(long, default_value = "txt")]
    pub input_dir: String,

    /// Directory for the normalized documents (created if missing)
    #[arg(long, default_value = "LLM")]
    pub output_dir: String,

    /// Newline-delimited stopword list; a missing file disables filtering
    #[arg(long, default_value = "cn_stopwords.txt")]
    pub stopwords: String,

    /// Only files ending in `.<extension>` are processed
    #[arg(long, default_value = "txt")]
    pub extension: String,

    /// Appended to each output file stem: a.txt → a_LLM.txt
    #[arg(long, default_value = "_LLM")]
    pub suffix: String,

    /// Word segmentation algorithm
    #[arg(long, value_enum, default_value_t = SegmenterKind::Jieba)]
    pub segmenter: SegmenterKind,

    /// Worker threads; 0 uses one per CPU
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Give up on a single file after this many seconds
    #[arg(long)]
    pub job_timeout_secs: Option<u64>,

    /// Print the report as JSON instead of one line per file
    #[arg(long)]
    pub json: bool,

    /// Also save the report as JSON to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// Convert CLI BatchArgs into the application-layer BatchConfig.
/// Output flags (`--json`, `--report`) stay in Layer 1.
impl From<&BatchArgs> for BatchConfig {
    fn from(a: &BatchArgs) -> Self {
        BatchConfig {
            input_dir:        a.input_dir.clone(),
            output_dir:       a.output_dir.clone(),
            stopwords:        a.stopwords.clone(),
            extension:        a.extension.clone(),
            suffix:           a.suffix.clone(),
            segmenter:        a.segmenter,
            workers:          a.workers,
            job_timeout_secs: a.job_timeout_secs,
        }
    }
}

/// All arguments for the `process` command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// The document to normalize
    pub input: String,

    /// Save the result here instead of printing it
    #[arg(long, short)]
    pub output: Option<String>,

    /// Newline-delimited stopword list; a missing file disables filtering
    #[arg(long, default_value = "cn_stopwords.txt")]
    pub stopwords: String,

    /// Word segmentation algorithm
    #[arg(long, value_enum, default_value_t = SegmenterKind::Jieba)]
    pub segmenter: SegmenterKind,
}

impl From<ProcessArgs> for ProcessConfig {
    fn from(a: ProcessArgs) -> Self {
        ProcessConfig {
            input:     a.input,
            output:    a.output,
            stopwords: a.stopwords,
            segmenter: a.segmenter,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_batch_defaults() {
        let cli = Cli::try_parse_from(["llm_text_prep", "batch"]).unwrap();
        let Commands::Batch(args) = cli.command else {
            panic!("expected batch");
        };
        let cfg = BatchConfig::from(&args);

        assert_eq!(cfg.input_dir, "txt");
        assert_eq!(cfg.output_dir, "LLM");
        assert_eq!(cfg.stopwords, "cn_stopwords.txt");
        assert_eq!(cfg.suffix, "_LLM");
        assert_eq!(cfg.segmenter, SegmenterKind::Jieba);
        assert_eq!(cfg.workers, 0);
        assert!(cfg.job_timeout().is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_process_flags() {
        let cli = Cli::try_parse_from([
            "llm_text_prep", "process", "doc.txt", "-o", "out.txt", "--segmenter", "whitespace",
        ])
        .unwrap();
        let Commands::Process(args) = cli.command else {
            panic!("expected process");
        };
        let cfg = ProcessConfig::from(args);

        assert_eq!(cfg.input, "doc.txt");
        assert_eq!(cfg.output.as_deref(), Some("out.txt"));
        assert_eq!(cfg.segmenter, SegmenterKind::Whitespace);
    }
}
