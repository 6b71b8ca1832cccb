// ============================================================
// Layer 4 — Document Loader
// ============================================================
// File-level I/O for the pipeline:
//
//   discover_jobs  — list `*.{ext}` files directly inside the
//                    input directory (non-recursive) and pair
//                    each with its output path
//   read_document  — read one file fully as UTF-8
//   write_output   — write one normalized result fully
//
// Output naming: "notes.txt" → "{output_dir}/notes_LLM.txt"
// (stem + suffix + "." + extension).
//
// Per-file read/write failures are JobErrors so the batch runner
// can record them. Only an unreadable input directory is fatal.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::{
    document::Document,
    error::{JobError, PipelineError},
    report::BatchJob,
};

/// Find every input file and pair it with its destination.
/// Jobs come back sorted by file name.
pub fn discover_jobs(
    input_dir:  &Path,
    output_dir: &Path,
    extension:  &str,
    suffix:     &str,
) -> Result<Vec<BatchJob>, PipelineError> {
    let dir_error = |source: std::io::Error| PipelineError::InputDirectory {
        path: input_dir.to_path_buf(),
        source,
    };

    let wanted = format!(".{extension}");
    let mut jobs = Vec::new();

    for entry in fs::read_dir(input_dir).map_err(dir_error)? {
        let entry = entry.map_err(dir_error)?;
        let path  = entry.path();

        // Subdirectories (even ones named "x.txt") are skipped
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        if !name.ends_with(&wanted) {
            continue;
        }

        let Some(dest) = output_path(output_dir, name, extension, suffix) else {
            tracing::warn!("Skipping '{}': cannot derive output name", name);
            continue;
        };

        jobs.push(BatchJob {
            name:   name.to_string(),
            source: path,
            dest,
        });
    }

    jobs.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::info!(
        "Discovered {} '*{}' files in '{}'",
        jobs.len(),
        wanted,
        input_dir.display()
    );
    Ok(jobs)
}

/// Derive `{output_dir}/{stem}{suffix}.{extension}` for an input file name
pub fn output_path(
    output_dir: &Path,
    file_name:  &str,
    extension:  &str,
    suffix:     &str,
) -> Option<PathBuf> {
    let stem = Path::new(file_name).file_stem()?.to_str()?;
    Some(output_dir.join(format!("{stem}{suffix}.{extension}")))
}

/// Read a whole file as UTF-8.
/// Read and decode failures are reported separately.
pub fn read_document(path: &Path) -> Result<Document, JobError> {
    let bytes = fs::read(path).map_err(|source| JobError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| JobError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Document::new(source, text))
}

/// Write a normalized document, replacing any existing file.
pub fn write_output(path: &Path, text: &str) -> Result<(), JobError> {
    fs::write(path, text).map_err(|source| JobError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_derivation() {
        let out = Path::new("LLM");
        assert_eq!(
            output_path(out, "a.txt", "txt", "_LLM").unwrap(),
            PathBuf::from("LLM/a_LLM.txt")
        );
        assert_eq!(
            output_path(out, "report.v2.txt", "txt", "_LLM").unwrap(),
            PathBuf::from("LLM/report.v2_LLM.txt")
        );
    }

    #[test]
    fn test_discovery_is_flat_and_filtered() {
        let input = tempfile::tempdir().unwrap();
        fs::write(input.path().join("b.txt"), "b").unwrap();
        fs::write(input.path().join("a.txt"), "a").unwrap();
        fs::write(input.path().join("notes.md"), "ignored").unwrap();
        fs::write(input.path().join("txt"), "no dot, ignored").unwrap();
        fs::create_dir(input.path().join("dir.txt")).unwrap();
        fs::write(input.path().join("dir.txt").join("nested.txt"), "ignored").unwrap();

        let jobs = discover_jobs(input.path(), Path::new("out"), "txt", "_LLM").unwrap();
        let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();

        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(jobs[0].source, input.path().join("a.txt"));
        assert_eq!(jobs[0].dest, PathBuf::from("out/a_LLM.txt"));
    }

    #[test]
    fn test_missing_input_dir_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let err  = discover_jobs(&root.path().join("missing"), root.path(), "txt", "_LLM")
            .unwrap_err();
        assert!(matches!(err, PipelineError::InputDirectory { .. }));
    }

    #[test]
    fn test_read_document_separates_read_and_decode_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = read_document(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(missing, JobError::Read { .. }));

        let bad = dir.path().join("bad.txt");
        fs::write(&bad, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
        assert!(matches!(read_document(&bad).unwrap_err(), JobError::Decode { .. }));

        let good = dir.path().join("good.txt");
        fs::write(&good, "你好").unwrap();
        let doc = read_document(&good).unwrap();
        assert_eq!(doc.source, "good.txt");
        assert_eq!(doc.char_len(), 2);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_output(&dir.path().join("nope").join("x.txt"), "x").unwrap_err();
        assert!(matches!(err, JobError::Write { .. }));
    }
}
