// src/discovery/entry_processor.rs

use super::walker::DiscoveredFile;
use crate::classify::{category, is_forced_binary, is_text, language};
use crate::config::{Config, MetricsBasis};
use crate::core_types::{FileKind, FileRecord, Metrics};
use crate::processing::{apply_filters, collect, decode};
use log::{debug, warn};
use std::fs;
use tracing::instrument;

/// Classifies one included file and, for text, normalizes it and collects metrics.
///
/// Never fails: unreadable files are routed to the binary branch and
/// undecodable bytes are replaced during decoding.
#[instrument(level = "trace", skip_all, fields(path = %file.relative_path))]
pub(super) fn process_file(file: &DiscoveredFile, config: &Config) -> (FileRecord, Option<Metrics>) {
    let path = file.absolute_path.as_path();

    if is_forced_binary(path) {
        debug!("Routing '{}' to the binary branch by extension", file.relative_path);
        return (binary_record(file), None);
    }
    if !is_text(path) {
        debug!("Detected binary content in '{}'", file.relative_path);
        return (binary_record(file), None);
    }

    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(
                "Could not read '{}' after probing it as text, treating as binary: {}",
                file.relative_path, e
            );
            return (binary_record(file), None);
        }
    };

    let language = language(path);
    let (decoded, encoding) = decode(&raw);
    if encoding != encoding_rs::UTF_8 {
        debug!("Decoded '{}' as {}", file.relative_path, encoding.name());
    }

    let source_metrics = match config.metrics_basis {
        MetricsBasis::Source => Some(collect(&file.relative_path, &decoded, language)),
        MetricsBasis::Normalized => None,
    };

    let mut record = FileRecord {
        relative_path: file.relative_path.clone(),
        kind: FileKind::Text {
            language,
            content: String::new(),
        },
    };
    let content = apply_filters(decoded, config.remove_whitespace, record.extension());

    let metrics = source_metrics
        .unwrap_or_else(|| collect(&file.relative_path, &content, language));
    record.kind = FileKind::Text { language, content };
    (record, Some(metrics))
}

fn binary_record(file: &DiscoveredFile) -> FileRecord {
    FileRecord {
        relative_path: file.relative_path.clone(),
        kind: FileKind::Binary {
            category: category(&file.absolute_path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{FileCategory, Language};
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn discovered(dir: &TempDir, name: &str, content: &[u8]) -> DiscoveredFile {
        let absolute_path = dir.path().join(name);
        fs::write(&absolute_path, content).unwrap();
        DiscoveredFile {
            absolute_path,
            relative_path: name.to_string(),
        }
    }

    fn text_of(record: &FileRecord) -> (&Language, &str) {
        match &record.kind {
            FileKind::Text { language, content } => (language, content.as_str()),
            FileKind::Binary { .. } => panic!("expected a text record for {}", record.relative_path),
        }
    }

    #[test]
    fn test_text_file_is_normalized() {
        let dir = tempdir().unwrap();
        let file = discovered(&dir, "main.go", b"package main\n\n// entry\nfunc main() {}\n");
        let (record, metrics) = process_file(&file, &Config::new(dir.path()));

        let (language, content) = text_of(&record);
        assert_eq!(*language, Language::Go);
        assert_eq!(content, "package main // entry func main() {}");
        // Collapsed to one segment, so the basis is the normalized text.
        let metrics = metrics.unwrap();
        assert_eq!(metrics.total_lines, 1);
        assert_eq!(metrics.comment_lines, 0);
    }

    #[test]
    fn test_source_basis_counts_original_lines() {
        let dir = tempdir().unwrap();
        let file = discovered(&dir, "main.go", b"package main\n\n// entry\nfunc main() {}\n");
        let mut config = Config::new(dir.path());
        config.metrics_basis = MetricsBasis::Source;
        let (_, metrics) = process_file(&file, &config);

        let metrics = metrics.unwrap();
        assert_eq!(metrics.total_lines, 4);
        assert_eq!(metrics.comment_lines, 1);
        assert!((metrics.comment_ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_binary_content_gets_category() {
        let dir = tempdir().unwrap();
        let file = discovered(&dir, "blob.dat", &[0x00, 0x01, 0x02, 0xFF]);
        let (record, metrics) = process_file(&file, &Config::new(dir.path()));
        assert!(record.is_binary());
        assert!(metrics.is_none());
        assert_eq!(
            record.kind,
            FileKind::Binary {
                category: FileCategory::Binary
            }
        );
    }

    #[test]
    fn test_svg_is_forced_binary() {
        let dir = tempdir().unwrap();
        let file = discovered(&dir, "logo.svg", b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>");
        let (record, _) = process_file(&file, &Config::new(dir.path()));
        assert_eq!(
            record.kind,
            FileKind::Binary {
                category: FileCategory::SvgImage
            }
        );
    }

    #[test]
    fn test_missing_file_is_binary() {
        let file = DiscoveredFile {
            absolute_path: Path::new("/nonexistent/aidigest/file.txt").to_path_buf(),
            relative_path: "file.txt".to_string(),
        };
        let (record, metrics) = process_file(&file, &Config::new("/nonexistent"));
        assert!(record.is_binary());
        assert!(metrics.is_none());
    }
}
