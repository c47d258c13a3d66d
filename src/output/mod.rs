// src/output/mod.rs

//! Assembles the artifact and presents aggregation results.

use crate::config::OutputFormat;
use crate::core_types::{FileRecord, Metrics};
use crate::errors::Result;
use log::debug;
use std::collections::BTreeMap;

pub mod formatter;
pub mod summary;
pub mod writer;

pub use formatter::{formatter_for, ArtifactFormatter, JsonLinesFormatter, MarkdownFormatter};

/// Serializes `records` in order into a single artifact string.
///
/// An empty record list yields an empty artifact in both formats.
///
/// # Examples
/// ```
/// use aidigest::classify::Language;
/// use aidigest::config::OutputFormat;
/// use aidigest::core_types::{FileKind, FileRecord};
/// use aidigest::output::render_artifact;
///
/// let records = vec![FileRecord {
///     relative_path: "hello.txt".to_string(),
///     kind: FileKind::Text { language: Language::Unknown, content: "hi".to_string() },
/// }];
/// let artifact = render_artifact(&records, &Default::default(), OutputFormat::Markdown).unwrap();
/// assert_eq!(artifact, "# hello.txt\n\n```txt\nhi\n```\n\n");
///
/// assert_eq!(render_artifact(&[], &Default::default(), OutputFormat::JsonLines).unwrap(), "");
/// ```
pub fn render_artifact(
    records: &[FileRecord],
    metrics: &BTreeMap<String, Metrics>,
    format: OutputFormat,
) -> Result<String> {
    debug!("Rendering {} records as {}", records.len(), format.as_str());
    let formatter = formatter_for(format);
    let mut artifact = String::new();
    for record in records {
        formatter.append_record(&mut artifact, record, metrics.get(&record.relative_path))?;
    }
    Ok(artifact)
}
