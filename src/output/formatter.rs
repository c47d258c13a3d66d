// src/output/formatter.rs

//! Serializes file records into the artifact text.

use crate::classify::{FileCategory, Language};
use crate::config::OutputFormat;
use crate::core_types::{FileKind, FileRecord, Metrics};
use crate::errors::Result;
use crate::processing::count_lines_and_comments;
use serde::Serialize;

/// Appends one record at a time to the artifact buffer.
///
/// Records arrive in traversal order; implementations must not reorder them.
pub trait ArtifactFormatter {
    /// Appends the serialization of `record` to `out`.
    ///
    /// `metrics` is the entry collected for a text record, if any.
    fn append_record(&self, out: &mut String, record: &FileRecord, metrics: Option<&Metrics>) -> Result<()>;
}

/// `# path` headings with fenced content or a one-line binary description.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

impl ArtifactFormatter for MarkdownFormatter {
    fn append_record(&self, out: &mut String, record: &FileRecord, _metrics: Option<&Metrics>) -> Result<()> {
        out.push_str("# ");
        out.push_str(&record.relative_path);
        out.push_str("\n\n");
        match &record.kind {
            FileKind::Text { content, .. } => {
                out.push_str("```");
                out.push_str(record.extension());
                out.push('\n');
                out.push_str(content);
                out.push_str("\n```\n\n");
            }
            FileKind::Binary { category } => {
                let description = if *category == FileCategory::SvgImage {
                    "This is a file of type: "
                } else {
                    "This is a binary file of type: "
                };
                out.push_str(description);
                out.push_str(category.label());
                out.push_str("\n\n");
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct TextLine<'a> {
    path: &'a str,
    content: &'a str,
    language: Language,
    total_lines: usize,
    comment_lines: usize,
}

#[derive(Serialize)]
struct BinaryLine<'a> {
    path: &'a str,
    file_type: FileCategory,
    is_binary: bool,
}

/// One compact JSON object per record, joined by `\n` with no trailing newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLinesFormatter;

impl ArtifactFormatter for JsonLinesFormatter {
    fn append_record(&self, out: &mut String, record: &FileRecord, metrics: Option<&Metrics>) -> Result<()> {
        let line = match &record.kind {
            FileKind::Text { language, content } => {
                let (total_lines, comment_lines) = match metrics {
                    Some(m) => (m.total_lines, m.comment_lines),
                    None => count_lines_and_comments(content, *language),
                };
                serde_json::to_string(&TextLine {
                    path: &record.relative_path,
                    content,
                    language: *language,
                    total_lines,
                    comment_lines,
                })?
            }
            FileKind::Binary { category } => serde_json::to_string(&BinaryLine {
                path: &record.relative_path,
                file_type: *category,
                is_binary: true,
            })?,
        };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&line);
        Ok(())
    }
}

/// Returns the formatter for `format`.
pub fn formatter_for(format: OutputFormat) -> Box<dyn ArtifactFormatter> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
        OutputFormat::JsonLines => Box::new(JsonLinesFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(path: &str, language: Language, content: &str) -> FileRecord {
        FileRecord {
            relative_path: path.to_string(),
            kind: FileKind::Text {
                language,
                content: content.to_string(),
            },
        }
    }

    fn binary(path: &str, category: FileCategory) -> FileRecord {
        FileRecord {
            relative_path: path.to_string(),
            kind: FileKind::Binary { category },
        }
    }

    #[test]
    fn test_markdown_text_block() -> Result<()> {
        let mut out = String::new();
        MarkdownFormatter.append_record(&mut out, &text("src/main.rs", Language::Rust, "fn main() {}"), None)?;
        assert_eq!(out, "# src/main.rs\n\n```rs\nfn main() {}\n```\n\n");
        Ok(())
    }

    #[test]
    fn test_markdown_no_extension_has_empty_tag() -> Result<()> {
        let mut out = String::new();
        MarkdownFormatter.append_record(&mut out, &text("Makefile", Language::Unknown, "all:"), None)?;
        assert_eq!(out, "# Makefile\n\n```\nall:\n```\n\n");
        Ok(())
    }

    #[test]
    fn test_markdown_binary_and_svg_descriptions() -> Result<()> {
        let mut out = String::new();
        MarkdownFormatter.append_record(&mut out, &binary("b.png", FileCategory::Image), None)?;
        MarkdownFormatter.append_record(&mut out, &binary("icon.svg", FileCategory::SvgImage), None)?;
        assert_eq!(
            out,
            "# b.png\n\nThis is a binary file of type: Image\n\n\
             # icon.svg\n\nThis is a file of type: SVG Image\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_jsonl_lines_and_schema() -> Result<()> {
        let metrics = crate::processing::collect("a.py", "# c\nx", Language::Python);
        let mut out = String::new();
        JsonLinesFormatter.append_record(&mut out, &text("a.py", Language::Python, "# c\nx"), Some(&metrics))?;
        JsonLinesFormatter.append_record(&mut out, &binary("lib.so", FileCategory::SharedObject), None)?;

        assert!(!out.ends_with('\n'));
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r##"{"path":"a.py","content":"# c\nx","language":"Python","total_lines":2,"comment_lines":1}"##
        );
        assert_eq!(
            lines[1],
            r#"{"path":"lib.so","file_type":"Shared Object","is_binary":true}"#
        );
        Ok(())
    }

    #[test]
    fn test_jsonl_counts_without_metrics() -> Result<()> {
        let mut out = String::new();
        JsonLinesFormatter.append_record(&mut out, &text("q.sql", Language::Sql, "-- a\nselect 1"), None)?;
        let value: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(value["total_lines"], 2);
        assert_eq!(value["comment_lines"], 1);
        Ok(())
    }

    #[test]
    fn test_formatter_for_format() -> Result<()> {
        let record = binary("x.exe", FileCategory::Executable);
        let mut md = String::new();
        formatter_for(OutputFormat::Markdown).append_record(&mut md, &record, None)?;
        assert!(md.starts_with("# x.exe"));
        let mut jsonl = String::new();
        formatter_for(OutputFormat::JsonLines).append_record(&mut jsonl, &record, None)?;
        assert!(jsonl.starts_with('{'));
        Ok(())
    }
}
