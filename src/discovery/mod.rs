//! Walks a directory once and aggregates it into an [`AggregationResult`].
//!
//! Each discovered file is counted, tested against the ignore set, inserted
//! into the tree, classified, and (for text) normalized and measured. Records
//! are serialized in traversal order once the walk completes.

use crate::config::Config;
use crate::core_types::AggregationResult;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::build_ignore_set;
use crate::output::render_artifact;
use crate::progress::{NoOpProgress, ProgressReporter};
use crate::tree::TreeNode;
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;

mod entry_processor;
mod walker;

pub(crate) use walker::collect_files;

/// Aggregates `config.root_dir` into a single artifact with statistics.
///
/// This is a pure function of the directory contents and `config`: calling it
/// twice on an unchanged directory yields equal results.
///
/// # Errors
/// Returns `Error::Walk` if the root is missing or not a directory, and
/// `Error::Io` if the repository ignore file exists but cannot be read.
/// Per-file problems never abort the call.
///
/// # Examples
///
/// ```
/// use aidigest::{aggregate, Config};
/// use std::fs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// fs::write(dir.path().join("main.go"), "package main\n")?;
/// fs::write(dir.path().join("debug.log"), "noise")?;
/// fs::write(dir.path().join(".aidigestignore"), "*.log\n")?;
///
/// let result = aggregate(&Config::new(dir.path()))?;
/// assert_eq!(result.total_files, 3);
/// assert_eq!(result.ignored_count, 1);
/// assert_eq!(result.included_paths, [".aidigestignore", "main.go"]);
/// assert_eq!(result.metrics["main.go"].language.label(), "Go");
/// # Ok(())
/// # }
/// ```
pub fn aggregate(config: &Config) -> Result<AggregationResult> {
    aggregate_with_progress(config, None)
}

/// Same as [`aggregate`], reporting one tick per discovered file.
pub fn aggregate_with_progress(
    config: &Config,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<AggregationResult> {
    let root = config.root_dir.as_path();
    let metadata = std::fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::Walk(format!(
            "traversal root '{}' does not exist",
            root.display()
        )),
        _ => io_error_with_path(e, root),
    })?;
    if !metadata.is_dir() {
        return Err(Error::Walk(format!(
            "traversal root '{}' is not a directory",
            root.display()
        )));
    }

    let ignore_set = build_ignore_set(config)?;
    debug!("Ignore set has {} patterns", ignore_set.len());

    let files = collect_files(root)?;
    let progress = progress.unwrap_or_else(|| Arc::new(NoOpProgress));
    progress.set_length(files.len() as u64);
    progress.set_message("Processing files".to_string());

    let mut tree = TreeNode::root();
    let mut records = Vec::new();
    let mut metrics = BTreeMap::new();
    let mut included_paths = Vec::new();
    let mut ignored_count = 0;
    let mut binary_count = 0;

    for (idx, file) in files.iter().enumerate() {
        progress.set_position(idx as u64 + 1);

        if ignore_set.matches(&file.relative_path) {
            debug!("Ignoring '{}'", file.relative_path);
            ignored_count += 1;
            continue;
        }

        tree.insert_path(&file.relative_path);
        let (record, file_metrics) = entry_processor::process_file(file, config);
        if record.is_binary() {
            binary_count += 1;
        }
        if let Some(file_metrics) = file_metrics {
            metrics.insert(file.relative_path.clone(), file_metrics);
        }
        included_paths.push(file.relative_path.clone());
        records.push(record);
    }

    let artifact = render_artifact(&records, &metrics, config.output_format)?;
    progress.finish_with_message(format!("Processed {} files", files.len()));

    let result = AggregationResult {
        artifact,
        included_count: records.len(),
        ignored_count,
        binary_count,
        total_files: files.len(),
        included_paths,
        tree,
        metrics,
    };
    info!(
        "Aggregated '{}': {} files, {} included, {} ignored, {} binary",
        root.display(),
        result.total_files,
        result.included_count,
        result.ignored_count,
        result.binary_count
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingProgress {
        length: Mutex<u64>,
        position: Mutex<u64>,
        finished: Mutex<Option<String>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn set_length(&self, len: u64) {
            *self.length.lock().unwrap() = len;
        }
        fn set_position(&self, pos: u64) {
            *self.position.lock().unwrap() = pos;
        }
        fn set_message(&self, _msg: String) {}
        fn finish(&self) {}
        fn finish_with_message(&self, msg: String) {
            *self.finished.lock().unwrap() = Some(msg);
        }
    }

    #[test]
    fn test_counters_add_up() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("node_modules/pkg"))?;
        fs::write(dir.path().join("node_modules/pkg/index.js"), "x")?;
        fs::write(dir.path().join("app.js"), "let a = 1;")?;
        fs::write(dir.path().join("img.png"), [0x89, b'P', b'N', b'G', 0x00])?;

        let result = aggregate(&Config::new(dir.path()))?;
        assert_eq!(result.total_files, 3);
        assert_eq!(result.ignored_count, 1);
        assert_eq!(result.included_count, 2);
        assert_eq!(result.binary_count, 1);
        assert_eq!(result.included_count + result.ignored_count, result.total_files);
        assert_eq!(result.tree.file_count(), result.included_count);
        assert!(!result.artifact.contains("node_modules"));
        Ok(())
    }

    #[test]
    fn test_plain_directory_defaults_keep_their_contents() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("build"))?;
        fs::write(dir.path().join("build/gen.rs"), "fn generated() {}")?;

        let result = aggregate(&Config::new(dir.path()))?;
        assert_eq!(result.included_count, 1);
        assert_eq!(result.ignored_count, 0);
        assert_eq!(result.included_paths, ["build/gen.rs"]);
        Ok(())
    }

    #[test]
    fn test_without_default_ignores_everything_is_included() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("node_modules"))?;
        fs::write(dir.path().join("node_modules/dep.js"), "x")?;

        let mut config = Config::new(dir.path());
        config.use_default_ignores = false;
        let result = aggregate(&config)?;
        assert_eq!(result.ignored_count, 0);
        assert_eq!(result.included_paths, ["node_modules/dep.js"]);
        Ok(())
    }

    #[test]
    fn test_custom_patterns_apply() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("keep.rs"), "fn k() {}")?;
        fs::write(dir.path().join("drop.tmp"), "tmp")?;

        let mut config = Config::new(dir.path());
        config.custom_patterns = vec!["*.tmp".to_string()];
        let result = aggregate(&config)?;
        assert_eq!(result.included_paths, ["keep.rs"]);
        assert_eq!(result.ignored_count, 1);
        Ok(())
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempdir().unwrap();
        let result = aggregate(&Config::new(dir.path().join("gone")));
        assert!(matches!(result, Err(Error::Walk(_))));
    }

    #[test]
    fn test_file_root_fails() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("file.txt");
        fs::write(&file, "x")?;
        let result = aggregate(&Config::new(&file));
        assert!(matches!(result, Err(Error::Walk(msg)) if msg.contains("not a directory")));
        Ok(())
    }

    #[test]
    fn test_aggregate_is_idempotent() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("src"))?;
        fs::write(dir.path().join("src/lib.rs"), "// lib\npub fn f() {}\n")?;
        fs::write(dir.path().join("README.md"), "# Title\n")?;

        let mut config = Config::new(dir.path());
        config.output_format = OutputFormat::JsonLines;
        let first = aggregate(&config)?;
        let second = aggregate(&config)?;
        assert_eq!(first.artifact, second.artifact);
        assert_eq!(first.included_paths, second.included_paths);
        assert_eq!(first.tree, second.tree);
        assert_eq!(first.metrics, second.metrics);
        Ok(())
    }

    #[test]
    fn test_progress_is_reported() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "a")?;
        fs::write(dir.path().join("b.txt"), "b")?;

        let progress = Arc::new(RecordingProgress::default());
        aggregate_with_progress(&Config::new(dir.path()), Some(progress.clone()))?;
        assert_eq!(*progress.length.lock().unwrap(), 2);
        assert_eq!(*progress.position.lock().unwrap(), 2);
        assert_eq!(
            progress.finished.lock().unwrap().as_deref(),
            Some("Processed 2 files")
        );
        Ok(())
    }
}
