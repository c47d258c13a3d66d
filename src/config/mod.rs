//! Defines the `Config` struct and related types for one aggregation call.
//!
//! Every aggregation argument is carried explicitly in a `Config` value; no
//! process-wide session state exists. The CLI builds one through
//! [`ConfigBuilder::from_cli`], library users through [`ConfigBuilder::new`].

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod validation;

pub use parsing::read_pattern_list;

/// The serialization format of the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// `# path` headings followed by fenced code blocks.
    #[default]
    Markdown,
    /// One JSON object per line.
    JsonLines,
}

impl OutputFormat {
    /// File extension used for the default output file name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::JsonLines => "jsonl",
        }
    }

    /// Stable name used in cache keys and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::JsonLines => "jsonl",
        }
    }
}

/// Which text the metrics collector counts lines and comments on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricsBasis {
    /// The content as it appears in the artifact (after whitespace collapsing).
    #[default]
    Normalized,
    /// The decoded content before whitespace collapsing.
    Source,
}

/// Settings for a single aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The directory to walk. Paths in the artifact are relative to it.
    pub root_dir: PathBuf,
    /// Whether the built-in ignore list is part of the ignore set.
    pub use_default_ignores: bool,
    /// Collapse whitespace in files whose extension is not whitespace-significant.
    pub remove_whitespace: bool,
    /// Name of the repository ignore file, read from `root_dir`.
    pub ignore_file_name: String,
    /// Extra glob patterns supplied by the caller.
    pub custom_patterns: Vec<String>,
    /// Artifact serialization format.
    pub output_format: OutputFormat,
    /// Metrics counting basis.
    pub metrics_basis: MetricsBasis,
}

impl Config {
    /// Creates a `Config` for `root_dir` with every other option at its default.
    ///
    /// # Examples
    /// ```
    /// use aidigest::config::{Config, OutputFormat};
    ///
    /// let config = Config::new("some/dir");
    /// assert!(config.use_default_ignores);
    /// assert!(config.remove_whitespace);
    /// assert_eq!(config.ignore_file_name, ".aidigestignore");
    /// assert_eq!(config.output_format, OutputFormat::Markdown);
    /// ```
    pub fn new<P: Into<PathBuf>>(root_dir: P) -> Self {
        Self {
            root_dir: root_dir.into(),
            use_default_ignores: true,
            remove_whitespace: true,
            ignore_file_name: crate::constants::DEFAULT_IGNORE_FILE_NAME.to_string(),
            custom_patterns: Vec::new(),
            output_format: OutputFormat::default(),
            metrics_basis: MetricsBasis::default(),
        }
    }
}

/// Represents the destination for the generated artifact.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path, creating its parent directory.
    File(PathBuf),
}

impl OutputDestination {
    /// The default artifact location for `format`: `data/codebase.<ext>`.
    pub fn default_for(format: OutputFormat) -> Self {
        OutputDestination::File(
            PathBuf::from(crate::constants::DEFAULT_OUTPUT_DIR).join(format!(
                "{}.{}",
                crate::constants::DEFAULT_OUTPUT_STEM,
                format.extension()
            )),
        )
    }
}
