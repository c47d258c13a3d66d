// src/config/builder.rs

use super::{
    parsing::{normalize_patterns, read_pattern_list},
    validation::validate_builder_options,
    Config, MetricsBasis, OutputFormat,
};
use crate::cli::DigestArgs;
use crate::errors::Result;
use std::path::PathBuf;

/// A builder for creating a [`Config`] programmatically.
///
/// Unset options fall back to the defaults of [`Config::new`].
///
/// # Examples
/// ```
/// use aidigest::config::{ConfigBuilder, OutputFormat};
///
/// # fn main() -> aidigest::errors::Result<()> {
/// let config = ConfigBuilder::new()
///     .root_dir("path/to/repo")
///     .output_format(OutputFormat::JsonLines)
///     .custom_patterns(vec!["*.log".to_string()])
///     .remove_whitespace(false)
///     .build()?;
///
/// assert_eq!(config.output_format, OutputFormat::JsonLines);
/// assert_eq!(config.custom_patterns, vec!["*.log"]);
/// assert!(!config.remove_whitespace);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) root_dir: Option<PathBuf>,
    pub(super) use_default_ignores: Option<bool>,
    pub(super) remove_whitespace: Option<bool>,
    pub(super) ignore_file_name: Option<String>,
    pub(super) custom_patterns: Vec<String>,
    pub(super) pattern_list_files: Vec<PathBuf>,
    pub(super) output_format: Option<OutputFormat>,
    pub(super) metrics_basis: Option<MetricsBasis>,
}

impl ConfigBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from the `digest` subcommand arguments.
    ///
    /// The root directory is not taken from the arguments: the source may be
    /// a remote URL, so the caller sets it once the source is available.
    pub fn from_cli(args: &DigestArgs) -> Self {
        let mut builder = Self::new()
            .use_default_ignores(!args.no_default_ignores)
            .remove_whitespace(!args.keep_whitespace)
            .ignore_file_name(args.ignore_file.clone())
            .custom_patterns(args.ignore.clone())
            .output_format(args.format)
            .metrics_basis(if args.metrics_from_source {
                MetricsBasis::Source
            } else {
                MetricsBasis::Normalized
            });
        if let Some(list) = &args.ignore_list {
            builder = builder.pattern_list_file(list.clone());
        }
        builder
    }

    /// The directory to aggregate.
    pub fn root_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.root_dir = Some(path.into());
        self
    }

    pub fn use_default_ignores(mut self, enabled: bool) -> Self {
        self.use_default_ignores = Some(enabled);
        self
    }

    pub fn remove_whitespace(mut self, enabled: bool) -> Self {
        self.remove_whitespace = Some(enabled);
        self
    }

    pub fn ignore_file_name<S: Into<String>>(mut self, name: S) -> Self {
        self.ignore_file_name = Some(name.into());
        self
    }

    /// Appends caller-supplied glob patterns.
    pub fn custom_patterns(mut self, patterns: Vec<String>) -> Self {
        self.custom_patterns.extend(patterns);
        self
    }

    /// Appends the patterns of a list file, read when [`build`](Self::build) runs.
    pub fn pattern_list_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.pattern_list_files.push(path.into());
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn metrics_basis(mut self, basis: MetricsBasis) -> Self {
        self.metrics_basis = Some(basis);
        self
    }

    /// Validates the options and produces a [`Config`].
    ///
    /// # Errors
    /// Returns `Error::Config` for a missing root or an invalid ignore file
    /// name, and `Error::Io` when a pattern list file cannot be read.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let mut custom_patterns = self.custom_patterns;
        for list in &self.pattern_list_files {
            let patterns = read_pattern_list(list)?;
            log::debug!(
                "Loaded {} patterns from list file '{}'",
                patterns.len(),
                list.display()
            );
            custom_patterns.extend(patterns);
        }

        let mut config = Config::new(self.root_dir.unwrap_or_default());
        if let Some(enabled) = self.use_default_ignores {
            config.use_default_ignores = enabled;
        }
        if let Some(enabled) = self.remove_whitespace {
            config.remove_whitespace = enabled;
        }
        if let Some(name) = self.ignore_file_name {
            config.ignore_file_name = name;
        }
        if let Some(format) = self.output_format {
            config.output_format = format;
        }
        if let Some(basis) = self.metrics_basis {
            config.metrics_basis = basis;
        }
        config.custom_patterns = normalize_patterns(custom_patterns);
        Ok(config)
    }
}
