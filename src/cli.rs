// src/cli.rs

use crate::config::OutputFormat;
use crate::constants::DEFAULT_IGNORE_FILE_NAME;
#[cfg(feature = "inference")]
use crate::{constants::DEFAULT_SYSTEM_PROMPT, inference::models::DEFAULT_MODEL};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Aggregates a source repository into a single digest for LLM context windows.
///
/// aidigest walks a directory (or a freshly cloned git repository), skips
/// files matched by the built-in, repository and custom ignore patterns, and
/// writes every remaining file into one Markdown or JSON Lines artifact along
/// with a directory tree and per-file line and comment metrics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate a directory or git repository into a digest file.
    Digest(DigestArgs),

    #[cfg(feature = "inference")]
    /// Ask a hosted model a question about a previously written digest.
    Ask(AskArgs),

    /// List the hosted models and their rate limits.
    Models,
}

#[derive(Args, Debug, Clone)]
pub struct DigestArgs {
    /// Local directory or git repository URL to aggregate.
    #[arg(default_value = ".")]
    pub source: String,

    // --- Output Options ---
    /// Artifact format: "markdown" (md) or "jsonl".
    #[arg(long, value_name = "FORMAT", default_value = "markdown")]
    pub format: OutputFormat,

    /// Write the artifact to this file instead of data/codebase.<ext>.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the artifact to stdout instead of a file.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "output")]
    pub stdout: bool,

    // --- Filtering Options ---
    /// Do not apply the built-in ignore list (node_modules, .git, lockfiles, ...).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_default_ignores: bool,

    /// Name of the repository ignore file looked up at the source root.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_IGNORE_FILE_NAME)]
    pub ignore_file: String,

    /// Extra glob patterns to ignore (repeatable).
    #[arg(short = 'i', long = "ignore", value_name = "GLOB", num_args = 1..)]
    pub ignore: Vec<String>,

    /// Read extra ignore patterns from a file, one per line.
    #[arg(long, value_name = "FILE")]
    pub ignore_list: Option<PathBuf>,

    // --- Content Processing Options ---
    /// Keep whitespace as-is instead of collapsing it in non-whitespace-significant files.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub keep_whitespace: bool,

    /// Count metrics on the decoded source rather than the artifact content.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub metrics_from_source: bool,

    // --- Report Options ---
    /// Print the repository structure as JSON to stderr.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub tree: bool,

    /// Print per-file line and comment metrics to stderr.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub metrics: bool,

    // --- Git Options ---
    #[cfg(feature = "git")]
    /// For git URL sources, perform a shallow clone with a limited history depth.
    #[arg(long, value_name = "DEPTH")]
    pub git_depth: Option<u32>,
}

#[cfg(feature = "inference")]
#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Digest file to send as context.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: PathBuf,

    /// The question to ask about the digest.
    #[arg(short = 'q', long, value_name = "TEXT")]
    pub question: String,

    /// Model id (see `aidigest models`).
    #[arg(short = 'm', long, value_name = "ID", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// System prompt sent ahead of the question.
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_SYSTEM_PROMPT)]
    pub system_prompt: String,

    /// API key; defaults to GROQ_API_KEY from the environment or a .env file.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Alternate OpenAI-compatible API root.
    #[arg(long, value_name = "URL", hide = true)]
    pub base_url: Option<String>,
}
