//! `aidigest` is a library and command-line tool that aggregates a source
//! repository into a single Markdown or JSON Lines digest, sized for the
//! context window of a large language model.
//!
//! One aggregation walks a directory once. Every file is counted, tested
//! against the ignore set (built-in defaults, the repository's
//! `.aidigestignore` and caller patterns), classified as text or binary,
//! decoded, normalized and measured. The result bundles the artifact with
//! file counters, the included paths, a nested directory tree and per-file
//! line/comment metrics.
//!
//! Around that core the crate offers a git [`source`] provider, an in-memory
//! [`cache`], and an [`inference`] client that streams a hosted model's answer
//! to a question about the digest.
//!
//! # Example: Library Usage
//!
//! ```
//! use aidigest::{aggregate, ConfigBuilder, OutputFormat};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempdir()?;
//! fs::write(dir.path().join("a.py"), "# say hi\nprint('hi')\n")?;
//! fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G'])?;
//!
//! let config = ConfigBuilder::new()
//!     .root_dir(dir.path())
//!     .output_format(OutputFormat::Markdown)
//!     .build()?;
//! let result = aggregate(&config)?;
//!
//! assert_eq!(result.included_paths, ["a.py", "logo.png"]);
//! assert_eq!(result.binary_count, 1);
//! assert!(result.artifact.starts_with("# a.py\n\n```py\n"));
//! assert!(result
//!     .artifact
//!     .contains("# logo.png\n\nThis is a binary file of type: Image"));
//! assert_eq!(result.metrics["a.py"].comment_lines, 1);
//! # Ok(())
//! # }
//! ```

// Make modules public if they contain public types used in the API
pub mod cache;
pub mod cancellation;
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod inference;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;
pub mod signal;
pub mod source;
pub mod tree;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, MetricsBasis, OutputDestination, OutputFormat};
pub use core_types::{AggregationResult, FileKind, FileRecord, Metrics};
pub use discovery::{aggregate, aggregate_with_progress};
pub use errors::{Error, Result};
pub use tree::TreeNode;
