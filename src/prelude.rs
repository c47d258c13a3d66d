//! The `aidigest` prelude for convenient library usage.
//!
//! Re-exports the types and functions most programs need to aggregate a
//! directory and query a model about the result.
//!
//! # Example
//!
//! ```
//! use aidigest::prelude::*;
//! # fn main() -> Result<()> {
//! let dir = tempfile::tempdir().map_err(|e| Error::Config(e.to_string()))?;
//! let config = ConfigBuilder::new().root_dir(dir.path()).build()?;
//! let mut cache = AggregationCache::new();
//! let result = cache.get_or_aggregate(&config)?;
//! assert_eq!(result.total_files, 0);
//! assert!(result.artifact.is_empty());
//! # Ok(())
//! # }
//! ```

pub use crate::cache::AggregationCache;
pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, MetricsBasis, OutputDestination, OutputFormat};
pub use crate::core_types::{AggregationResult, FileKind, FileRecord, Metrics};
pub use crate::discovery::{aggregate, aggregate_with_progress};
pub use crate::errors::{Error, Result, SourceError};
pub use crate::inference::{collect_answer, ChatRequest, ChunkStream, InferenceProvider};
pub use crate::output::{formatter_for, ArtifactFormatter};
pub use crate::processing::filters::{escape_fences, unescape_fences, ContentFilter};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::source::{fetch_source, FetchedSource, SourceProvider};
pub use crate::tree::TreeNode;

#[cfg(feature = "inference")]
pub use crate::inference::GroqClient;
