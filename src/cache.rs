// src/cache.rs

//! Content-addressed memoization of aggregation results.
//!
//! The cache key is a SHA-256 digest over every `Config` field plus the
//! relative path and bytes of each walked file, so any change to the options
//! or the directory contents yields a new key. Nothing is evicted; the cache
//! lives as long as its owner.

use crate::config::{Config, MetricsBasis};
use crate::core_types::AggregationResult;
use crate::discovery::{aggregate, collect_files};
use crate::errors::Result;
use log::debug;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Memoizes [`aggregate`] by configuration and directory contents.
///
/// # Examples
/// ```
/// use aidigest::cache::AggregationCache;
/// use aidigest::Config;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// std::fs::write(dir.path().join("a.py"), "print(1)\n")?;
///
/// let mut cache = AggregationCache::new();
/// let config = Config::new(dir.path());
/// let first = cache.get_or_aggregate(&config)?.artifact.clone();
/// let second = cache.get_or_aggregate(&config)?.artifact.clone();
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AggregationCache {
    entries: HashMap<String, AggregationResult>,
}

impl AggregationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for `config`, aggregating on a miss.
    ///
    /// Computing the key walks the directory and reads every file, so a hit
    /// saves classification and serialization but not the I/O.
    pub fn get_or_aggregate(&mut self, config: &Config) -> Result<&AggregationResult> {
        let key = cache_key(config)?;
        if self.entries.contains_key(&key) {
            debug!("Aggregation cache hit for {}", &key[..12]);
        } else {
            debug!("Aggregation cache miss for {}", &key[..12]);
            let result = aggregate(config)?;
            self.entries.insert(key.clone(), result);
        }
        // Present in either branch above.
        Ok(&self.entries[&key])
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hex SHA-256 over the configuration and the walked directory contents.
pub fn cache_key(config: &Config) -> Result<String> {
    let mut hasher = Sha256::new();
    hash_field(&mut hasher, config.root_dir.to_string_lossy().as_bytes());
    hash_field(&mut hasher, &[config.use_default_ignores as u8]);
    hash_field(&mut hasher, &[config.remove_whitespace as u8]);
    hash_field(&mut hasher, config.ignore_file_name.as_bytes());
    hash_field(&mut hasher, &(config.custom_patterns.len() as u64).to_le_bytes());
    for pattern in &config.custom_patterns {
        hash_field(&mut hasher, pattern.as_bytes());
    }
    hash_field(&mut hasher, config.output_format.as_str().as_bytes());
    let basis: &[u8] = match config.metrics_basis {
        MetricsBasis::Normalized => b"normalized",
        MetricsBasis::Source => b"source",
    };
    hash_field(&mut hasher, basis);

    if config.root_dir.is_dir() {
        for file in collect_files(&config.root_dir)? {
            hash_field(&mut hasher, file.relative_path.as_bytes());
            // Unreadable files become binary records in `aggregate`, so they
            // key on the error kind instead of failing the lookup.
            match std::fs::read(&file.absolute_path) {
                Ok(bytes) => {
                    hash_field(&mut hasher, b"content");
                    hash_field(&mut hasher, &bytes);
                }
                Err(e) => {
                    debug!("Keying unreadable '{}' by error: {}", file.relative_path, e);
                    hash_field(&mut hasher, b"unreadable");
                    hash_field(&mut hasher, format!("{:?}", e.kind()).as_bytes());
                }
            }
        }
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Length-prefixes each field so adjacent fields cannot run together.
fn hash_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_key_is_stable() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "hello")?;
        let config = Config::new(dir.path());
        assert_eq!(cache_key(&config)?, cache_key(&config)?);
        assert_eq!(cache_key(&config)?.len(), 64);
        Ok(())
    }

    #[test]
    fn test_key_changes_with_content() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "hello")?;
        let config = Config::new(dir.path());
        let before = cache_key(&config)?;
        fs::write(dir.path().join("a.txt"), "hello!")?;
        assert_ne!(before, cache_key(&config)?);
        Ok(())
    }

    #[test]
    fn test_key_changes_with_options() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "hello")?;
        let config = Config::new(dir.path());
        let mut jsonl = config.clone();
        jsonl.output_format = OutputFormat::JsonLines;
        let mut keep_ws = config.clone();
        keep_ws.remove_whitespace = false;
        let mut patterns = config.clone();
        patterns.custom_patterns = vec!["*.txt".to_string()];

        let base = cache_key(&config)?;
        assert_ne!(base, cache_key(&jsonl)?);
        assert_ne!(base, cache_key(&keep_ws)?);
        assert_ne!(base, cache_key(&patterns)?);
        Ok(())
    }

    #[test]
    fn test_pattern_boundaries_are_distinct() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let mut joined = Config::new(dir.path());
        joined.custom_patterns = vec!["ab".to_string()];
        let mut split = Config::new(dir.path());
        split.custom_patterns = vec!["a".to_string(), "b".to_string()];
        assert_ne!(cache_key(&joined)?, cache_key(&split)?);
        Ok(())
    }

    #[test]
    fn test_cache_hit_and_invalidation() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "one")?;
        let config = Config::new(dir.path());
        let mut cache = AggregationCache::new();
        assert!(cache.is_empty());

        let first = cache.get_or_aggregate(&config)?.artifact.clone();
        cache.get_or_aggregate(&config)?;
        assert_eq!(cache.len(), 1);

        fs::write(dir.path().join("a.txt"), "two")?;
        let second = cache.get_or_aggregate(&config)?.artifact.clone();
        assert_eq!(cache.len(), 2);
        assert_ne!(first, second);
        assert!(second.contains("two"));

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_unreadable_file_does_not_fail_lookup() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "readable")?;
        // Reading /proc/self/mem from offset 0 fails with EIO.
        std::os::unix::fs::symlink("/proc/self/mem", dir.path().join("mem.bin"))?;
        let config = Config::new(dir.path());

        let direct = aggregate(&config)?;
        assert!(direct.included_paths.contains(&"mem.bin".to_string()));

        let key = cache_key(&config)?;
        assert_eq!(key, cache_key(&config)?);

        let mut cache = AggregationCache::new();
        let cached = cache.get_or_aggregate(&config)?;
        assert_eq!(cached.included_paths, direct.included_paths);
        assert_eq!(cached.binary_count, direct.binary_count);
        Ok(())
    }

    #[test]
    fn test_missing_root_propagates_walk_error() {
        let mut cache = AggregationCache::new();
        let config = Config::new("/definitely/not/here/aidigest");
        assert!(matches!(
            cache.get_or_aggregate(&config),
            Err(crate::errors::Error::Walk(_))
        ));
        assert!(cache.is_empty());
    }
}
