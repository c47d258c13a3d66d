// src/inference/models.rs

//! The catalog of hosted models and their per-minute limits.

use std::fmt;

/// A hosted chat model and its published rate limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub requests_per_minute: u32,
    pub tokens_per_minute: u32,
}

impl fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} requests/min, {} tokens/min)",
            self.id, self.requests_per_minute, self.tokens_per_minute
        )
    }
}

/// Models offered by the `ask` command, first entry is the default.
pub const MODELS: &[ModelInfo] = &[
    ModelInfo { id: "llama3-70b-8192", requests_per_minute: 30, tokens_per_minute: 6000 },
    ModelInfo { id: "llama3-8b-8192", requests_per_minute: 30, tokens_per_minute: 30000 },
    ModelInfo { id: "llama3-groq-70b-8192-tool-use-preview", requests_per_minute: 30, tokens_per_minute: 15000 },
    ModelInfo { id: "llama3-groq-8b-8192-tool-use-preview", requests_per_minute: 30, tokens_per_minute: 15000 },
    ModelInfo { id: "llama-3.1-8b-instant", requests_per_minute: 30, tokens_per_minute: 131072 },
    ModelInfo { id: "llama-3.1-70b-versatile", requests_per_minute: 30, tokens_per_minute: 131072 },
];

/// The model used when none is specified.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Looks up a model by id.
///
/// # Examples
/// ```
/// use aidigest::inference::models::find_model;
///
/// assert_eq!(find_model("llama3-8b-8192").map(|m| m.tokens_per_minute), Some(30000));
/// assert!(find_model("gpt-2").is_none());
/// ```
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|model| model.id == id)
}
