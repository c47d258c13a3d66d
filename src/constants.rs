// src/constants.rs

/// Repository ignore file looked up at the traversal root.
pub const DEFAULT_IGNORE_FILE_NAME: &str = ".aidigestignore";

/// Directory the CLI writes the artifact into when no output path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// File stem of the default artifact; the extension follows the format.
pub const DEFAULT_OUTPUT_STEM: &str = "codebase";

/// System prompt sent with every question unless overridden.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful and informative AI assistant.";

/// Environment variable holding the inference API key.
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

/// Characters per estimated token.
pub const CHARS_PER_TOKEN: usize = 4;
