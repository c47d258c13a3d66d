// src/filtering/defaults.rs

/// Built-in ignore patterns, applied unless default ignores are disabled.
///
/// Patterns are tested against the whole relative path only. A plain name
/// such as `yarn.lock` matches that file at the root; the `dir/*` entries
/// exclude everything below a top-level dependency or VCS directory.
pub const DEFAULT_IGNORES: &[&str] = &[
    // --- JavaScript / TypeScript ---
    "node_modules",
    "node_modules/*",
    "package-lock.json",
    "npm-debug.log",
    "yarn.lock",
    "yarn-error.log",
    "pnpm-lock.yaml",
    "bun.lockb",
    "deno.lock",

    // --- PHP ---
    "vendor",
    "composer.lock",

    // --- Python ---
    "__pycache__",
    "__pycache__/*",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    ".Python",
    "pip-log.txt",
    "pip-delete-this-directory.txt",
    ".venv",
    "venv",
    "ENV",
    "env",

    // --- Ruby ---
    "Gemfile.lock",
    ".bundle",

    // --- JVM ---
    "target",
    "*.class",
    ".gradle",
    "build",
    "pom.xml.tag",
    "pom.xml.releaseBackup",
    "pom.xml.versionsBackup",
    "pom.xml.next",

    // --- .NET ---
    "bin",
    "obj",
    "*.suo",
    "*.user",

    // --- Go / Rust ---
    "go.sum",
    "Cargo.lock",

    // --- Version control ---
    ".git",
    ".git/*",
    ".svn",
    ".svn/*",
    ".hg",
    ".hg/*",

    // --- OS metadata ---
    ".DS_Store",
    "Thumbs.db",

    // --- Secrets ---
    ".env",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    "*.env",
    "*.env.*",

    // --- Framework build output and caches ---
    ".svelte-kit",
    ".next",
    ".nuxt",
    ".vuepress",
    ".cache",
    "dist",
    "tmp",
    ".turbo",

    // --- Previous digests ---
    "codebase.md",
];
