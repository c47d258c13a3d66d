// src/classify/language.rs

use super::lowercase_extension;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Informational language label for text files.
///
/// The label never influences the text/binary decision; it only names the
/// file in JSON Lines records and selects the comment pattern for metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Html,
    Css,
    Java,
    Cpp,
    C,
    Go,
    Ruby,
    Php,
    Swift,
    Rust,
    Kotlin,
    Scala,
    ObjectiveC,
    Shell,
    Perl,
    Lua,
    R,
    VisualBasic,
    CSharp,
    Fortran,
    Sql,
    Markdown,
    Json,
    Xml,
    Yaml,
    Toml,
    /// No table entry for the extension.
    Unknown,
}

impl Language {
    /// The display label, e.g. `"C++"` or `"Objective-C"`.
    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Swift => "Swift",
            Language::Rust => "Rust",
            Language::Kotlin => "Kotlin",
            Language::Scala => "Scala",
            Language::ObjectiveC => "Objective-C",
            Language::Shell => "Shell",
            Language::Perl => "Perl",
            Language::Lua => "Lua",
            Language::R => "R",
            Language::VisualBasic => "Visual Basic",
            Language::CSharp => "C#",
            Language::Fortran => "Fortran",
            Language::Sql => "SQL",
            Language::Markdown => "Markdown",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Yaml => "YAML",
            Language::Toml => "TOML",
            Language::Unknown => "Unknown",
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const LANGUAGE_TABLE: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("js", Language::JavaScript),
    ("mjs", Language::JavaScript),
    ("cjs", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("tsx", Language::TypeScript),
    ("html", Language::Html),
    ("htm", Language::Html),
    ("css", Language::Css),
    ("java", Language::Java),
    ("cpp", Language::Cpp),
    ("cc", Language::Cpp),
    ("cxx", Language::Cpp),
    ("hpp", Language::Cpp),
    ("c", Language::C),
    ("h", Language::C),
    ("go", Language::Go),
    ("rb", Language::Ruby),
    ("php", Language::Php),
    ("swift", Language::Swift),
    ("rs", Language::Rust),
    ("kt", Language::Kotlin),
    ("kts", Language::Kotlin),
    ("scala", Language::Scala),
    ("m", Language::ObjectiveC),
    ("sh", Language::Shell),
    ("bash", Language::Shell),
    ("zsh", Language::Shell),
    ("pl", Language::Perl),
    ("lua", Language::Lua),
    ("r", Language::R),
    ("vb", Language::VisualBasic),
    ("cs", Language::CSharp),
    ("f", Language::Fortran),
    ("f90", Language::Fortran),
    ("sql", Language::Sql),
    ("md", Language::Markdown),
    ("json", Language::Json),
    ("xml", Language::Xml),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
    ("toml", Language::Toml),
];

/// Maps a path's extension (case-insensitive) to a language label.
///
/// # Examples
/// ```
/// use aidigest::classify::{language, Language};
/// use std::path::Path;
///
/// assert_eq!(language(Path::new("cmd/main.go")), Language::Go);
/// assert_eq!(language(Path::new("lib.cpp")).label(), "C++");
/// assert_eq!(language(Path::new("LICENSE")), Language::Unknown);
/// ```
pub fn language(path: &Path) -> Language {
    lowercase_extension(path)
        .and_then(|ext| {
            LANGUAGE_TABLE
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, language)| *language)
        })
        .unwrap_or(Language::Unknown)
}
