// src/classify/category.rs

use super::lowercase_extension;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Human-readable category of a binary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Image,
    SvgImage,
    WebAssembly,
    Pdf,
    WordDocument,
    ExcelSpreadsheet,
    PowerPointPresentation,
    CompressedArchive,
    Executable,
    DynamicLinkLibrary,
    SharedObject,
    DynamicLibrary,
    /// Fallback for extensions outside the table.
    Binary,
}

impl FileCategory {
    /// Every variant, in declaration order.
    pub const ALL: [FileCategory; 13] = [
        FileCategory::Image,
        FileCategory::SvgImage,
        FileCategory::WebAssembly,
        FileCategory::Pdf,
        FileCategory::WordDocument,
        FileCategory::ExcelSpreadsheet,
        FileCategory::PowerPointPresentation,
        FileCategory::CompressedArchive,
        FileCategory::Executable,
        FileCategory::DynamicLinkLibrary,
        FileCategory::SharedObject,
        FileCategory::DynamicLibrary,
        FileCategory::Binary,
    ];

    /// The label used in artifacts.
    pub fn label(self) -> &'static str {
        match self {
            FileCategory::Image => "Image",
            FileCategory::SvgImage => "SVG Image",
            FileCategory::WebAssembly => "WebAssembly",
            FileCategory::Pdf => "PDF",
            FileCategory::WordDocument => "Word Document",
            FileCategory::ExcelSpreadsheet => "Excel Spreadsheet",
            FileCategory::PowerPointPresentation => "PowerPoint Presentation",
            FileCategory::CompressedArchive => "Compressed Archive",
            FileCategory::Executable => "Executable",
            FileCategory::DynamicLinkLibrary => "Dynamic-link Library",
            FileCategory::SharedObject => "Shared Object",
            FileCategory::DynamicLibrary => "Dynamic Library",
            FileCategory::Binary => "Binary",
        }
    }
}

impl Serialize for FileCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const CATEGORY_TABLE: &[(&str, FileCategory)] = &[
    // --- Images ---
    ("jpg", FileCategory::Image),
    ("jpeg", FileCategory::Image),
    ("png", FileCategory::Image),
    ("gif", FileCategory::Image),
    ("bmp", FileCategory::Image),
    ("webp", FileCategory::Image),
    ("svg", FileCategory::SvgImage),
    // --- Documents ---
    ("wasm", FileCategory::WebAssembly),
    ("pdf", FileCategory::Pdf),
    ("doc", FileCategory::WordDocument),
    ("docx", FileCategory::WordDocument),
    ("xls", FileCategory::ExcelSpreadsheet),
    ("xlsx", FileCategory::ExcelSpreadsheet),
    ("ppt", FileCategory::PowerPointPresentation),
    ("pptx", FileCategory::PowerPointPresentation),
    // --- Archives ---
    ("zip", FileCategory::CompressedArchive),
    ("rar", FileCategory::CompressedArchive),
    ("7z", FileCategory::CompressedArchive),
    // --- Executables and libraries ---
    ("exe", FileCategory::Executable),
    ("dll", FileCategory::DynamicLinkLibrary),
    ("so", FileCategory::SharedObject),
    ("dylib", FileCategory::DynamicLibrary),
];

/// Maps a path's extension (case-insensitive) to its binary category.
///
/// # Examples
/// ```
/// use aidigest::classify::{category, FileCategory};
/// use std::path::Path;
///
/// assert_eq!(category(Path::new("assets/logo.PNG")), FileCategory::Image);
/// assert_eq!(category(Path::new("icon.svg")).label(), "SVG Image");
/// assert_eq!(category(Path::new("data.bin")), FileCategory::Binary);
/// ```
pub fn category(path: &Path) -> FileCategory {
    lowercase_extension(path)
        .and_then(|ext| {
            CATEGORY_TABLE
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, category)| *category)
        })
        .unwrap_or(FileCategory::Binary)
}

/// Whether a file must skip the text branch regardless of its bytes.
///
/// Files whose extension has a declared category (SVG being the case that
/// matters, since its bytes are plain text) are always described, never
/// inlined.
pub fn is_forced_binary(path: &Path) -> bool {
    category(path) != FileCategory::Binary
}
