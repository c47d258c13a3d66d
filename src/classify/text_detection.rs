// src/classify/text_detection.rs

use std::{fs::File, io::Read, path::Path};

/// Number of leading bytes inspected by the text probe.
pub const TEXT_SAMPLE_SIZE: usize = 1024;

/// Control bytes that may appear in text: bell, backspace, tab, newline,
/// form-feed, carriage-return and escape.
const TEXT_CONTROL_BYTES: [u8; 7] = [0x07, 0x08, 0x09, 0x0A, 0x0C, 0x0D, 0x1B];

#[inline]
fn is_text_byte(byte: u8) -> bool {
    byte >= 0x20 || TEXT_CONTROL_BYTES.contains(&byte)
}

/// Checks whether a byte buffer looks like text.
///
/// Every byte must be one of the allowed control characters or lie in the
/// range `0x20..=0xFF`. Any other control byte (NUL included) marks the
/// buffer as binary. An empty buffer is text.
///
/// # Examples
/// ```
/// use aidigest::classify::is_text_buffer;
///
/// assert!(is_text_buffer(b"fn main() {}\n"));
/// assert!(is_text_buffer("caf\u{e9}".as_bytes()));
/// assert!(!is_text_buffer(b"binary\0data"));
/// assert!(!is_text_buffer(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]));
/// ```
pub fn is_text_buffer(buffer: &[u8]) -> bool {
    buffer.iter().all(|&b| is_text_byte(b))
}

/// Checks whether the file at `path` looks like text by probing its head.
///
/// Reads at most [`TEXT_SAMPLE_SIZE`] bytes. Any I/O failure (missing file,
/// permission denied, a directory) is treated as "not text" and never
/// propagated.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use aidigest::classify::is_text;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let text_file = temp.path().join("notes.txt");
/// fs::write(&text_file, "Hello, world!")?;
/// assert!(is_text(&text_file));
///
/// assert!(!is_text(&temp.path().join("missing.txt")));
/// # Ok(())
/// # }
/// ```
pub fn is_text(path: &Path) -> bool {
    match read_head(path) {
        Ok(head) => is_text_buffer(&head),
        Err(e) => {
            log::debug!(
                "Text probe could not read '{}', treating as binary: {}",
                path.display(),
                e
            );
            false
        }
    }
}

fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(TEXT_SAMPLE_SIZE);
    file.take(TEXT_SAMPLE_SIZE as u64).read_to_end(&mut head)?;
    Ok(head)
}
