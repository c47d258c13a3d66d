// src/processing/encoding.rs

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Decodes raw file bytes to text, detecting the encoding heuristically.
///
/// Detection order: a byte-order mark wins; otherwise valid UTF-8 is taken
/// as-is; otherwise `chardetng` guesses a legacy encoding. Malformed
/// sequences are replaced with U+FFFD instead of failing.
///
/// Returns the text and the encoding that was used.
///
/// # Examples
/// ```
/// use aidigest::processing::decode;
///
/// let (text, encoding) = decode("héllo".as_bytes());
/// assert_eq!(text, "héllo");
/// assert_eq!(encoding.name(), "UTF-8");
///
/// // A UTF-8 byte-order mark is stripped.
/// let (text, _) = decode(&[0xEF, 0xBB, 0xBF, b'h', b'i']);
/// assert_eq!(text, "hi");
/// ```
pub fn decode(raw: &[u8]) -> (String, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(raw) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&raw[bom_len..]);
        log_replacements(encoding, had_errors);
        return (text.into_owned(), encoding);
    }

    if let Ok(text) = std::str::from_utf8(raw) {
        return (text.to_string(), UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    let encoding = detector.guess(None, true);
    let (text, had_errors) = encoding.decode_without_bom_handling(raw);
    log::trace!("Detected encoding {} for non-UTF-8 content", encoding.name());
    log_replacements(encoding, had_errors);
    (text.into_owned(), encoding)
}

fn log_replacements(encoding: &'static Encoding, had_errors: bool) {
    if had_errors {
        log::debug!(
            "Replaced malformed {} sequences while decoding",
            encoding.name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_utf8() {
        let (text, encoding) = decode(b"plain ascii");
        assert_eq!(text, "plain ascii");
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn test_utf16le_bom() {
        // "hi" in UTF-16LE with BOM.
        let (text, encoding) = decode(&[0xFF, 0xFE, b'h', 0x00, b'i', 0x00]);
        assert_eq!(text, "hi");
        assert_eq!(encoding.name(), "UTF-16LE");
    }

    #[test]
    fn test_latin1_like_content_is_decoded() {
        // "café" in windows-1252 / ISO-8859-1.
        let (text, encoding) = decode(&[b'c', b'a', b'f', 0xE9]);
        assert_ne!(encoding, UTF_8);
        assert!(text.starts_with("caf"));
        assert_eq!(text.chars().count(), 4);
        assert!(!text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_input() {
        let (text, encoding) = decode(b"");
        assert_eq!(text, "");
        assert_eq!(encoding, UTF_8);
    }
}
