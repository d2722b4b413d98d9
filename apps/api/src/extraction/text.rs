use std::path::Path;

use anyhow::{Context, Result};

/// Reads a plain-text file as UTF-8, dropping any byte sequence that does not decode.
pub(super) fn extract_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    Ok(decode_dropping_invalid(&bytes))
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_is_verbatim() {
        assert_eq!(decode_dropping_invalid("Zoë — Go, Rust".as_bytes()), "Zoë — Go, Rust");
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"Go \xff\xfeengineer\xc3";
        assert_eq!(decode_dropping_invalid(bytes), "Go engineer");
    }

    #[test]
    fn test_empty_file_is_empty_text() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(extract_text(file.path()).unwrap(), "");
    }
}
