use std::fs;
use std::path::Path;

/// Rewrites `\r\n` and bare `\r` as `\n`.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Writes `content` byte-for-byte, truncating any existing file.
///
/// No trailing newline is appended: the deck ends on its `$END` line.
pub fn write_text_document(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::{normalize_line_endings, write_text_document};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn normalize_line_endings_uses_canonical_breaks() {
        let normalized = normalize_line_endings("alpha\r\nbeta\rgamma\n");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn repeated_writes_overwrite_with_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("deck.inp");

        fs::write(&path, "stale content that is longer than the new one\n")
            .expect("seed write should succeed");
        write_text_document(&path, "line 1\n$END").expect("first write should succeed");
        let first = fs::read(&path).expect("document should be readable");

        write_text_document(&path, "line 1\n$END").expect("second write should succeed");
        let second = fs::read(&path).expect("document should be readable");

        assert_eq!(first, second);
        assert_eq!(second, b"line 1\n$END");
    }
}
