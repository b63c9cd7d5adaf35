//! BLAKE3 hashing for prompt comparison

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, SkillsetError};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let read_failed = |e: std::io::Error| SkillsetError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let file = File::open(path).map_err(read_failed)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(read_failed)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Whether two files have identical content
pub fn same_content(a: &Path, b: &Path) -> Result<bool> {
    Ok(hash_file(a)? == hash_file(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file_is_prefixed_and_stable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CLAUDE.md");
        std::fs::write(&path, "rules").unwrap();

        let first = hash_file(&path).unwrap();
        assert!(first.starts_with(HASH_PREFIX));
        assert_eq!(first, hash_file(&path).unwrap());
    }

    #[test]
    fn test_same_content() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.md");
        let b = temp.path().join("b.md");
        std::fs::write(&a, "x\ny\n").unwrap();
        std::fs::write(&b, "x\ny\n").unwrap();
        assert!(same_content(&a, &b).unwrap());

        std::fs::write(&b, "x\nz\n").unwrap();
        assert!(!same_content(&a, &b).unwrap());
    }

    #[test]
    fn test_hash_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = hash_file(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, SkillsetError::FileReadFailed { .. }));
    }
}
