//! Content hashing for rebuild gating, using blake3.
//!
//! The watcher hashes the whole content tree before and after a change
//! burst; editors that touch files without changing bytes (or save then
//! immediately revert) would otherwise trigger pointless rebuilds.

use jwalk::WalkDir;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// A hash representing "no content" (all zeros).
    #[inline]
    pub const fn empty() -> Self {
        Self([0; 32])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 32]
    }

    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 16 hex chars are enough for log lines
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Compute blake3 hash of file contents. Missing or unreadable files
/// hash to empty.
pub fn compute_file_hash(path: &Path) -> ContentHash {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return ContentHash::empty(),
    };

    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => return ContentHash::empty(),
        }
    }

    ContentHash::new(*hasher.finalize().as_bytes())
}

/// Compute hash of a directory's contents (recursive, sorted).
pub fn compute_dir_hash(path: &Path) -> ContentHash {
    if !path.is_dir() {
        return ContentHash::empty();
    }

    let mut hasher = blake3::Hasher::new();
    let mut files: Vec<_> = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect();
    files.sort();

    for file_path in files {
        let hash = compute_file_hash(&file_path);
        hasher.update(hash.as_bytes());
    }

    ContentHash::new(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_content_hash_display() {
        let hash = ContentHash::new([0xab; 32]);
        assert_eq!(format!("{}", hash), "abababababababab");
    }

    #[test]
    fn test_compute_file_hash() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.md");
        fs::write(&path, "# Binary Search").unwrap();

        let hash1 = compute_file_hash(&path);
        let hash2 = compute_file_hash(&path);
        assert_eq!(hash1, hash2);
        assert!(!hash1.is_empty());

        fs::write(&path, "# Two Pointers").unwrap();
        let hash3 = compute_file_hash(&path);
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_compute_file_hash_nonexistent() {
        let hash = compute_file_hash(Path::new("/nonexistent/index.md"));
        assert!(hash.is_empty());
    }

    #[test]
    fn test_compute_dir_hash_detects_changes() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("DSA")).unwrap();
        fs::write(dir.path().join("DSA/index.md"), "root").unwrap();

        let before = compute_dir_hash(dir.path());
        assert!(!before.is_empty());

        // Unchanged tree hashes identically
        assert_eq!(before, compute_dir_hash(dir.path()));

        fs::write(dir.path().join("DSA/index.md"), "root v2").unwrap();
        assert_ne!(before, compute_dir_hash(dir.path()));
    }

    #[test]
    fn test_compute_dir_hash_missing_dir() {
        assert!(compute_dir_hash(Path::new("/nonexistent/content")).is_empty());
    }
}
