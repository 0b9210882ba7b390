//! Fast non-cryptographic hashing.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Stable fingerprint of a byte slice, used to gate config reloads.
pub fn fingerprint(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    bytes.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(fingerprint(b"bezel"), fingerprint(b"bezel"));
        assert_ne!(fingerprint(b"bezel"), fingerprint(b"bezel "));
    }
}
