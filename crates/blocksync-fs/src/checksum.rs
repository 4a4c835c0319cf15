//! SHA-256 checksum utilities
//!
//! Reports carry the target's digest before and after a sync in the canonical
//! `sha256:<hex>` format.

use sha2::{Digest, Sha256};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of string content.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn compute_content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_checksum_has_prefix() {
        let checksum = compute_content_checksum("hello");
        assert!(checksum.starts_with("sha256:"));
        assert_eq!(checksum.len(), PREFIX.len() + 64);
    }

    #[test]
    fn content_checksum_of_empty_string() {
        assert_eq!(
            compute_content_checksum(""),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn different_content_different_checksum() {
        assert_ne!(
            compute_content_checksum("</Modal>"),
            compute_content_checksum("</Modal>\n")
        );
    }
}
