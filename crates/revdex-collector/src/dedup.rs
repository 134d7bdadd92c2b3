//! Exact-text deduplication via content fingerprints.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

/// Tracks review texts seen so far by a stable content fingerprint.
///
/// Fingerprints are the first 8 bytes of SHA-256 over the text, so the set
/// stays small regardless of review length. Exact equality only: two
/// reviews differing by a single character are both kept.
#[derive(Debug, Default)]
pub(crate) struct SeenTexts {
    fingerprints: HashSet<u64>,
}

impl SeenTexts {
    /// Record `text`; returns `true` if it had not been seen before.
    pub(crate) fn insert(&mut self, text: &str) -> bool {
        self.fingerprints.insert(text_fingerprint(text))
    }
}

/// Derive a stable u64 fingerprint from review text.
///
/// Takes the first 8 bytes of SHA-256(text) as a big-endian u64. The same
/// text always produces the same fingerprint.
pub(crate) fn text_fingerprint(text: &str) -> u64 {
    let hash = Sha256::digest(text.as_bytes());
    let bytes: [u8; 8] = hash[..8].try_into().expect("SHA256 is at least 8 bytes");
    u64::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable() {
        let text = "Great monitor, no dead pixels.";
        assert_eq!(text_fingerprint(text), text_fingerprint(text));
    }

    #[test]
    fn different_texts_produce_different_fingerprints() {
        assert_ne!(
            text_fingerprint("Great monitor"),
            text_fingerprint("Terrible monitor")
        );
    }

    #[test]
    fn insert_reports_first_occurrence_only() {
        let mut seen = SeenTexts::default();
        assert!(seen.insert("a review"));
        assert!(!seen.insert("a review"));
        assert!(seen.insert("another review"));
    }
}
