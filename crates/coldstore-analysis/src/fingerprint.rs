//! Deterministic query fingerprinting.
//!
//! A fingerprint is the first 16 hex characters of a blake3 digest of
//! the normalized query text: a 64-bit grouping key, not a security
//! boundary. Collision probability is negligible at the 10^5–10^7
//! distinct-shape scale this system targets.

use coldstore_core::types::QueryFingerprint;

use crate::normalize::normalize_query;

/// Fingerprint raw query text, normalizing it first.
///
/// ```
/// use coldstore_analysis::fingerprint_query;
/// let a = fingerprint_query("SELECT * FROM users WHERE id = 123");
/// let b = fingerprint_query("SELECT * FROM users WHERE id = 456");
/// assert_eq!(a, b);
/// ```
pub fn fingerprint_query(raw_text: &str) -> QueryFingerprint {
    fingerprint_normalized(&normalize_query(raw_text))
}

/// Fingerprint already-normalized text.
///
/// Same normalized text always yields the same fingerprint.
pub fn fingerprint_normalized(normalized: &str) -> QueryFingerprint {
    let digest = blake3::hash(normalized.as_bytes());
    let hex = digest.to_hex();
    QueryFingerprint::new(&hex.as_str()[..QueryFingerprint::LEN])
}
