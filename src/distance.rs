//! Hamming distance between difference hashes.

use crate::error::HashError;

/// Count the bit positions at which two hashes differ.
///
/// Fails with [`HashError::LengthMismatch`] when the slices differ in
/// length, which means the hashes were computed with different hash
/// lengths or one of them is corrupted.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<u32, HashError> {
    if a.len() != b.len() {
        return Err(HashError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum())
}

/// Hex-string form of [`hamming_distance`].
///
/// Both strings are decoded back to raw bytes (the encoding produced
/// by [`crate::hash_hex`]) before comparing. Fails with
/// [`HashError::InvalidHexEncoding`] on malformed input.
pub fn hamming_distance_hex(a: &str, b: &str) -> Result<u32, HashError> {
    let a = hex::decode(a)?;
    let b = hex::decode(b)?;
    hamming_distance(&a, &b)
}

/// Whether two hashes are at most `max_distance` differing bits apart.
///
/// Convenience predicate for near-duplicate threshold checks; the
/// caller picks the threshold for its own notion of "same image".
pub fn within_distance(a: &[u8], b: &[u8], max_distance: u32) -> Result<bool, HashError> {
    Ok(hamming_distance(a, b)? <= max_distance)
}
