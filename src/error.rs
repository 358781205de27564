use thiserror::Error;

/// Errors produced when computing or comparing hashes.
///
/// Every variant signals a caller contract violation; none are
/// transient, and no partial result accompanies an error.
#[derive(Error, Debug)]
pub enum HashError {
    /// The requested hash length was zero.
    #[error("hash length must be at least 1")]
    InvalidHashLength,
    /// The compared hashes encode different bit counts, usually because
    /// they were computed with different hash lengths.
    #[error("hash lengths differ: {left} vs {right} bytes")]
    LengthMismatch { left: usize, right: usize },
    /// A hex-encoded hash could not be decoded back to bytes.
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(#[from] hex::FromHexError),
}
