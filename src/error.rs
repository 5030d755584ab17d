use thiserror::Error;

/// Errors surfaced by code generation.
///
/// All variants are deterministic input-validation failures; nothing here
/// is transient, so retrying a failed call with the same inputs can never
/// succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// Requested code length is outside the RFC 4226 range of [6, 8].
    #[error("code length must be between 6 and 8 digits, got {digits}")]
    OutOfBounds { digits: u32 },

    /// Algorithm selector was not recognized.
    #[error("unsupported algorithm: {0}, expected one of: SHA1, SHA256")]
    UnsupportedAlgorithm(String),

    /// Pre-epoch timestamps have no defined counter value.
    #[error("timestamp {0} predates the Unix epoch")]
    TimestampBeforeEpoch(i64),
}
