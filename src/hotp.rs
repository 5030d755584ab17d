// HOTP https://datatracker.ietf.org/doc/html/rfc4226

use crate::algorithm::Algorithm;
use crate::error::OtpError;
use crate::otp::{self, DEFAULT_DIGITS};

/// Counter-based one-time password generator (RFC 4226).
///
/// Holds only the requested code length; the counter is a caller-owned
/// moving factor that must be advanced externally after each accepted
/// code. The algorithm is fixed at HMAC-SHA1, as the RFC prescribes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hotp {
    digits: u32,
}

impl Default for Hotp {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
        }
    }
}

impl Hotp {
    /// Creates a generator producing codes of `digits` length.
    ///
    /// The length is validated on generation, not here, so construction
    /// never fails.
    pub fn new(digits: u32) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Generates the code for the given secret and counter value.
    ///
    /// The secret is used as raw HMAC key material; it is neither copied
    /// nor mutated. Returns [`OtpError::OutOfBounds`] when the configured
    /// digit count is outside [6, 8].
    pub fn generate(&self, secret: &[u8], counter: u64) -> Result<String, OtpError> {
        otp::generate_code(secret, counter, self.digits, Algorithm::Sha1)
    }
}
