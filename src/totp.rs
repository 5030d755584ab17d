// TOTP https://datatracker.ietf.org/doc/html/rfc6238

// time-based moving factor: counter = timestamp / time_step, then the
// same pipeline as HOTP

use std::num::NonZeroU64;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::algorithm::Algorithm;
use crate::error::OtpError;
use crate::otp::{self, DEFAULT_DIGITS};

pub const DEFAULT_TIME_STEP: NonZeroU64 = match NonZeroU64::new(30) {
    Some(step) => step,
    None => unreachable!(),
};

/// Construction options for [`Totp`]. Immutable once the generator is
/// built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TotpOptions {
    pub digits: u32,
    pub algorithm: Algorithm,
    pub time_step: NonZeroU64,
}

impl Default for TotpOptions {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            algorithm: Algorithm::Sha1,
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl TotpOptions {
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_time_step(mut self, time_step: NonZeroU64) -> Self {
        self.time_step = time_step;
        self
    }
}

/// Time-based one-time password generator (RFC 6238).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totp {
    options: TotpOptions,
}

impl Default for Totp {
    fn default() -> Self {
        Self::new(TotpOptions::default())
    }
}

impl Totp {
    pub fn new(options: TotpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TotpOptions {
        &self.options
    }

    /// Generates the code for the given secret and Unix timestamp in
    /// seconds.
    ///
    /// The moving factor is `timestamp / time_step` in truncating integer
    /// division, so every timestamp within one step window yields the same
    /// code. Pre-epoch timestamps are rejected with
    /// [`OtpError::TimestampBeforeEpoch`].
    pub fn generate(&self, secret: &[u8], timestamp: i64) -> Result<String, OtpError> {
        let counter = self.moving_factor(timestamp)?;
        otp::generate_code(secret, counter, self.options.digits, self.options.algorithm)
    }

    /// Generates the code for the current system time.
    pub fn generate_current(&self, secret: &[u8]) -> Result<String, OtpError> {
        self.generate(secret, unix_now())
    }

    /// Seconds until the step window containing `timestamp` ends.
    pub fn remaining_seconds(&self, timestamp: i64) -> Result<u64, OtpError> {
        if timestamp < 0 {
            return Err(OtpError::TimestampBeforeEpoch(timestamp));
        }
        let step = self.options.time_step;
        Ok(step.get() - (timestamp as u64 % step))
    }

    fn moving_factor(&self, timestamp: i64) -> Result<u64, OtpError> {
        if timestamp < 0 {
            return Err(OtpError::TimestampBeforeEpoch(timestamp));
        }
        Ok(timestamp as u64 / self.options.time_step)
    }
}

fn unix_now() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        // clock set before 1970: surface as a negative timestamp so the
        // generation path rejects it with the typed error
        Err(err) => -(err.duration().as_secs() as i64),
    }
}
