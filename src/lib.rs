//! One-time numeric passcode generation from a shared secret.
//!
//! Implements the counter-based HOTP algorithm from
//! [RFC 4226](https://datatracker.ietf.org/doc/html/rfc4226) and the
//! time-based TOTP variant from
//! [RFC 6238](https://datatracker.ietf.org/doc/html/rfc6238).
//!
//! The crate is a pure function library: every code is computed from
//! (secret, counter, digits, algorithm) with no shared state, no I/O and
//! no persistence, so the generators are safe to share across threads.
//! Secrets are treated as raw HMAC key material; base32 decoding, secret
//! storage, counter synchronization and code verification are left to the
//! caller.
//!
//! ```
//! use otpgen::{Hotp, Totp, TotpOptions};
//!
//! let hotp = Hotp::default();
//! assert_eq!(hotp.generate(b"secretkey", 0).unwrap(), "049381");
//!
//! let totp = Totp::new(TotpOptions::default());
//! assert_eq!(totp.generate(b"secretkey", 1587915766).unwrap(), "623043");
//! ```

mod otp;

pub mod algorithm;
pub mod error;
pub mod hotp;
pub mod totp;

pub use algorithm::Algorithm;
pub use error::OtpError;
pub use hotp::Hotp;
pub use totp::{Totp, TotpOptions};
