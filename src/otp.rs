//! Shared generation pipeline used by both the HOTP and TOTP façades:
//! big-endian counter encoding, keyed hash, RFC 4226 dynamic truncation
//! and decimal formatting.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::algorithm::Algorithm;
use crate::error::OtpError;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

pub const MIN_DIGITS: u32 = 6;
pub const MAX_DIGITS: u32 = 8;
pub const DEFAULT_DIGITS: u32 = 6;

/// Computes one code from (secret, counter, digits, algorithm).
///
/// Digit bounds are checked before any hashing work so an invalid request
/// never touches the key material.
pub fn generate_code(
    secret: &[u8],
    counter: u64,
    digits: u32,
    algorithm: Algorithm,
) -> Result<String, OtpError> {
    check_digits(digits)?;
    let mut hmac = compute_hmac(secret, &encode_counter(counter), algorithm);
    let truncated = dynamic_truncation(&hmac);
    hmac.zeroize();
    Ok(format_code(truncated, digits))
}

pub fn check_digits(digits: u32) -> Result<(), OtpError> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return Err(OtpError::OutOfBounds { digits });
    }
    Ok(())
}

// 8-byte big-endian moving factor, per RFC 4226 section 5.2
fn encode_counter(counter: u64) -> [u8; 8] {
    counter.to_be_bytes()
}

// HMAC_SHA-1 -> 20 byte string, HMAC_SHA-256 -> 32 byte string
fn compute_hmac(secret: &[u8], message: &[u8], algorithm: Algorithm) -> Vec<u8> {
    match algorithm {
        Algorithm::Sha1 => {
            let mut mac = HmacSha1::new_from_slice(secret)
                .expect("HMAC accepts keys of any length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(secret)
                .expect("HMAC accepts keys of any length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
    }
}

// DT(String) // String = String[0]...String[n-1]
// Let OffsetBits be the low-order 4 bits of String[n-1]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
//
// Any digest of 20 bytes or more leaves room for offset 15 plus 4 bytes.
fn dynamic_truncation(hmac: &[u8]) -> u32 {
    let offset = (hmac[hmac.len() - 1] & 0xf) as usize;
    (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32 & 0xff) << 16
        | (hmac[offset + 2] as u32 & 0xff) << 8
        | (hmac[offset + 3] as u32 & 0xff)
}

// s to num mod 10^Digit, left-padded with zeros to the full width
fn format_code(value: u32, digits: u32) -> String {
    let code = value % 10u32.pow(digits);
    format!("{:0width$}", code, width = digits as usize)
}
