use std::fmt;
use std::str::FromStr;

use crate::error::OtpError;

/// Keyed-hash construction used for the HMAC step.
///
/// RFC 4226 prescribes HMAC-SHA1; RFC 6238 additionally allows SHA-256.
/// SHA1 stays the default for compatibility with existing provisioning
/// flows, even though it is a weak choice for general-purpose hashing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Sha1,
    Sha256,
}

impl Algorithm {
    /// HMAC digest length in bytes: 20 for SHA-1, 32 for SHA-256.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Sha1 => write!(f, "SHA1"),
            Algorithm::Sha256 => write!(f, "SHA256"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA256" => Ok(Algorithm::Sha256),
            _ => Err(OtpError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sha1() {
        assert_eq!(Algorithm::default(), Algorithm::Sha1);
    }

    #[test]
    fn digest_lengths_match_hash_output() {
        assert_eq!(Algorithm::Sha1.digest_len(), 20);
        assert_eq!(Algorithm::Sha256.digest_len(), 32);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("SHA1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!("sha256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "SHA512".parse::<Algorithm>(),
            Err(OtpError::UnsupportedAlgorithm("SHA512".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for algorithm in [Algorithm::Sha1, Algorithm::Sha256] {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }
}
