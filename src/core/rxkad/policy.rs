//! Selection of how the rxkad key is obtained from a Kerberos session key,
//! depending on its enctype. The table follows the compatibility matrix of
//! draft-kaduk-afs3-rxkad-k5-kdf-00 section 4.

use crate::core::etypes;
use std::fmt;

/// Minimum length of a key block fed directly to the KDF.
pub const MIN_KDF_KEY_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyPath {
    /// Single DES key usable as-is.
    Copy,
    /// Triple DES key whose parity bits must be discarded before the KDF.
    Unweave,
    /// Key fed directly into the KDF.
    DeriveDirect,
    Reject(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    Deprecated,
    Unsupported,
    KeyTooShort,
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Unweave => write!(f, "unweave+kdf"),
            Self::DeriveDirect => write!(f, "kdf"),
            Self::Reject(RejectReason::Deprecated) => write!(f, "deprecated"),
            Self::Reject(RejectReason::Unsupported) => {
                write!(f, "unsupported")
            }
            Self::Reject(RejectReason::KeyTooShort) => {
                write!(f, "key too short")
            }
        }
    }
}

/// Decide the path for a key block of the given enctype and length.
///
/// Structural length requirements of the copy and unweave paths are not
/// checked here, they are fatal errors raised when the path is applied.
pub fn classify(etype: i32, key_length: usize) -> KeyPath {
    match etype {
        etypes::NULL => KeyPath::Reject(RejectReason::Unsupported),
        etypes::DES_CBC_CRC | etypes::DES_CBC_MD4 | etypes::DES_CBC_MD5 => {
            KeyPath::Copy
        }
        etypes::DES_CBC_RAW => KeyPath::Reject(RejectReason::Deprecated),
        etypes::DES3_CBC_SHA => KeyPath::Unweave,
        etypes::DES3_CBC_RAW => KeyPath::Reject(RejectReason::Deprecated),
        etypes::DES3_CBC_SHA1_OLD => KeyPath::Unweave,
        etypes::DES_HMAC_SHA1 => KeyPath::Reject(RejectReason::Deprecated),
        etypes::DSA_SHA1_CMS
        | etypes::MD5_RSA_CMS
        | etypes::SHA1_RSA_CMS
        | etypes::RC2_CBC_ENV
        | etypes::RSA_ENV
        | etypes::RSA_ES_OAEP_ENV
        | etypes::DES3_CBC_ENV => KeyPath::Reject(RejectReason::Unsupported),
        etypes::DES3_CBC_SHA1 => KeyPath::Unweave,
        _ => {
            if key_length < MIN_KDF_KEY_SIZE {
                return KeyPath::Reject(RejectReason::KeyTooShort);
            }
            if etype < 0 {
                return KeyPath::Reject(RejectReason::Unsupported);
            }
            KeyPath::DeriveDirect
        }
    }
}
