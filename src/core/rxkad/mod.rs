//! Conversion of Kerberos 5 session keys into rxkad DES session keys.
//!
//! Kerberos-5 strong enctype support for rxkad:
//!   https://tools.ietf.org/html/draft-kaduk-afs3-rxkad-k5-kdf-00

mod kdf;
pub use kdf::key_derivation_function;

mod parity;
pub use parity::{des3_key_to_random, DES_BLOCK_SIZE};

mod policy;
pub use policy::{classify, KeyPath, RejectReason};

mod payload;
pub use payload::RxrpcKeyPayload;

use crate::error::DerivationError;
use std::fmt;
use zeroize::Zeroize;

/// Raw key block of a Kerberos credential, tagged with its enctype.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct KeyMaterial {
    #[zeroize(skip)]
    etype: i32,
    key: Vec<u8>,
}

impl KeyMaterial {
    pub fn new(etype: i32, key: Vec<u8>) -> Self {
        return Self { etype, key };
    }

    pub fn etype(&self) -> i32 {
        return self.etype;
    }

    pub fn len(&self) -> usize {
        return self.key.len();
    }

    pub fn as_bytes(&self) -> &[u8] {
        return &self.key;
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("etype", &self.etype)
            .field("length", &self.key.len())
            .finish()
    }
}

/// The 8 octet DES key handed to rxkad.
#[derive(Clone, PartialEq, Zeroize)]
#[zeroize(drop)]
pub struct SessionKey {
    key: [u8; DES_BLOCK_SIZE],
}

impl SessionKey {
    pub fn new(key: [u8; DES_BLOCK_SIZE]) -> Self {
        return Self { key };
    }

    pub fn as_bytes(&self) -> &[u8; DES_BLOCK_SIZE] {
        return &self.key;
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey(..)")
    }
}

/// Extract or derive the rxkad session key from the ticket key block.
pub fn derive_session_key(
    key_material: &KeyMaterial,
) -> Result<SessionKey, DerivationError> {
    let etype = key_material.etype();
    let length = key_material.len();

    match classify(etype, length) {
        // Use as-is for single DES [afs3-rxkad-k5-kdf-00 §4.1]
        KeyPath::Copy => {
            if length != DES_BLOCK_SIZE {
                return Err(DerivationError::InvalidKeyLength { etype, length });
            }
            let mut key = [0; DES_BLOCK_SIZE];
            key.copy_from_slice(key_material.as_bytes());
            let session_key = SessionKey::new(key);
            key.zeroize();
            return Ok(session_key);
        }
        // Strip the parity bits for 3DES then do KDF [§4.2]
        KeyPath::Unweave => {
            if length % DES_BLOCK_SIZE != 0 {
                return Err(DerivationError::InvalidKeyLength { etype, length });
            }
            let random = des3_key_to_random(key_material.as_bytes());
            return key_derivation_function(&random);
        }
        // [§4.3]
        KeyPath::DeriveDirect => {
            return key_derivation_function(key_material.as_bytes());
        }
        KeyPath::Reject(RejectReason::Deprecated) => {
            return Err(DerivationError::Deprecated(etype));
        }
        KeyPath::Reject(RejectReason::Unsupported) => {
            return Err(DerivationError::Unsupported(etype));
        }
        KeyPath::Reject(RejectReason::KeyTooShort) => {
            return Err(DerivationError::KeyTooShort(length));
        }
    }
}
