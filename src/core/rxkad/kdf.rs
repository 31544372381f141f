//! Key derivation of a 64 bit DES key for rxkad from a Kerberos 5 session
//! key, using HMAC-MD5 as PRF:
//!
//! `K(i) = PRF(Ks, [i]_2 || Label || 0x00 || [L]_2)`
//!
//! See draft-kaduk-afs3-rxkad-k5-kdf-00 section 4.3.

use super::parity::{is_weak_key, set_odd_parity, DES_BLOCK_SIZE};
use super::SessionKey;
use crate::error::DerivationError;
use hmac::{Hmac, Mac};
use log::error;
use md5::Md5;
use zeroize::Zeroizing;

type HmacMd5 = Hmac<Md5>;

/// "rxkad" including the NUL separator.
pub const RXKAD_LABEL: [u8; 6] = *b"rxkad\0";

/// Output length in bits, as a big endian integer.
pub const RXKAD_KEY_BITS: u32 = 64;

pub const KDF_MAX_ITERATIONS: u8 = 255;

/// The data passed into the PRF for each iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct KdfInput {
    pub counter: u8,
    pub label: [u8; 6],
    pub length: u32,
}

impl KdfInput {
    pub const SIZE: usize = 11;

    pub fn rxkad(counter: u8) -> Self {
        return Self {
            counter,
            label: RXKAD_LABEL,
            length: RXKAD_KEY_BITS,
        };
    }

    pub fn build(&self) -> [u8; Self::SIZE] {
        let mut raw = [0; Self::SIZE];
        raw[0] = self.counter;
        raw[1..7].copy_from_slice(&self.label);
        raw[7..].copy_from_slice(&self.length.to_be_bytes());
        return raw;
    }
}

/// Derive a key that is not weak from the given HMAC key by iterating over
/// the counter until the truncated, parity adjusted PRF output is usable.
pub fn key_derivation_function(
    hmac_key: &[u8],
) -> Result<SessionKey, DerivationError> {
    return derive_with_prf(|input| prf(hmac_key, input));
}

fn derive_with_prf<F>(mut prf: F) -> Result<SessionKey, DerivationError>
where
    F: FnMut(&[u8]) -> Result<Zeroizing<Vec<u8>>, DerivationError>,
{
    for i in 1..=KDF_MAX_ITERATIONS {
        let digest = prf(&KdfInput::rxkad(i).build())?;

        if digest.len() < DES_BLOCK_SIZE {
            error!("HMAC returned short result ({} octets)", digest.len());
            return Err(DerivationError::CryptoPrimitiveFailure(format!(
                "short result of {} octets",
                digest.len()
            )));
        }

        let mut candidate = Zeroizing::new([0; DES_BLOCK_SIZE]);
        candidate.copy_from_slice(&digest[..DES_BLOCK_SIZE]);
        set_odd_parity(&mut candidate[..]);

        if !is_weak_key(&candidate) {
            return Ok(SessionKey::new(*candidate));
        }
    }

    return Err(DerivationError::KdfExhausted);
}

fn prf(key: &[u8], data: &[u8]) -> Result<Zeroizing<Vec<u8>>, DerivationError> {
    let mut mac = HmacMd5::new_from_slice(key).map_err(|err| {
        error!("HMAC-MD5 initialization failed: {}", err);
        DerivationError::CryptoPrimitiveFailure(err.to_string())
    })?;
    mac.update(data);

    return Ok(Zeroizing::new(mac.finalize().into_bytes().to_vec()));
}
