//! DES parity handling: stripping parity bits from Triple-DES sub-keys and
//! forcing odd parity on a derived key.

use zeroize::Zeroizing;

pub const DES_BLOCK_SIZE: usize = 8;
pub const DES_RANDOM_SIZE: usize = 7;

const WEAK_KEYS: [[u8; 8]; 16] = [
    // weak
    [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01],
    [0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE],
    [0x1F, 0x1F, 0x1F, 0x1F, 0x0E, 0x0E, 0x0E, 0x0E],
    [0xE0, 0xE0, 0xE0, 0xE0, 0xF1, 0xF1, 0xF1, 0xF1],
    // semi-weak
    [0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE],
    [0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01],
    [0x1F, 0xE0, 0x1F, 0xE0, 0x0E, 0xF1, 0x0E, 0xF1],
    [0xE0, 0x1F, 0xE0, 0x1F, 0xF1, 0x0E, 0xF1, 0x0E],
    [0x01, 0xE0, 0x01, 0xE0, 0x01, 0xF1, 0x01, 0xF1],
    [0xE0, 0x01, 0xE0, 0x01, 0xF1, 0x01, 0xF1, 0x01],
    [0x1F, 0xFE, 0x1F, 0xFE, 0x0E, 0xFE, 0x0E, 0xFE],
    [0xFE, 0x1F, 0xFE, 0x1F, 0xFE, 0x0E, 0xFE, 0x0E],
    [0x01, 0x1F, 0x01, 0x1F, 0x01, 0x0E, 0x01, 0x0E],
    [0x1F, 0x01, 0x1F, 0x01, 0x0E, 0x01, 0x0E, 0x01],
    [0xE0, 0xFE, 0xE0, 0xFE, 0xF1, 0xFE, 0xF1, 0xFE],
    [0xFE, 0xE0, 0xFE, 0xE0, 0xFE, 0xF1, 0xFE, 0xF1],
];

/// Discard the parity bits of a DES key block, converting 8 octets into the
/// 7 octet random string it was expanded from.
///
/// The low bit of every one of the first 7 octets is a parity bit in the key
/// but a data bit in the random string. Those 7 data bits were moved into the
/// high bits of the last octet, so they are put back from there, least
/// significant first.
pub fn strip_parity_bits(key: &[u8; DES_BLOCK_SIZE]) -> [u8; DES_RANDOM_SIZE] {
    let mut random = [0; DES_RANDOM_SIZE];
    let mut lsbs = key[7] >> 1;

    for i in 0..DES_RANDOM_SIZE {
        random[i] = (key[i] & 0xfe) | (lsbs & 0x1);
        lsbs >>= 1;
    }

    return random;
}

/// Reverse the Triple-DES random-to-key operation, turning each 8 octet DES
/// key into its 56 bit random string and concatenating them.
///
/// The caller must ensure that the length is a multiple of 8.
pub fn des3_key_to_random(key: &[u8]) -> Zeroizing<Vec<u8>> {
    let blocks = key.chunks_exact(DES_BLOCK_SIZE);
    let mut random = Zeroizing::new(Vec::with_capacity(
        blocks.len() * DES_RANDOM_SIZE,
    ));

    for block in blocks {
        let mut des_key = [0; DES_BLOCK_SIZE];
        des_key.copy_from_slice(block);
        random.extend_from_slice(&strip_parity_bits(&des_key));
    }

    return random;
}

/// Overlay the odd DES parity on each octet of the key.
pub fn set_odd_parity(key: &mut [u8]) {
    for byte in key.iter_mut() {
        *byte &= 0xfe;
        if byte.count_ones() % 2 == 0 {
            *byte |= 0x1;
        }
    }
}

/// Whether the key is one of the DES weak or semi-weak keys. The key is
/// expected to be already odd parity adjusted.
pub fn is_weak_key(key: &[u8; DES_BLOCK_SIZE]) -> bool {
    return WEAK_KEYS.iter().any(|weak_key| weak_key == key);
}
