//! SHA-512 helpers and hash-derived integers

use sha2::{Digest, Sha512};

/// SHA-512 digest of a byte string
pub fn hash512(data: &[u8]) -> [u8; 64] {
    hash512_parts(&[data])
}

/// SHA-512 digest of the concatenation of `parts`
pub fn hash512_parts(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Bit `i` of a byte string, little-endian within each byte
pub fn bit_at(bytes: &[u8], i: usize) -> u8 {
    (bytes[i / 8] >> (i % 8)) & 1
}

/// SHA-512 of the concatenated parts, read as a 512-bit little-endian integer
///
/// The digest bytes already are that integer's encoding, so the result is
/// returned as-is and consumed by scalar multiplication and reduction.
pub fn hash_to_int(parts: &[&[u8]]) -> [u8; 64] {
    hash512_parts(parts)
}
