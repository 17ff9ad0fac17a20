//! Public Ed25519 operations
//!
//! Key derivation, signing and verification over raw byte strings. The
//! typed [`Ed25519`](super::Ed25519) wrapper and the shred layer are both
//! built on these functions.

use zeroize::Zeroize;

use super::constants::{ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE, ED25519_SIGNATURE_SIZE};
use super::hash::{bit_at, hash512, hash_to_int};
use super::point::{CompressedPoint, EdwardsPoint};
use super::scalar::Scalar;
use shredsig_api::error::validation;
use shredsig_api::Result;

/// Clamped private scalar from the seed hash
///
/// a = 2^254 + sum of 2^i * bit_at(h, i) for 3 <= i < 254. The result is
/// not reduced modulo l.
pub fn secret_scalar(h: &[u8; 64]) -> Scalar {
    let mut bytes = [0u8; 32];
    for i in 3..254 {
        bytes[i / 8] |= bit_at(h, i) << (i % 8);
    }
    bytes[31] |= 0x40;
    let a = Scalar::from_bytes(&bytes);
    bytes.zeroize();
    a
}

/// Derive the private scalar and encoded public key from a seed
pub fn derive_keypair(seed: &[u8; ED25519_SECRET_KEY_SIZE]) -> (Scalar, [u8; ED25519_PUBLIC_KEY_SIZE]) {
    let mut h = hash512(seed);
    let keypair = derive_keypair_expanded(&h);
    h.zeroize();
    keypair
}

/// Derive the private scalar and encoded public key from the seed's
/// SHA-512 expansion
pub fn derive_keypair_expanded(h: &[u8; 64]) -> (Scalar, [u8; ED25519_PUBLIC_KEY_SIZE]) {
    let a = secret_scalar(h);
    let public_key = EdwardsPoint::base_point()
        .scalar_mult(a.as_bytes())
        .compress()
        .to_bytes();

    #[cfg(feature = "trace")]
    tracing::debug!(public_key = ?public_key, "derived Ed25519 keypair");

    (a, public_key)
}

/// Sign a message
///
/// Deterministic: the nonce is SHA-512 of the seed hash's upper half and the
/// message. `public_key` must be the key derived from `seed`; a mismatched
/// key yields a signature that does not verify.
pub fn sign(
    message: &[u8],
    seed: &[u8; ED25519_SECRET_KEY_SIZE],
    public_key: &[u8; ED25519_PUBLIC_KEY_SIZE],
) -> [u8; ED25519_SIGNATURE_SIZE] {
    let mut h = hash512(seed);
    let signature = sign_expanded(message, &h, public_key);
    h.zeroize();
    signature
}

/// Sign a message with an already expanded secret key
///
/// `h` is SHA-512 of the seed: the clamped scalar comes from its lower half,
/// the nonce prefix is its upper half.
pub fn sign_expanded(
    message: &[u8],
    h: &[u8; 64],
    public_key: &[u8; ED25519_PUBLIC_KEY_SIZE],
) -> [u8; ED25519_SIGNATURE_SIZE] {
    let mut a = secret_scalar(h);

    // r = H(h[32..64] || m), used mod l since B has order l
    let mut r = Scalar::from_bytes_mod_order_wide(&hash_to_int(&[&h[32..64], message]));

    let r_encoded = EdwardsPoint::base_point()
        .scalar_mult(r.as_bytes())
        .compress()
        .to_bytes();

    let c = Scalar::from_bytes_mod_order_wide(&hash_to_int(&[&r_encoded, public_key, message]));

    // S = (r + c * a) mod l
    let s = Scalar::mul_add(&c, &a, &r);
    a.zeroize();
    r.zeroize();

    let mut signature = [0u8; ED25519_SIGNATURE_SIZE];
    signature[..32].copy_from_slice(&r_encoded);
    signature[32..].copy_from_slice(s.as_bytes());

    #[cfg(feature = "trace")]
    tracing::debug!(message_len = message.len(), "produced Ed25519 signature");

    signature
}

/// Verify a signature
///
/// Checks S·B == R + c·A with c = H(R || A || m) taken as the full 512-bit
/// integer. Length errors are reported before any decoding; an undecodable
/// R or A yields `PointNotOnCurve`, a failed equation `VerificationFailed`.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<()> {
    validation::length("Ed25519 signature", signature.len(), ED25519_SIGNATURE_SIZE)?;
    validation::length("Ed25519 public key", public_key.len(), ED25519_PUBLIC_KEY_SIZE)?;

    let mut r_bytes = [0u8; 32];
    let mut s_bytes = [0u8; 32];
    let mut pk_bytes = [0u8; ED25519_PUBLIC_KEY_SIZE];
    r_bytes.copy_from_slice(&signature[..32]);
    s_bytes.copy_from_slice(&signature[32..]);
    pk_bytes.copy_from_slice(public_key);

    let r = CompressedPoint::from_bytes(&r_bytes)
        .decompress()
        .map_err(|e| e.with_context("Ed25519 signature R"))?;
    let a = CompressedPoint::from_bytes(&pk_bytes)
        .decompress()
        .map_err(|e| e.with_context("Ed25519 public key"))?;

    let c = hash_to_int(&[&r_bytes, &pk_bytes, message]);

    let lhs = EdwardsPoint::base_point().scalar_mult(&s_bytes);
    let rhs = r.add(&a.scalar_mult(&c));

    let valid = lhs == rhs;

    #[cfg(feature = "trace")]
    {
        if !valid {
            tracing::warn!(message_len = message.len(), "Ed25519 verification equation failed");
        }
    }

    validation::signature(valid, "Ed25519 verify")
}
