//! Digital signature traits for shredsig
//!
//! This module defines the traits that signature algorithms implement.
//! The design does not require mutable access to secret keys.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Verification reports its failure mode through [`crate::Error`] rather than
/// a boolean, so callers can tell malformed encodings from forged signatures.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// The RNG is only consulted for the seed; everything after that is a
    /// deterministic function of it.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    ///
    /// Implementations are deterministic: the same key and message always
    /// produce the same signature.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}

/// Signature algorithms whose keys are a deterministic function of a seed
pub trait SignatureDerive: Signature {
    /// Exact seed size in bytes
    const SEED_SIZE: usize;

    /// Derive a key pair from seed material
    ///
    /// The same seed always produces the same key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed does not have `SEED_SIZE` bytes
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Derive the public key from a secret key
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;
}
