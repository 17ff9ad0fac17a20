//! Ed25519 signature scheme
//!
//! Typed keys and signatures over the byte-level functions in
//! [`operations`](super::operations), exposed through the `Signature` and
//! `SignatureDerive` traits.

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::constants::{ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE, ED25519_SIGNATURE_SIZE};
use super::hash::hash512;
use super::operations;
use super::point::CompressedPoint;
use shredsig_api::error::validation;
use shredsig_api::{Result, Signature as SignatureTrait, SignatureDerive};

/// Ed25519 signature scheme
pub struct Ed25519;

/// Ed25519 public key (32 bytes, encoded point A)
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ed25519PublicKey(pub [u8; ED25519_PUBLIC_KEY_SIZE]);

/// Ed25519 secret key
///
/// Holds the seed, its SHA-512 expansion and the derived public key. All
/// three are wiped on drop.
#[derive(Clone)]
pub struct Ed25519SecretKey {
    seed: [u8; ED25519_SECRET_KEY_SIZE],
    expanded: [u8; 64],
    public: [u8; ED25519_PUBLIC_KEY_SIZE],
}

/// Ed25519 signature (64 bytes: encoded R || S)
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl Ed25519PublicKey {
    /// Parse a public key, checking its length and that it decodes to a
    /// curve point
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::length("Ed25519 public key", bytes.len(), ED25519_PUBLIC_KEY_SIZE)?;
        let mut key = [0u8; ED25519_PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        CompressedPoint::from_bytes(&key)
            .decompress()
            .map_err(|e| e.with_context("Ed25519 public key"))?;
        Ok(Ed25519PublicKey(key))
    }

    /// Encoded key bytes
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl Ed25519SecretKey {
    /// Build a secret key from a 32-byte seed
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        validation::length("Ed25519 seed", seed.len(), ED25519_SECRET_KEY_SIZE)?;
        let mut seed_bytes = [0u8; ED25519_SECRET_KEY_SIZE];
        seed_bytes.copy_from_slice(seed);

        let expanded = hash512(&seed_bytes);
        let (mut scalar, public) = operations::derive_keypair_expanded(&expanded);
        scalar.zeroize();

        Ok(Ed25519SecretKey {
            seed: seed_bytes,
            expanded,
            public,
        })
    }

    /// The 32-byte seed
    pub fn seed(&self) -> &[u8; ED25519_SECRET_KEY_SIZE] {
        &self.seed
    }

    /// The seed in a buffer that is wiped when dropped
    pub fn export_seed(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.seed.to_vec())
    }

    /// SHA-512 of the seed; the clamped scalar comes from the first half,
    /// the nonce prefix is the second half
    pub fn expanded(&self) -> &[u8; 64] {
        &self.expanded
    }

    /// The public key belonging to this secret key
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.public)
    }
}

impl Zeroize for Ed25519SecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.expanded.zeroize();
        self.public.zeroize();
    }
}

impl Drop for Ed25519SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Ed25519Signature {
    /// Parse a signature, checking only its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::length("Ed25519 signature", bytes.len(), ED25519_SIGNATURE_SIZE)?;
        let mut sig = [0u8; ED25519_SIGNATURE_SIZE];
        sig.copy_from_slice(bytes);
        Ok(Ed25519Signature(sig))
    }

    /// Signature bytes
    pub fn to_bytes(&self) -> [u8; ED25519_SIGNATURE_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519PublicKey").finish_non_exhaustive()
    }
}

impl fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519SecretKey").finish_non_exhaustive()
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Signature").finish_non_exhaustive()
    }
}

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519SecretKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Ed25519"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let mut seed = Zeroizing::new([0u8; ED25519_SECRET_KEY_SIZE]);
        rng.fill_bytes(&mut seed[..]);
        <Self as SignatureDerive>::derive_keypair(&seed[..])
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        Ok(Ed25519Signature(operations::sign_expanded(
            message,
            &secret_key.expanded,
            &secret_key.public,
        )))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        operations::verify(&signature.0, message, &public_key.0)
    }
}

impl SignatureDerive for Ed25519 {
    const SEED_SIZE: usize = ED25519_SECRET_KEY_SIZE;

    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair> {
        let secret = Ed25519SecretKey::from_seed(seed)?;
        Ok((secret.public_key(), secret))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey> {
        Ok(secret_key.public_key())
    }
}
