//! Seed-holding signer used to sign shreds

use core::fmt;

use shredsig_sign::eddsa::{self, ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE, ED25519_SIGNATURE_SIZE};
use zeroize::Zeroize;

/// A seed together with the public key derived from it
///
/// The seed is wiped on drop.
pub struct Signer {
    seed: [u8; ED25519_SECRET_KEY_SIZE],
    public_key: [u8; ED25519_PUBLIC_KEY_SIZE],
}

impl Signer {
    /// Derive the key pair for `seed`
    pub fn from_seed(seed: &[u8; ED25519_SECRET_KEY_SIZE]) -> Self {
        let (mut scalar, public_key) = eddsa::derive_keypair(seed);
        scalar.zeroize();
        Signer {
            seed: *seed,
            public_key,
        }
    }

    /// Encoded public key
    pub fn public_key(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.public_key
    }

    /// Sign an arbitrary message
    pub fn sign(&self, message: &[u8]) -> [u8; ED25519_SIGNATURE_SIZE] {
        eddsa::sign(message, &self.seed, &self.public_key)
    }
}

impl Zeroize for Signer {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}

impl Drop for Signer {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}
