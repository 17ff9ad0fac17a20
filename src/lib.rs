//! # shredsig
//!
//! Ed25519 signatures and signed blob fragmentation.
//!
//! ## Features
//!
//! - `shred` (default): shredding, reassembly and TOML seed configuration
//! - `serde`: `Serialize`/`Deserialize` on public keys
//! - `trace`: `tracing` events from key derivation, signing and verification
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`shredsig-api`]: Error type and the `Signature` traits
//! - [`shredsig-internal`]: Constant-time and endianness helpers
//! - [`shredsig-sign`]: Ed25519 from the field arithmetic up
//! - [`shredsig-shred`]: Signed shreds, shredder, assembler and config
//!
//! ## Example
//!
//! ```
//! use shredsig::prelude::*;
//!
//! let seed = [7u8; 32];
//! let (_, public_key) = eddsa::derive_keypair(&seed);
//! let signature = eddsa::sign(b"message", &seed, &public_key);
//! assert!(eddsa::verify(&signature, b"message", &public_key).is_ok());
//! ```

// Core re-exports (always available)
pub use shredsig_api as api;
pub use shredsig_internal as internal;
pub use shredsig_sign as sign;

// Feature-gated re-exports
#[cfg(feature = "shred")]
pub use shredsig_shred as shred;

/// Common imports for shredsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureDerive};

    // Ed25519
    pub use crate::sign::eddsa;
    pub use crate::sign::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};

    #[cfg(feature = "shred")]
    pub use crate::shred::{Assembler, Config, Shred, ShredError, Shredder, Signer};

    // Re-export zeroize for secure memory handling
    pub use zeroize::{Zeroize, Zeroizing};
}
