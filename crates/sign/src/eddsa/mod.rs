//! EdDSA over the twisted Edwards form of Curve25519
//!
//! Ed25519 as described in RFC 8032: deterministic key derivation from a
//! 32-byte seed, deterministic signing and verification of the equation
//! S·B = R + c·A.
//!
//! The byte-level functions [`derive_keypair`], [`sign`] and [`verify`] are
//! the core interface. [`Ed25519`] wraps them in typed keys for callers that
//! work through the [`Signature`](shredsig_api::Signature) trait.
//!
//! # Example
//!
//! ```
//! use shredsig_sign::eddsa::Ed25519;
//! use shredsig_api::Signature;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> shredsig_api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = Ed25519::keypair(&mut rng)?;
//!
//! let message = b"Hello, Ed25519!";
//! let signature = Ed25519::sign(message, &secret_key)?;
//!
//! assert!(Ed25519::verify(message, &signature, &public_key).is_ok());
//! # Ok(())
//! # }
//! ```

mod constants;
mod ed25519;
mod field;
mod hash;
mod limb;
mod operations;
mod point;
mod scalar;


pub use constants::{
    curve, CurveConstants, CURVE_ORDER, ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE,
    ED25519_SIGNATURE_SIZE,
};
pub use ed25519::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
pub use field::FieldElement;
pub use hash::{bit_at, hash512, hash512_parts, hash_to_int};
pub use operations::{
    derive_keypair, derive_keypair_expanded, secret_scalar, sign, sign_expanded, verify,
};
pub use point::{recover_x, CompressedPoint, EdwardsPoint};
pub use scalar::Scalar;
