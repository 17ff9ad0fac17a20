//! Digital signatures for shredsig
//!
//! This crate implements Ed25519 (EdDSA over Curve25519) from the field
//! arithmetic up: modular arithmetic over 2^255 - 19, affine Edwards point
//! algebra, SHA-512 derived integers, key derivation, signing and
//! verification.

pub mod eddsa;

pub use eddsa::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
