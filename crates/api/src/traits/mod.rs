//! Trait definitions for shredsig signature schemes

pub mod signature;

pub use signature::{Signature, SignatureDerive};
