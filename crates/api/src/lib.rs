//! Public API traits and types for the shredsig library
//!
//! This crate provides the API surface shared by the shredsig crates: the
//! error taxonomy returned by signing, verification and shred handling, and
//! the trait every signature scheme implements.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Signature, SignatureDerive};

// Re-export trait modules for direct access
pub use traits::signature;
