//! Signed shreds for shredsig
//!
//! A leader cuts a blob into fixed-size [`Shred`]s with a [`Shredder`] and
//! signs each one with a [`Signer`]. A receiver feeds the shreds, in any
//! order, into an [`Assembler`] holding the leader's public key and gets the
//! blob back once every shred has arrived and verified. [`Config`] loads the
//! leader's seed from a TOML file.

pub mod assembler;
pub mod config;
pub mod error;
pub mod shred;
pub mod shredder;
pub mod signer;

pub use assembler::Assembler;
pub use config::Config;
pub use error::{Result, ShredError};
pub use shred::Shred;
pub use shredder::{Shredder, DEFAULT_SHRED_LEN};
pub use signer::Signer;
