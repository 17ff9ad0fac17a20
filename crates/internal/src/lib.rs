//! Internal utilities for the shredsig library
//!
//! Not part of the public API; shared by the signature crates.

pub mod constant_time;
pub mod endian;
