//! Shared test vectors for the shredsig integration tests
pub mod vectors;
