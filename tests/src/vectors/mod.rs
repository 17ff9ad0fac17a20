//! Loads Ed25519 known-answer vectors from TOML files.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse vectors: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("hex decode error in {field}: {source}")]
    Hex {
        field: &'static str,
        source: hex::FromHexError,
    },

    #[error("field {field} has {actual} bytes, expected {expected}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Deserialize)]
struct VectorFile {
    case: Vec<RawCase>,
}

#[derive(Debug, Deserialize)]
struct RawCase {
    name: String,
    seed: String,
    public_key: String,
    message: String,
    signature: String,
}

/// One decoded known-answer case
#[derive(Debug, Clone)]
pub struct SignatureCase {
    pub name: String,
    pub seed: [u8; 32],
    pub public_key: [u8; 32],
    pub message: Vec<u8>,
    pub signature: [u8; 64],
}

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

fn decode(field: &'static str, text: &str) -> Result<Vec<u8>, VectorError> {
    hex::decode(text).map_err(|source| VectorError::Hex { field, source })
}

fn decode_array<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N], VectorError> {
    let bytes = decode(field, text)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| VectorError::Length {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

/// Load and decode a vector file from the vector directory
pub fn load(file_name: &str) -> Result<Vec<SignatureCase>, VectorError> {
    let path = vector_dir().join(file_name);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file: VectorFile = toml::from_str(&text)?;

    file.case
        .into_iter()
        .map(|raw| {
            Ok(SignatureCase {
                seed: decode_array("seed", &raw.seed)?,
                public_key: decode_array("public_key", &raw.public_key)?,
                message: decode("message", &raw.message)?,
                signature: decode_array("signature", &raw.signature)?,
                name: raw.name,
            })
        })
        .collect()
}

/// RFC 8032 Ed25519 vectors, loaded once per test binary
pub static RFC8032: Lazy<Vec<SignatureCase>> = Lazy::new(|| {
    load("rfc8032.toml").unwrap_or_else(|e| panic!("RFC 8032 vectors: {}", e))
});
