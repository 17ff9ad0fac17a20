//! Seed configuration loaded from a TOML file
//!
//! ```toml
//! private_key = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"
//! ```
//!
//! The hex value may be longer than a seed (for example a 64-byte
//! seed-plus-public-key export); only its first 32 bytes are used.

use core::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shredsig_api::error::validation;
use shredsig_sign::eddsa::ED25519_SECRET_KEY_SIZE;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Result, ShredError};
use crate::signer::Signer;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hex-encoded key material, seed first
    pub private_key: String,
}

impl Config {
    /// Read and parse a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ShredError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config text
    pub fn from_toml(text: &str) -> Result<Config> {
        toml::from_str(text).map_err(|e| ShredError::Config(e.to_string()))
    }

    /// The 32-byte seed at the start of the decoded key material
    pub fn seed(&self) -> Result<Zeroizing<[u8; ED25519_SECRET_KEY_SIZE]>> {
        let decoded = Zeroizing::new(
            hex::decode(self.private_key.trim())
                .map_err(|e| ShredError::Config(format!("private_key: {}", e)))?,
        );
        validation::min_length("config private key", decoded.len(), ED25519_SECRET_KEY_SIZE)?;

        let mut seed = Zeroizing::new([0u8; ED25519_SECRET_KEY_SIZE]);
        seed.copy_from_slice(&decoded[..ED25519_SECRET_KEY_SIZE]);
        Ok(seed)
    }

    /// Signer for the configured seed
    pub fn signer(&self) -> Result<Signer> {
        let seed = self.seed()?;
        Ok(Signer::from_seed(&seed))
    }
}

impl Zeroize for Config {
    fn zeroize(&mut self) {
        self.private_key.zeroize();
    }
}

impl Drop for Config {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}
