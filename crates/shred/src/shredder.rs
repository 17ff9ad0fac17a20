//! Cutting a blob into signed shreds

use tracing::debug;

use crate::error::{Result, ShredError};
use crate::shred::Shred;
use crate::signer::Signer;

/// Payload bytes per shred unless configured otherwise
pub const DEFAULT_SHRED_LEN: usize = 100;

/// Splits blobs into fixed-size signed shreds
#[derive(Debug, Clone, Copy)]
pub struct Shredder {
    shred_len: usize,
}

impl Shredder {
    /// Shredder producing payloads of at most `shred_len` bytes
    pub fn new(shred_len: usize) -> Result<Self> {
        if shred_len == 0 {
            return Err(ShredError::InvalidShredLength);
        }
        Ok(Shredder { shred_len })
    }

    pub fn shred_len(&self) -> usize {
        self.shred_len
    }

    /// Cut `data` into `ceil(len / shred_len)` shreds, each signed
    ///
    /// Every shred but the last carries exactly `shred_len` bytes. Empty
    /// input yields no shreds.
    pub fn split(&self, data: &[u8], signer: &Signer) -> Result<Vec<Shred>> {
        let count = data.len().div_ceil(self.shred_len);
        let total = u32::try_from(count).map_err(|_| ShredError::TooManyShreds { count })?;

        let shreds: Vec<Shred> = data
            .chunks(self.shred_len)
            .zip(0..total)
            .map(|(chunk, index)| {
                let mut shred = Shred::new(index, total, chunk.to_vec());
                shred.sign(signer);
                shred
            })
            .collect();

        debug!(bytes = data.len(), shreds = total, "split blob into shreds");
        Ok(shreds)
    }
}

impl Default for Shredder {
    fn default() -> Self {
        Shredder {
            shred_len: DEFAULT_SHRED_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(Shredder::new(0).unwrap_err(), ShredError::InvalidShredLength);
        assert_eq!(Shredder::default().shred_len(), DEFAULT_SHRED_LEN);
    }

    #[test]
    fn test_shred_counts() {
        let signer = Signer::from_seed(&[1u8; 32]);
        let shredder = Shredder::new(4).unwrap();

        assert!(shredder.split(&[], &signer).unwrap().is_empty());

        // exact multiple: no trailing empty shred
        let shreds = shredder.split(&[0u8; 8], &signer).unwrap();
        assert_eq!(shreds.len(), 2);
        assert!(shreds.iter().all(|s| s.total == 2 && s.payload.len() == 4));

        let shreds = shredder.split(&[0u8; 9], &signer).unwrap();
        assert_eq!(shreds.len(), 3);
        assert_eq!(shreds[2].payload.len(), 1);
        assert_eq!(
            shreds.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_every_shred_verifies() {
        let signer = Signer::from_seed(&[2u8; 32]);
        let data: Vec<u8> = (0u8..=20).collect();
        let shreds = Shredder::new(10).unwrap().split(&data, &signer).unwrap();
        for shred in &shreds {
            assert!(shred.verify(&signer.public_key()).is_ok(), "shred {}", shred.index);
        }
        let joined: Vec<u8> = shreds.iter().flat_map(|s| s.payload.clone()).collect();
        assert_eq!(joined, data);
    }
}
