//! Receiver-side reassembly of verified shreds

use std::collections::BTreeMap;

use tracing::{debug, warn};

use shredsig_sign::eddsa::ED25519_PUBLIC_KEY_SIZE;

use crate::error::{Result, ShredError};
use crate::shred::Shred;

/// Collects shreds of one blob signed by a single key
///
/// The first accepted shred fixes the expected total. Every shred is
/// verified before it is stored. Memory grows with the shreds actually
/// received, never with the claimed total.
#[derive(Debug)]
pub struct Assembler {
    public_key: [u8; ED25519_PUBLIC_KEY_SIZE],
    total: Option<u32>,
    received: BTreeMap<u32, Vec<u8>>,
}

impl Assembler {
    pub fn new(public_key: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Assembler {
            public_key,
            total: None,
            received: BTreeMap::new(),
        }
    }

    /// Verify and store a shred
    ///
    /// Returns the reassembled blob when this shred completes it. A repeat
    /// of an already stored shred with the same payload is ignored.
    pub fn insert(&mut self, shred: Shred) -> Result<Option<Vec<u8>>> {
        if let Err(e) = shred.verify(&self.public_key) {
            warn!(index = shred.index, error = %e, "rejected shred");
            return Err(e);
        }

        if shred.index >= shred.total {
            return Err(ShredError::IndexOutOfRange {
                index: shred.index,
                total: shred.total,
            });
        }

        match self.total {
            Some(expected) if expected != shred.total => {
                return Err(ShredError::TotalMismatch {
                    expected,
                    actual: shred.total,
                });
            }
            Some(_) => {}
            None => self.total = Some(shred.total),
        }

        let index = shred.index;
        match self.received.get(&index) {
            Some(existing) if *existing == shred.payload => return Ok(None),
            Some(_) => return Err(ShredError::DuplicateShred { index }),
            None => {}
        }
        self.received.insert(index, shred.payload);

        debug!(
            index,
            received = self.received.len(),
            total = shred.total,
            "stored shred"
        );

        if self.is_complete() {
            Ok(Some(self.received.values().flatten().copied().collect()))
        } else {
            Ok(None)
        }
    }

    /// True once every shred of the blob has been stored
    pub fn is_complete(&self) -> bool {
        self.total
            .is_some_and(|total| self.received.len() == total as usize)
    }

    /// Indices still missing in ascending order, none before the first
    /// shred arrives
    pub fn missing(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.total.unwrap_or(0)).filter(move |index| !self.received.contains_key(index))
    }
}
