//! A signed fragment of a larger byte blob

use serde::{Deserialize, Serialize};
use shredsig_sign::eddsa::{self, ED25519_PUBLIC_KEY_SIZE, ED25519_SIGNATURE_SIZE};

use crate::error::{Result, ShredError};
use crate::signer::Signer;

/// One fragment of a blob
///
/// The signature covers the header text `"{index}|{total}|"` followed by the
/// raw payload bytes, so a shred cannot be moved to another position or
/// another blob length without invalidating it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shred {
    pub index: u32,
    pub total: u32,
    pub payload: Vec<u8>,
    #[serde(default, with = "signature_hex", skip_serializing_if = "Option::is_none")]
    pub signature: Option<[u8; ED25519_SIGNATURE_SIZE]>,
}

impl Shred {
    /// Unsigned shred
    pub fn new(index: u32, total: u32, payload: Vec<u8>) -> Self {
        Shred {
            index,
            total,
            payload,
            signature: None,
        }
    }

    /// Bytes covered by the signature
    pub fn signed_message(&self) -> Vec<u8> {
        let mut message = format!("{}|{}|", self.index, self.total).into_bytes();
        message.extend_from_slice(&self.payload);
        message
    }

    /// Sign the header and payload, replacing any earlier signature
    pub fn sign(&mut self, signer: &Signer) {
        self.signature = Some(signer.sign(&self.signed_message()));
    }

    /// Check the attached signature against `public_key`
    pub fn verify(&self, public_key: &[u8; ED25519_PUBLIC_KEY_SIZE]) -> Result<()> {
        let signature = self
            .signature
            .as_ref()
            .ok_or(ShredError::Unsigned { index: self.index })?;
        eddsa::verify(signature, &self.signed_message(), public_key)?;
        Ok(())
    }
}

/// Hex text for the optional signature
mod signature_hex {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ED25519_SIGNATURE_SIZE;

    pub fn serialize<S: Serializer>(
        signature: &Option<[u8; ED25519_SIGNATURE_SIZE]>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match signature {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<[u8; ED25519_SIGNATURE_SIZE]>, D::Error> {
        let text: Option<String> = Option::deserialize(deserializer)?;
        text.map(|t| {
            let bytes = hex::decode(t).map_err(D::Error::custom)?;
            <[u8; ED25519_SIGNATURE_SIZE]>::try_from(bytes.as_slice()).map_err(D::Error::custom)
        })
        .transpose()
    }
}
