//! Known-answer tests against the RFC 8032 Ed25519 vectors

use shredsig_api::{Signature, SignatureDerive};
use shredsig_sign::eddsa::{self, Ed25519, Ed25519PublicKey, Ed25519Signature};
use shredsig_tests::vectors::RFC8032;

#[test]
fn rfc8032_vectors_loaded() {
    assert_eq!(RFC8032.len(), 3);
}

#[test]
fn rfc8032_public_keys() {
    for case in RFC8032.iter() {
        let (_, public_key) = eddsa::derive_keypair(&case.seed);
        assert_eq!(public_key, case.public_key, "{}", case.name);
    }
}

#[test]
fn rfc8032_signatures() {
    for case in RFC8032.iter() {
        let signature = eddsa::sign(&case.message, &case.seed, &case.public_key);
        assert_eq!(signature, case.signature, "{}", case.name);
    }
}

#[test]
fn rfc8032_verification() {
    for case in RFC8032.iter() {
        assert!(
            eddsa::verify(&case.signature, &case.message, &case.public_key).is_ok(),
            "{}",
            case.name
        );

        let public_key = Ed25519PublicKey::from_bytes(&case.public_key).unwrap();
        let signature = Ed25519Signature::from_bytes(&case.signature).unwrap();
        assert!(Ed25519::verify(&case.message, &signature, &public_key).is_ok());
    }
}

#[test]
fn rfc8032_signature_rejected_for_other_message() {
    let first = &RFC8032[0];
    let second = &RFC8032[1];
    let err = eddsa::verify(&first.signature, &second.message, &first.public_key).unwrap_err();
    assert!(err.is_authentication_failure());
}

#[test]
fn rfc8032_trait_signing_matches() {
    for case in RFC8032.iter() {
        let (public_key, secret_key) = Ed25519::derive_keypair(&case.seed).unwrap();
        assert_eq!(public_key.to_bytes(), case.public_key);
        let signature = Ed25519::sign(&case.message, &secret_key).unwrap();
        assert_eq!(signature.to_bytes(), case.signature, "{}", case.name);
    }
}

#[test]
fn rfc8032_public_keys_through_serde() {
    for case in RFC8032.iter() {
        let public_key = Ed25519PublicKey::from_bytes(&case.public_key).unwrap();

        let json = serde_json::to_string(&public_key).unwrap();
        let restored: Ed25519PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, public_key, "{}", case.name);

        // the newtype serializes as its plain byte array
        let bytes: Vec<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(bytes, case.public_key.to_vec(), "{}", case.name);
    }
}
