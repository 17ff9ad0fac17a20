//! Property-based tests for Ed25519 signing and point encoding
//!
//! Affine arithmetic makes every case cost several scalar multiplications,
//! so the case counts are kept small.

use proptest::prelude::*;
use shredsig_api::Error;
use shredsig_sign::eddsa::{self, CompressedPoint, EdwardsPoint};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn sign_then_verify(
        seed in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let (_, public_key) = eddsa::derive_keypair(&seed);
        let signature = eddsa::sign(&message, &seed, &public_key);
        prop_assert!(eddsa::verify(&signature, &message, &public_key).is_ok());

        // deterministic
        prop_assert_eq!(eddsa::sign(&message, &seed, &public_key), signature);
    }

    #[test]
    fn any_signature_bit_flip_fails(
        seed in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 1..64),
        bit in 0usize..512
    ) {
        let (_, public_key) = eddsa::derive_keypair(&seed);
        let mut signature = eddsa::sign(&message, &seed, &public_key);
        signature[bit / 8] ^= 1 << (bit % 8);

        let err = eddsa::verify(&signature, &message, &public_key).unwrap_err();
        prop_assert!(err.is_authentication_failure(), "unexpected {:?}", err);
    }

    #[test]
    fn any_public_key_bit_flip_fails(
        seed in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..64),
        bit in 0usize..256
    ) {
        let (_, public_key) = eddsa::derive_keypair(&seed);
        let signature = eddsa::sign(&message, &seed, &public_key);

        let mut tampered = public_key;
        tampered[bit / 8] ^= 1 << (bit % 8);

        // an undecodable key and a decodable wrong key are both rejected
        let err = eddsa::verify(&signature, &message, &tampered).unwrap_err();
        prop_assert!(err.is_authentication_failure(), "unexpected {:?}", err);
    }

    #[test]
    fn any_message_bit_flip_fails(
        seed in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let (_, public_key) = eddsa::derive_keypair(&seed);
        let signature = eddsa::sign(&message, &seed, &public_key);

        let mut tampered = message.clone();
        let i = position.index(tampered.len());
        tampered[i] ^= 1 << bit;

        prop_assert_eq!(
            eddsa::verify(&signature, &tampered, &public_key),
            Err(Error::VerificationFailed { context: "Ed25519 verify" })
        );
    }

    #[test]
    fn point_encoding_round_trip(k in any::<[u8; 32]>()) {
        let point = EdwardsPoint::base_point().scalar_mult(&k);
        let decoded = CompressedPoint::from_bytes(&point.compress().to_bytes()).decompress();
        prop_assert_eq!(decoded, Ok(point));
    }

    #[test]
    fn wrong_lengths_rejected(len in 0usize..130) {
        prop_assume!(len != 64);
        let bytes = vec![0u8; len];
        let result = eddsa::verify(&bytes, b"m", &[0u8; 32]);
        let is_length_error = matches!(result, Err(Error::InvalidLength { expected: 64, .. }));
        prop_assert!(is_length_error);
    }
}
