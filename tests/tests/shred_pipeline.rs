//! End-to-end shredding: config, split, shuffle, reassemble

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shredsig_shred::{Assembler, Config, ShredError, Shredder, DEFAULT_SHRED_LEN};
use shredsig_tests::vectors::RFC8032;

fn signer_config() -> Config {
    Config::from_toml(&format!(
        "private_key = \"{}{}\"",
        hex::encode(RFC8032[0].seed),
        hex::encode(RFC8032[0].public_key)
    ))
    .unwrap()
}

#[test]
fn config_signer_matches_vector() {
    let signer = signer_config().signer().unwrap();
    assert_eq!(signer.public_key(), RFC8032[0].public_key);
}

#[test]
fn shuffled_shreds_reassemble() {
    let signer = signer_config().signer().unwrap();
    let blob: Vec<u8> = (0..350u32).map(|i| (i * 7 % 251) as u8).collect();

    let mut shreds = Shredder::default().split(&blob, &signer).unwrap();
    assert_eq!(shreds.len(), blob.len().div_ceil(DEFAULT_SHRED_LEN));

    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    shreds.shuffle(&mut rng);

    let mut assembler = Assembler::new(signer.public_key());
    let mut result = None;
    for shred in shreds {
        assert!(result.is_none(), "blob completed early");
        result = assembler.insert(shred).unwrap();
    }
    assert_eq!(result, Some(blob));
}

#[test]
fn tampered_payload_is_rejected() {
    let signer = signer_config().signer().unwrap();
    let mut shreds = Shredder::new(16).unwrap().split(b"a short transaction blob", &signer).unwrap();
    shreds[1].payload[0] ^= 0x01;

    let mut assembler = Assembler::new(signer.public_key());
    assert_eq!(assembler.insert(shreds[0].clone()), Ok(None));
    let err = assembler.insert(shreds[1].clone()).unwrap_err();
    assert!(matches!(err, ShredError::Crypto(ref e) if e.is_authentication_failure()));
    assert_eq!(assembler.missing().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn shreds_survive_toml_transport() {
    let signer = signer_config().signer().unwrap();
    let shreds = Shredder::new(8).unwrap().split(b"over the wire", &signer).unwrap();

    let mut assembler = Assembler::new(signer.public_key());
    let mut result = None;
    for shred in &shreds {
        let text = toml::to_string(shred).unwrap();
        result = assembler.insert(toml::from_str(&text).unwrap()).unwrap();
    }
    assert_eq!(result.as_deref(), Some(&b"over the wire"[..]));
}
