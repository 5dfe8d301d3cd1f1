//! Published AES vectors from FIPS-197 and NIST SP 800-38A (ECB, one block at a time).

use aes_core::{Aes, Block, Error, KeySize};

struct Vector {
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const VECTORS: &[Vector] = &[
    // FIPS-197 Appendix B.
    Vector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
    // FIPS-197 Appendix C.1 to C.3.
    Vector {
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    Vector {
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    Vector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
    // SP 800-38A F.1.1, F.1.3 and F.1.5, first block.
    Vector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    Vector {
        key: "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "bd334f1d6e45f25ff712a214571fa5cc",
    },
    Vector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
];

fn block(hex_str: &str) -> Block {
    hex::decode(hex_str)
        .expect("valid hex")
        .try_into()
        .expect("16-byte block")
}

#[test]
fn encrypt_known_answers() {
    for v in VECTORS {
        let cipher = Aes::new(&hex::decode(v.key).expect("valid hex")).expect("valid key");
        assert_eq!(
            hex::encode(cipher.encrypt_block(&block(v.plaintext))),
            v.ciphertext,
            "key {}",
            v.key
        );
    }
}

#[test]
fn decrypt_known_answers() {
    for v in VECTORS {
        let cipher = Aes::new(&hex::decode(v.key).expect("valid hex")).expect("valid key");
        assert_eq!(
            hex::encode(cipher.decrypt_block(&block(v.ciphertext))),
            v.plaintext,
            "key {}",
            v.key
        );
    }
}

#[test]
fn key_size_selects_round_count() {
    for (len, size, rounds) in [
        (16, KeySize::Aes128, 10),
        (24, KeySize::Aes192, 12),
        (32, KeySize::Aes256, 14),
    ] {
        let cipher = Aes::new(&vec![0x5a; len]).expect("valid key");
        assert_eq!(cipher.key_size(), size);
        assert_eq!(cipher.rounds(), rounds);
    }
}

#[test]
fn invalid_key_size_error_message() {
    let err = Aes::new(&[0u8; 20]).expect_err("20 bytes is not an AES key");
    assert_eq!(err, Error::InvalidKeySize(20));
    assert_eq!(
        err.to_string(),
        "invalid AES key size: 20 bytes (expected 16, 24 or 32)"
    );
}
