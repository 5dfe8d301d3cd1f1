//! Encrypts and decrypts the FIPS-197 Appendix C.1 block.

use aes_core::Aes;

fn main() -> Result<(), aes_core::Error> {
    let key: Vec<u8> = (0u8..16).collect();
    let cipher = Aes::new(&key)?;

    let plaintext = *b"\x00\x11\x22\x33\x44\x55\x66\x77\x88\x99\xaa\xbb\xcc\xdd\xee\xff";
    let ciphertext = cipher.encrypt_block(&plaintext);
    assert_eq!(hex::encode(ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");
    assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);

    println!("example succeeded; ciphertext {}", hex::encode(ciphertext));
    Ok(())
}
