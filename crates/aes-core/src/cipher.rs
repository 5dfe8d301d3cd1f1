//! AES cipher instance and single-block encryption/decryption.

use core::fmt;

use crate::block::{load_state, store_state, Block, State, BLOCK_SIZE};
use crate::error::Result;
use crate::key::{KeySize, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::{expand_key, inverse_schedule};

/// AES block cipher keyed with a 128, 192 or 256-bit key.
///
/// Both round-key schedules are derived once in [`Aes::new`] and never change
/// afterwards, so a single instance can be shared across threads and used for
/// any number of concurrent block operations.
#[derive(Clone)]
pub struct Aes {
    enc: RoundKeys,
    dec: RoundKeys,
}

impl Aes {
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// Builds a cipher from a 16, 24 or 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let enc = expand_key(key)?;
        let dec = inverse_schedule(&enc);
        tracing::debug!(key_size = %enc.key_size(), rounds = enc.rounds(), "initialized AES cipher");
        Ok(Self { enc, dec })
    }

    /// Key size the instance was built with.
    pub fn key_size(&self) -> KeySize {
        self.enc.key_size()
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.enc.rounds()
    }

    /// Encrypts a single block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        let mut out = *block;
        self.encrypt_block_in_place(&mut out);
        out
    }

    /// Decrypts a single block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        let mut out = *block;
        self.decrypt_block_in_place(&mut out);
        out
    }

    /// Encrypts `block`, overwriting it with the ciphertext.
    pub fn encrypt_block_in_place(&self, block: &mut Block) {
        let state = encrypt_state(load_state(block), &self.enc);
        store_state(&state, block);
    }

    /// Decrypts `block`, overwriting it with the plaintext.
    pub fn decrypt_block_in_place(&self, block: &mut Block) {
        let state = decrypt_state(load_state(block), &self.dec);
        store_state(&state, block);
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}

fn encrypt_state(mut state: State, round_keys: &RoundKeys) -> State {
    let nr = round_keys.rounds();

    add_round_key(&mut state, &round_keys.round(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys.round(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys.round(nr));

    state
}

/// Equivalent inverse cipher: same step order as encryption, which relies on
/// `round_keys` having come from [`inverse_schedule`].
fn decrypt_state(mut state: State, round_keys: &RoundKeys) -> State {
    let nr = round_keys.rounds();

    add_round_key(&mut state, &round_keys.round(0));

    for round in 1..nr {
        inv_sub_bytes(&mut state);
        inv_shift_rows(&mut state);
        inv_mix_columns(&mut state);
        add_round_key(&mut state, &round_keys.round(round));
    }

    inv_sub_bytes(&mut state);
    inv_shift_rows(&mut state);
    add_round_key(&mut state, &round_keys.round(nr));

    state
}
