//! AES round transformations on the column-word state.
//!
//! Each state word is one column with row 0 in its most significant byte, so
//! row rotations become byte-lane permutations across the four words.

use crate::block::State;
use crate::gf::{gmul, xtime};
use crate::sbox::{inv_sbox, sbox};

const ROW0: u32 = 0xff00_0000;
const ROW1: u32 = 0x00ff_0000;
const ROW2: u32 = 0x0000_ff00;
const ROW3: u32 = 0x0000_00ff;

/// Substitutes every byte of `word` through the forward S-box.
#[inline]
pub fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

#[inline]
fn inv_sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(inv_sbox))
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for word in state.iter_mut() {
        *word = sub_word(*word);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for word in state.iter_mut() {
        *word = inv_sub_word(*word);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut State) {
    let t = *state;
    for (col, word) in state.iter_mut().enumerate() {
        *word = t[col] & ROW0
            | t[(col + 1) % 4] & ROW1
            | t[(col + 2) % 4] & ROW2
            | t[(col + 3) % 4] & ROW3;
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    let t = *state;
    for (col, word) in state.iter_mut().enumerate() {
        *word = t[col] & ROW0
            | t[(col + 3) % 4] & ROW1
            | t[(col + 2) % 4] & ROW2
            | t[(col + 1) % 4] & ROW3;
    }
}

fn mix_column(word: u32) -> u32 {
    let [a0, a1, a2, a3] = word.to_be_bytes();
    u32::from_be_bytes([
        xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3),
        (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3),
    ])
}

/// Inverse MixColumns of a single column word ({0e, 0b, 0d, 09} circulant).
pub fn inv_mix_column(word: u32) -> u32 {
    let [a0, a1, a2, a3] = word.to_be_bytes();
    u32::from_be_bytes([
        gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09),
        gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d),
        gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b),
        gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e),
    ])
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for word in state.iter_mut() {
        *word = mix_column(*word);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for word in state.iter_mut() {
        *word = inv_mix_column(*word);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s ^= *k;
    }
}
