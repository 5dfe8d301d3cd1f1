//! Key expansion for all three key sizes and the equivalent-inverse schedule.

use crate::error::Result;
use crate::key::{KeySize, RoundKeys};
use crate::round::{inv_mix_column, sub_word};
use crate::sbox::RCON;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Expands `key` into the encryption schedule of `Nr + 1` round keys.
///
/// Fails with [`Error::InvalidKeySize`](crate::Error::InvalidKeySize) unless
/// `key` is 16, 24 or 32 bytes long.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    let size = KeySize::from_len(key.len())?;
    let nk = size.nk();
    let mut schedule = RoundKeys::zeroed(size);
    let w = schedule.words_mut();

    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..w.len() {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    tracing::trace!(key_size = %size, "expanded key schedule");
    Ok(schedule)
}

/// Derives the decryption schedule for the equivalent inverse cipher.
///
/// Round `i` of the result is round `Nr - i` of `enc`; every round other than
/// the first and last additionally goes through InvMixColumns.
pub fn inverse_schedule(enc: &RoundKeys) -> RoundKeys {
    let nr = enc.rounds();
    let mut dec = RoundKeys::zeroed(enc.key_size());
    let src = enc.words();
    let dst = dec.words_mut();

    for round in 0..=nr {
        let from = (nr - round) * 4;
        for col in 0..4 {
            let word = src[from + col];
            dst[round * 4 + col] = if round == 0 || round == nr {
                word
            } else {
                inv_mix_column(word)
            };
        }
    }

    tracing::trace!(key_size = %enc.key_size(), "derived inverse key schedule");
    dec
}
