//! Block and state representation helpers.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Size of a block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Working state: four big-endian column words.
pub type State = [u32; 4];

/// Parses a block into column words.
#[inline]
pub fn load_state(block: &Block) -> State {
    core::array::from_fn(|col| {
        let i = col * 4;
        u32::from_be_bytes([block[i], block[i + 1], block[i + 2], block[i + 3]])
    })
}

/// Serializes column words back into `out`.
#[inline]
pub fn store_state(state: &State, out: &mut Block) {
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}
