//! Key sizes and expanded round-key storage.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::State;
use crate::error::{Error, Result};

/// Largest round count (AES-256).
pub const MAX_ROUNDS: usize = 14;

const MAX_WORDS: usize = 4 * (MAX_ROUNDS + 1);

/// Supported AES key lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its key size.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(Error::InvalidKeySize(other)),
        }
    }

    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        self.bytes() / 4
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.nk() + 6
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Expanded key schedule of `Nr + 1` round keys.
///
/// Words live in one contiguous buffer indexed by `round * 4 + column`; the
/// buffer is sized for AES-256 and only the leading `4 * (Nr + 1)` words are
/// meaningful. The words are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    words: [u32; MAX_WORDS],
    #[zeroize(skip)]
    size: KeySize,
}

impl RoundKeys {
    pub(crate) fn zeroed(size: KeySize) -> Self {
        Self {
            words: [0u32; MAX_WORDS],
            size,
        }
    }

    /// Key size this schedule was derived from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Number of round keys, always `Nr + 1`.
    pub fn len(&self) -> usize {
        self.rounds() + 1
    }

    /// Always false; a schedule holds at least eleven round keys.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the round key at `round` (`0..=Nr`).
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    #[inline]
    pub fn round(&self, round: usize) -> State {
        assert!(round < self.len(), "round {round} out of range");
        let base = round * 4;
        [
            self.words[base],
            self.words[base + 1],
            self.words[base + 2],
            self.words[base + 3],
        ]
    }

    /// All schedule words in round order.
    pub fn words(&self) -> &[u32] {
        &self.words[..4 * self.len()]
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u32] {
        let len = 4 * self.len();
        &mut self.words[..len]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
