//! AES (Rijndael) block cipher following FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) arithmetic and compile-time generated S-boxes.
//! - Key expansion for 128, 192 and 256-bit keys, plus the equivalent-inverse
//!   decryption schedule.
//! - Single-block encryption and decryption through [`Aes`].
//!
//! Modes of operation and padding are left to callers. Substitution is table
//! driven, so the implementation should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::Aes;
pub use crate::error::{Error, Result};
pub use crate::key::{KeySize, RoundKeys, MAX_ROUNDS};
pub use crate::schedule::{expand_key, inverse_schedule};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
