//! Substitution boxes and key-expansion round constants.
//!
//! Both S-boxes are built at compile time from the multiplicative inverse in
//! GF(2^8) followed by the Rijndael affine map, so the statics below are plain
//! read-only data.

/// Round constants `x^(i)` in GF(2^8); key expansion consumes at most ten.
pub const RCON: [u8; 16] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d, 0x9a, 0x2f,
];

const FORWARD: [u8; 256] = gen_sbox();

/// Forward S-box.
pub static SBOX: [u8; 256] = FORWARD;

/// Inverse S-box.
pub static INV_SBOX: [u8; 256] = gen_inv_sbox(&FORWARD);

/// Walks the multiplicative group with generator 3, keeping `q = p^-1`.
const fn gen_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut p = 1u8;
    let mut q = 1u8;

    loop {
        // p *= 3
        p = p ^ (p << 1) ^ (if p & 0x80 != 0 { 0x1b } else { 0 });

        // q /= 3
        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        q ^= if q & 0x80 != 0 { 0x09 } else { 0 };

        sbox[p as usize] =
            q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4) ^ 0x63;

        if p == 1 {
            break;
        }
    }

    // Zero has no inverse and maps through the affine constant alone.
    sbox[0] = 0x63;
    sbox
}

const fn gen_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

/// Looks up the forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Looks up the inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}
