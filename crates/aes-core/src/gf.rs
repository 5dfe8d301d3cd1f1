//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies by `x` (doubling) with reduction.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements.
#[inline]
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fips_197_products() {
        // FIPS-197 section 4.2 worked examples.
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn identity_and_zero() {
        for x in 0..=255u8 {
            assert_eq!(gmul(x, 1), x);
            assert_eq!(gmul(1, x), x);
            assert_eq!(gmul(x, 0), 0);
        }
    }

    #[test]
    fn commutative() {
        for a in (0..=255u8).step_by(7) {
            for b in 0..=255u8 {
                assert_eq!(gmul(a, b), gmul(b, a));
            }
        }
    }

    #[test]
    fn every_nonzero_element_has_an_inverse() {
        for a in 1..=255u8 {
            assert_eq!((1..=255u8).filter(|&b| gmul(a, b) == 1).count(), 1);
        }
    }
}
