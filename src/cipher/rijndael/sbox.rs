//! The Rijndael S-box: a nonlinear byte substitution built from the $GF(2^8)$
//! multiplicative inverse plus an affine transformation.
//!
//! Construction is expensive (256 field inversions), so it's computed once
//! per `mod_poly` choice and cached for the cipher's lifetime — see
//! [`SBox::new`].

use crate::gfield;

pub struct SBox {
    forward: [u8; 256],
    inverse: [u8; 256],
}

impl SBox {
    /// Build the forward and inverse substitution tables for the given
    /// reduction polynomial.
    ///
    /// For each byte `x`, let `y` be its multiplicative inverse in
    /// $GF(2^8)$ (with `y = 0` when `x = 0`, by convention). The substituted
    /// byte is the affine transformation `y XOR rot1(y) XOR rot2(y) XOR
    /// rot3(y) XOR rot4(y) XOR 0x63`, where `rotk` rotates left by `k` bits
    /// within the byte.
    pub fn new(mod_poly: u8) -> Self {
        let mut forward = [0u8; 256];
        for (x, slot) in forward.iter_mut().enumerate() {
            let y = if x == 0 {
                0
            } else {
                gfield::inverse(x as u8, mod_poly)
            };
            let mut result = y;
            result ^= y.rotate_left(1);
            result ^= y.rotate_left(2);
            result ^= y.rotate_left(3);
            result ^= y.rotate_left(4);
            result ^= 0x63;
            *slot = result;
        }

        let mut inverse = [0u8; 256];
        for (x, &f) in forward.iter().enumerate() {
            inverse[f as usize] = x as u8;
        }

        Self { forward, inverse }
    }

    pub fn sub(&self, val: u8) -> u8 {
        self.forward[val as usize]
    }

    pub fn inv_sub(&self, val: u8) -> u8 {
        self.inverse[val as usize]
    }
}
