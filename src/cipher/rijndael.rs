//! Rijndael, parameterized over both block size and key size — the family
//! AES is one fixed instance of (128-bit block, {128,192,256}-bit key).
//!
//! Each round applies [SubBytes](round::sub_bytes), [ShiftRows](round::shift_rows),
//! [MixColumns](round::mix_columns) and [AddRoundKey](round::add_round_key) to a
//! 4xNb state matrix, where `Nb = block_size / 4`. The number of rounds is
//! `max(Nb, Nk) + 6`. Key expansion and the S-box are documented in
//! [`keygen`] and [`sbox`] respectively.

pub mod keygen;
pub mod round;
pub mod sbox;

use {
    round::State,
    sbox::SBox,
    super::{BlockCipher, CipherError},
};

/// [`Rijndael::new`] accepts only these block/key sizes, in bytes.
pub const VALID_SIZES: [usize; 3] = [16, 24, 32];

/// A Rijndael block cipher instance for a fixed (block_size, key_size,
/// mod_poly) configuration.
pub struct Rijndael {
    block_size: usize,
    key_size: usize,
    num_rounds: usize,
    mod_poly: u8,
    sbox: SBox,
    round_keys: Option<Vec<Vec<u8>>>,
}

impl Rijndael {
    /// `mod_poly` selects the irreducible reduction polynomial for the
    /// cipher's $GF(2^8)$ arithmetic; pass [`crate::gfield::AES_MOD_POLY`]
    /// for the standard AES polynomial.
    pub fn new(block_size: usize, key_size: usize, mod_poly: u8) -> Result<Self, CipherError> {
        if !VALID_SIZES.contains(&block_size) {
            return Err(CipherError::InvalidBlockLength {
                expected: 16,
                actual: block_size,
            });
        }
        if !VALID_SIZES.contains(&key_size) {
            return Err(CipherError::InvalidKeyLength {
                expected: VALID_SIZES.to_vec(),
                actual: key_size,
            });
        }
        let num_rounds = num_rounds(block_size, key_size);
        Ok(Self {
            block_size,
            key_size,
            num_rounds,
            mod_poly,
            sbox: SBox::new(mod_poly),
            round_keys: None,
        })
    }

    fn nb(&self) -> usize {
        self.block_size / 4
    }

    fn load_state(&self, block: &[u8]) -> State {
        let nb = self.nb();
        let mut state = vec![vec![0u8; nb]; 4];
        for row in 0..4 {
            for col in 0..nb {
                state[row][col] = block[col * 4 + row];
            }
        }
        state
    }

    fn store_state(&self, state: &State) -> Vec<u8> {
        let nb = self.nb();
        let mut out = vec![0u8; self.block_size];
        for row in 0..4 {
            for col in 0..nb {
                out[col * 4 + row] = state[row][col];
            }
        }
        out
    }
}

fn num_rounds(block_size: usize, key_size: usize) -> usize {
    let nb = block_size / 4;
    let nk = key_size / 4;
    nb.max(nk) + 6
}

impl BlockCipher for Rijndael {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != self.key_size {
            return Err(CipherError::InvalidKeyLength {
                expected: vec![self.key_size],
                actual: key.len(),
            });
        }
        let nk = self.key_size / 4;
        self.round_keys = Some(keygen::expand_key(key, self.nb(), nk, self.num_rounds, &self.sbox));
        Ok(())
    }

    fn encrypt_block(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if plaintext.len() != self.block_size {
            return Err(CipherError::InvalidBlockLength {
                expected: self.block_size,
                actual: plaintext.len(),
            });
        }
        let round_keys = self.round_keys.as_ref().ok_or(CipherError::KeyNotSet)?;

        let mut state = self.load_state(plaintext);
        round::add_round_key(&mut state, &round_keys[0]);

        for r in 1..self.num_rounds {
            round::sub_bytes(&mut state, &self.sbox, false);
            round::shift_rows(&mut state, false);
            round::mix_columns(&mut state, self.mod_poly, false);
            round::add_round_key(&mut state, &round_keys[r]);
        }

        round::sub_bytes(&mut state, &self.sbox, false);
        round::shift_rows(&mut state, false);
        round::add_round_key(&mut state, &round_keys[self.num_rounds]);

        Ok(self.store_state(&state))
    }

    fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() != self.block_size {
            return Err(CipherError::InvalidBlockLength {
                expected: self.block_size,
                actual: ciphertext.len(),
            });
        }
        let round_keys = self.round_keys.as_ref().ok_or(CipherError::KeyNotSet)?;

        let mut state = self.load_state(ciphertext);
        round::add_round_key(&mut state, &round_keys[self.num_rounds]);

        for r in (1..self.num_rounds).rev() {
            round::shift_rows(&mut state, true);
            round::sub_bytes(&mut state, &self.sbox, true);
            round::add_round_key(&mut state, &round_keys[r]);
            round::mix_columns(&mut state, self.mod_poly, true);
        }

        round::shift_rows(&mut state, true);
        round::sub_bytes(&mut state, &self.sbox, true);
        round::add_round_key(&mut state, &round_keys[0]);

        Ok(self.store_state(&state))
    }

    fn block_size(&self) -> usize {
        self.block_size
    }
}
