//! DES, the canonical [Feistel network](crate::cipher::feistel).
//!
//! DES operates on 64-bit blocks with a 56-bit effective key (stored as 64
//! bits including 8 parity bits which are dropped by PC-1), in 16 rounds. The
//! key schedule rotates two 28-bit halves of the key by a per-round amount
//! and draws a 48-bit round key out of the concatenation each round. The round
//! function expands the 32-bit right half to 48 bits, XORs in the round key,
//! substitutes 6-bit groups down to 4 bits via eight S-boxes, and permutes
//! the result.
//!
//! Correctness is pinned to the standard FIPS 46 test vectors in
//! `src/test/des.rs`.

pub mod tables;

use {
    super::{
        feistel::{Feistel, KeyScheduler, RoundFunction},
        BlockCipher, CipherError,
    },
    crate::bitops::{self, PermuteConfig},
};

pub const BLOCK_SIZE: usize = 8;
pub const KEY_SIZE: usize = 8;
const NUM_ROUNDS: usize = 16;

struct DesKeyScheduler;

fn left_rotate28(value: u32, n: u32) -> u32 {
    let n = n % 28;
    ((value << n) | (value >> (28 - n))) & 0x0FFF_FFFF
}

impl KeyScheduler for DesKeyScheduler {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength {
                expected: vec![KEY_SIZE],
                actual: key.len(),
            });
        }

        let permuted = bitops::permute(key, &tables::PC1, PermuteConfig::DES)?;

        // Pad to 8 bytes (56 bits right-aligned) so it can be loaded as a u64.
        let mut padded = [0u8; 8];
        padded[1..].copy_from_slice(&permuted);
        let key56 = u64::from_be_bytes(padded);

        let mut c = (key56 >> 28) as u32;
        let mut d = (key56 & 0x0FFF_FFFF) as u32;

        let mut round_keys = Vec::with_capacity(NUM_ROUNDS);
        for shift in tables::LEFT_SHIFTS {
            c = left_rotate28(c, shift);
            d = left_rotate28(d, shift);

            let cd56 = (u64::from(c) << 28) | u64::from(d);
            let mut cd_padded = [0u8; 8];
            cd_padded.copy_from_slice(&cd56.to_be_bytes());
            let cd_bytes = &cd_padded[1..];

            let round_key = bitops::permute(cd_bytes, &tables::PC2, PermuteConfig::DES)?;
            round_keys.push(round_key);
        }

        Ok(round_keys)
    }
}

struct DesRoundFunction;

impl RoundFunction for DesRoundFunction {
    fn apply(&self, block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        if block.len() != 4 {
            return Err(CipherError::InvalidBlockLength {
                expected: 4,
                actual: block.len(),
            });
        }
        if round_key.len() != 6 {
            return Err(CipherError::InvalidKeyLength {
                expected: vec![6],
                actual: round_key.len(),
            });
        }

        let mut expanded = bitops::permute(block, &tables::E, PermuteConfig::DES)?;
        for (e, k) in expanded.iter_mut().zip(round_key) {
            *e ^= k;
        }

        let mut sbox_output = [0u8; 4];
        for i in 0..8 {
            let bit_pos = i * 6;
            let byte_idx = bit_pos / 8;
            let bit_in_byte = bit_pos % 8;

            let six_bits = if bit_in_byte <= 2 {
                (expanded[byte_idx] >> (2 - bit_in_byte)) & 0x3F
            } else {
                let high = expanded[byte_idx] << (bit_in_byte - 2);
                let low = expanded[byte_idx + 1] >> (10 - bit_in_byte);
                (high | low) & 0x3F
            };

            let row = ((six_bits & 0x20) >> 4) | (six_bits & 0x01);
            let col = (six_bits >> 1) & 0x0F;
            let value = tables::S_BOXES[i][row as usize][col as usize];

            if i % 2 == 0 {
                sbox_output[i / 2] = value << 4;
            } else {
                sbox_output[i / 2] |= value;
            }
        }

        Ok(bitops::permute(&sbox_output, &tables::P, PermuteConfig::DES)?)
    }
}

/// The DES block cipher: 64-bit blocks, 64-bit (56 effective) keys, 16 rounds.
pub struct Des {
    feistel: Feistel<DesKeyScheduler, DesRoundFunction>,
}

impl Default for Des {
    fn default() -> Self {
        Self::new()
    }
}

impl Des {
    pub fn new() -> Self {
        Self {
            feistel: Feistel::new(DesKeyScheduler, DesRoundFunction, NUM_ROUNDS, BLOCK_SIZE),
        }
    }
}

impl BlockCipher for Des {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength {
                expected: vec![KEY_SIZE],
                actual: key.len(),
            });
        }
        self.feistel.set_key(key)
    }

    fn encrypt_block(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if plaintext.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                expected: BLOCK_SIZE,
                actual: plaintext.len(),
            });
        }
        let permuted = bitops::permute(plaintext, &tables::IP, PermuteConfig::DES)?;
        let feistel_out = self.feistel.encrypt_block(&permuted)?;
        Ok(bitops::permute(&feistel_out, &tables::FP, PermuteConfig::DES)?)
    }

    fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                expected: BLOCK_SIZE,
                actual: ciphertext.len(),
            });
        }
        let permuted = bitops::permute(ciphertext, &tables::IP, PermuteConfig::DES)?;
        let feistel_out = self.feistel.decrypt_block(&permuted)?;
        Ok(bitops::permute(&feistel_out, &tables::FP, PermuteConfig::DES)?)
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
