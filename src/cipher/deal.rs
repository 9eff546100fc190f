//! DEAL: a Feistel construction over 128-bit blocks using [`Des`] as its round
//! function.
//!
//! DEAL's key schedule runs a reference DES instance, keyed with the fixed
//! constant `0123456789ABCDEF`, over the key material to derive one 64-bit
//! DES key per round. Per the redesign in spec.md §9 / SPEC_FULL.md §5, all
//! of that round-key derivation *and* the per-round DES key scheduling both
//! happen once, at `set_key` time: `set_key` builds one already-keyed [`Des`]
//! instance per round and stores them, so `encrypt_block`/`decrypt_block`
//! only ever call `encrypt_block` on an already-scheduled instance — never
//! `set_key` on a shared, mutable DES instance — and parallel modes can call
//! them from multiple threads without synchronization or redundant
//! recomputation of the DES key schedule.

use super::{des::Des, BlockCipher, CipherError};

pub const BLOCK_SIZE: usize = 16;

const FIXED_KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

/// The DEAL block cipher, parameterized by key size (16, 24, or 32 bytes).
pub struct Deal {
    key_size: usize,
    num_rounds: usize,
    round_ciphers: Option<Vec<Des>>,
}

impl Deal {
    pub fn new(key_size: usize) -> Result<Self, CipherError> {
        if ![16, 24, 32].contains(&key_size) {
            return Err(CipherError::InvalidKeyLength {
                expected: vec![16, 24, 32],
                actual: key_size,
            });
        }
        let num_rounds = if key_size == 32 { 8 } else { 6 };
        Ok(Self {
            key_size,
            num_rounds,
            round_ciphers: None,
        })
    }

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let mut key_gen_des = Des::new();
        key_gen_des.set_key(&FIXED_KEY)?;

        let num_key_blocks = key.len() / 8;
        let key_blocks: Vec<&[u8]> = key.chunks(8).collect();

        let mut round_keys = Vec::with_capacity(self.num_rounds);
        let mut prev_round_key = [0u8; 8];

        for round in 0..self.num_rounds {
            let mut input = [0u8; 8];
            input.copy_from_slice(key_blocks[round % num_key_blocks]);
            for i in 0..8 {
                input[i] ^= prev_round_key[i];
            }

            if round >= num_key_blocks {
                let h = generate_h_constant(1usize << (round - num_key_blocks));
                for i in 0..8 {
                    input[i] ^= h[i];
                }
            }

            let encrypted = key_gen_des.encrypt_block(&input)?;
            prev_round_key.copy_from_slice(&encrypted);
            round_keys.push(encrypted);
        }

        Ok(round_keys)
    }
}

/// Build the 8-byte word with bit `bit_position` set (0-indexed from the
/// low-order bit of the first byte). Grounded in `generateHConstant` in
/// `internal/deal/deal.go` of the original Go source.
fn generate_h_constant(bit_position: usize) -> [u8; 8] {
    let mut h = [0u8; 8];
    let byte_index = bit_position / 8;
    let bit_index = bit_position % 8;
    if byte_index < 8 {
        h[byte_index] = 1 << bit_index;
    }
    h
}

impl BlockCipher for Deal {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != self.key_size {
            return Err(CipherError::InvalidKeyLength {
                expected: vec![self.key_size],
                actual: key.len(),
            });
        }
        let round_keys = self.generate_round_keys(key)?;
        let mut round_ciphers = Vec::with_capacity(round_keys.len());
        for round_key in &round_keys {
            let mut des = Des::new();
            des.set_key(round_key)?;
            round_ciphers.push(des);
        }
        self.round_ciphers = Some(round_ciphers);
        Ok(())
    }

    fn encrypt_block(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if plaintext.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                expected: BLOCK_SIZE,
                actual: plaintext.len(),
            });
        }
        let round_ciphers = self.round_ciphers.as_ref().ok_or(CipherError::KeyNotSet)?;

        let mut left = plaintext[0..8].to_vec();
        let mut right = plaintext[8..16].to_vec();

        for (round, des) in round_ciphers.iter().enumerate() {
            let f_output = des.encrypt_block(&left).map_err(|e| CipherError::Round {
                round,
                source: Box::new(e),
            })?;
            let new_right: Vec<u8> = f_output.iter().zip(&right).map(|(a, b)| a ^ b).collect();
            (left, right) = (new_right, left);
        }

        let mut ciphertext = left;
        ciphertext.extend(right);
        Ok(ciphertext)
    }

    fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                expected: BLOCK_SIZE,
                actual: ciphertext.len(),
            });
        }
        let round_ciphers = self.round_ciphers.as_ref().ok_or(CipherError::KeyNotSet)?;

        let mut left = ciphertext[0..8].to_vec();
        let mut right = ciphertext[8..16].to_vec();

        for round in (0..self.num_rounds).rev() {
            (left, right) = (right, left);

            let des = &round_ciphers[round];
            let f_output = des.encrypt_block(&left).map_err(|e| CipherError::Round {
                round,
                source: Box::new(e),
            })?;
            right = f_output.iter().zip(&right).map(|(a, b)| a ^ b).collect();
        }

        let mut plaintext = left;
        plaintext.extend(right);
        Ok(plaintext)
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
