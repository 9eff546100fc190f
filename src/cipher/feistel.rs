//! The generic Feistel network [`Des`](super::des::Des) is built on.
//!
//! A Feistel network splits each block into two halves and, each round,
//! folds a round function of one half and a round key into the other. The
//! construction is an involution of sorts: running the exact same rounds with
//! the round keys in reverse order undoes the encryption, which is why the
//! same round function can be reused verbatim for decryption.

use super::CipherError;

/// Produces the ordered sequence of round keys from a master key.
pub trait KeyScheduler {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError>;
}

/// The per-round mixing function `f(half_block, round_key) -> half_block`.
pub trait RoundFunction {
    fn apply(&self, half_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// A Feistel network parameterized over a [`KeyScheduler`] and a
/// [`RoundFunction`].
///
/// `block_size` must be even; each round operates on `block_size / 2`-byte
/// halves.
pub struct Feistel<K, R> {
    key_scheduler: K,
    round_function: R,
    num_rounds: usize,
    block_size: usize,
    round_keys: Option<Vec<Vec<u8>>>,
}

impl<K: KeyScheduler, R: RoundFunction> Feistel<K, R> {
    pub fn new(key_scheduler: K, round_function: R, num_rounds: usize, block_size: usize) -> Self {
        Self {
            key_scheduler,
            round_function,
            num_rounds,
            block_size,
            round_keys: None,
        }
    }

    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.round_keys = Some(self.key_scheduler.generate_round_keys(key)?);
        Ok(())
    }

    pub fn encrypt_block(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.run(plaintext, false)
    }

    pub fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.run(ciphertext, true)
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    fn run(&self, block: &[u8], reverse: bool) -> Result<Vec<u8>, CipherError> {
        if block.len() != self.block_size {
            return Err(CipherError::InvalidBlockLength {
                expected: self.block_size,
                actual: block.len(),
            });
        }
        let round_keys = self.round_keys.as_ref().ok_or(CipherError::KeyNotSet)?;

        let half = self.block_size / 2;
        let mut left = block[..half].to_vec();
        let mut right = block[half..].to_vec();

        let rounds: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..self.num_rounds).rev())
        } else {
            Box::new(0..self.num_rounds)
        };

        for round in rounds {
            let f_output = self
                .round_function
                .apply(&right, &round_keys[round])
                .map_err(|e| CipherError::Round {
                    round,
                    source: Box::new(e),
                })?;
            let new_left = right;
            let new_right: Vec<u8> = left
                .iter()
                .zip(f_output.iter())
                .map(|(a, b)| a ^ b)
                .collect();
            left = new_left;
            right = new_right;
        }

        let mut result = right;
        result.extend(left);
        Ok(result)
    }
}
