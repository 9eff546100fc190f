use super::{check_aligned, parallel_blocks, Mode, ModeError};
use crate::cipher::BlockCipher;

/// Electronic codebook: every block encrypted independently under the same
/// key. Carries no IV and leaks repeated plaintext blocks as repeated
/// ciphertext blocks; kept for completeness and parallelizes trivially.
pub struct Ecb;

impl Mode for Ecb {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError> {
        check_aligned(plaintext, cipher.block_size())?;
        parallel_blocks(plaintext, cipher.block_size(), |_, block| {
            cipher.encrypt_block(block)
        })
    }

    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError> {
        check_aligned(ciphertext, cipher.block_size())?;
        parallel_blocks(ciphertext, cipher.block_size(), |_, block| {
            cipher.decrypt_block(block)
        })
    }
}
