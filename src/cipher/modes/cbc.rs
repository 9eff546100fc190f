use super::{check_aligned, check_iv, Mode, ModeError};
use crate::cipher::BlockCipher;

/// Cipher block chaining: each plaintext block is XORed with the previous
/// ciphertext block before encryption. Sequential by construction.
pub struct Cbc {
    iv: Vec<u8>,
}

impl Cbc {
    pub fn new(iv: Vec<u8>) -> Self {
        Self { iv }
    }
}

impl Mode for Cbc {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_aligned(plaintext, block_size)?;
        check_iv(&self.iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev = self.iv.clone();

        for (i, chunk) in plaintext.chunks(block_size).enumerate() {
            let mut block = chunk.to_vec();
            for j in 0..block_size {
                block[j] ^= prev[j];
            }
            let encrypted = cipher.encrypt_block(&block).map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;
            prev = encrypted.clone();
            ciphertext.extend(encrypted);
        }

        Ok(ciphertext)
    }

    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_aligned(ciphertext, block_size)?;
        check_iv(&self.iv, block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev = self.iv.clone();

        for (i, block) in ciphertext.chunks(block_size).enumerate() {
            let mut decrypted = cipher.decrypt_block(block).map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;
            for j in 0..block_size {
                decrypted[j] ^= prev[j];
            }
            prev = block.to_vec();
            plaintext.extend(decrypted);
        }

        Ok(plaintext)
    }
}
