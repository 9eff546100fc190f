use super::{check_aligned, check_iv, Mode, ModeError};
use crate::cipher::BlockCipher;

/// Propagating CBC: the feedback into the next block mixes both the
/// previous plaintext and previous ciphertext block, so a single flipped
/// ciphertext byte corrupts every following block's decryption (unlike
/// CBC, where corruption stays confined to two blocks).
pub struct Pcbc {
    iv: Vec<u8>,
}

impl Pcbc {
    pub fn new(iv: Vec<u8>) -> Self {
        Self { iv }
    }
}

impl Mode for Pcbc {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_aligned(plaintext, block_size)?;
        check_iv(&self.iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut feedback = self.iv.clone();

        for (i, chunk) in plaintext.chunks(block_size).enumerate() {
            let mut block = chunk.to_vec();
            for j in 0..block_size {
                block[j] ^= feedback[j];
            }
            let encrypted = cipher.encrypt_block(&block).map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;
            for j in 0..block_size {
                feedback[j] = chunk[j] ^ encrypted[j];
            }
            ciphertext.extend(encrypted);
        }

        Ok(ciphertext)
    }

    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_aligned(ciphertext, block_size)?;
        check_iv(&self.iv, block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut feedback = self.iv.clone();

        for (i, block) in ciphertext.chunks(block_size).enumerate() {
            let mut decrypted = cipher.decrypt_block(block).map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;
            for j in 0..block_size {
                decrypted[j] ^= feedback[j];
            }
            for j in 0..block_size {
                feedback[j] = decrypted[j] ^ block[j];
            }
            plaintext.extend(decrypted);
        }

        Ok(plaintext)
    }
}
