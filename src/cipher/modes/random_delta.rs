use super::{check_iv, Mode, ModeError};
use crate::cipher::BlockCipher;
use rand::RngCore;

/// A CBC variant where every block additionally mixes in a fresh random
/// delta, independent of key and IV. The deltas are generated per message,
/// prepended to the ciphertext in the clear (one block-sized delta per
/// data block), and consumed by the receiver to undo the mixing — they add
/// diffusion without needing to be secret.
pub struct RandomDelta {
    iv: Vec<u8>,
}

impl RandomDelta {
    pub fn new(iv: Vec<u8>) -> Self {
        Self { iv }
    }
}

impl Mode for RandomDelta {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_iv(&self.iv, block_size)?;

        let num_blocks = plaintext.len().div_ceil(block_size);
        let mut deltas = Vec::with_capacity(num_blocks);
        let mut rng = rand::thread_rng();
        for _ in 0..num_blocks {
            let mut delta = vec![0u8; block_size];
            rng.fill_bytes(&mut delta);
            deltas.push(delta);
        }

        let mut ciphertext = Vec::with_capacity(num_blocks * block_size + plaintext.len());
        for delta in &deltas {
            ciphertext.extend_from_slice(delta);
        }

        let mut prev = self.iv.clone();
        for (i, chunk) in plaintext.chunks(block_size).enumerate() {
            let mut block = chunk.to_vec();
            for j in 0..block.len() {
                block[j] ^= prev[j] ^ deltas[i][j];
            }
            let encrypted = cipher.encrypt_block(&block).map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;
            prev = encrypted.clone();
            ciphertext.extend_from_slice(&encrypted[..chunk.len()]);
        }

        Ok(ciphertext)
    }

    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_iv(&self.iv, block_size)?;

        let num_blocks = (ciphertext.len() / block_size) / 2;
        if num_blocks == 0 {
            return Err(ModeError::InvalidInputLength {
                block_size,
                actual: ciphertext.len(),
            });
        }

        let header_len = num_blocks * block_size;
        let deltas: Vec<&[u8]> = ciphertext[..header_len].chunks(block_size).collect();
        let body = &ciphertext[header_len..];

        let mut plaintext = vec![0u8; body.len()];
        let mut prev = self.iv.clone();

        for (i, chunk) in body.chunks(block_size).enumerate() {
            let mut decrypted = cipher.decrypt_block(chunk).map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;
            for j in 0..chunk.len() {
                decrypted[j] ^= prev[j] ^ deltas[i][j];
            }
            let offset = i * block_size;
            plaintext[offset..offset + chunk.len()].copy_from_slice(&decrypted[..chunk.len()]);
            prev = chunk.to_vec();
        }

        Ok(plaintext)
    }
}
