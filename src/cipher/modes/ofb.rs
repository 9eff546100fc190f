use super::{check_iv, Mode, ModeError};
use crate::cipher::BlockCipher;

/// Output feedback: keystream blocks are generated by repeatedly
/// encrypting the feedback register, independent of the data. Encrypt and
/// decrypt are the same XOR-with-keystream operation.
pub struct Ofb {
    iv: Vec<u8>,
}

impl Ofb {
    pub fn new(iv: Vec<u8>) -> Self {
        Self { iv }
    }

    fn process(&self, cipher: &dyn BlockCipher, data: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_iv(&self.iv, block_size)?;

        let mut output = vec![0u8; data.len()];
        let mut feedback = self.iv.clone();

        for (i, chunk) in data.chunks(block_size).enumerate() {
            feedback = cipher.encrypt_block(&feedback).map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;

            let offset = i * block_size;
            for j in 0..chunk.len() {
                output[offset + j] = chunk[j] ^ feedback[j];
            }
        }

        Ok(output)
    }
}

impl Mode for Ofb {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError> {
        self.process(cipher, plaintext)
    }

    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError> {
        self.process(cipher, ciphertext)
    }
}
