use super::{check_iv, parallel_blocks, Mode, ModeError};
use crate::cipher::BlockCipher;

/// Counter mode: block `i`'s keystream is `Encrypt(IV + i)`, big-endian
/// counter addition. Stateless per block, so both directions dispatch
/// across worker threads.
pub struct Ctr {
    iv: Vec<u8>,
}

impl Ctr {
    pub fn new(iv: Vec<u8>) -> Self {
        Self { iv }
    }

    fn process(&self, cipher: &dyn BlockCipher, data: &[u8]) -> Result<Vec<u8>, ModeError> {
        let block_size = cipher.block_size();
        check_iv(&self.iv, block_size)?;

        let iv = &self.iv;
        parallel_blocks(data, block_size, |i, chunk| {
            let mut counter = iv.clone();
            increment_counter(&mut counter, i);
            let keystream = cipher.encrypt_block(&counter)?;
            let mut out = chunk.to_vec();
            for j in 0..out.len() {
                out[j] ^= keystream[j];
            }
            Ok(out)
        })
    }
}

fn increment_counter(counter: &mut [u8], mut value: usize) {
    for byte in counter.iter_mut().rev() {
        if value == 0 {
            break;
        }
        let sum = *byte as usize + value;
        *byte = (sum & 0xFF) as u8;
        value = sum >> 8;
    }
}

impl Mode for Ctr {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError> {
        self.process(cipher, plaintext)
    }

    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError> {
        self.process(cipher, ciphertext)
    }
}
