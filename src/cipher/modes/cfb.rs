use super::{check_iv, Mode, ModeError};
use crate::cipher::BlockCipher;

/// Cipher feedback: turns the block cipher into a self-synchronizing
/// stream cipher by always running the forward direction (`EncryptBlock`)
/// over a feedback register, even when decrypting. Accepts input of any
/// length; a short final block is XORed against a prefix of the keystream
/// and the register absorbs only that many bytes.
pub struct Cfb {
    iv: Vec<u8>,
}

impl Cfb {
    pub fn new(iv: Vec<u8>) -> Self {
        Self { iv }
    }
}

/// `ciphertext_is_input` is true when decrypting (the register tracks
/// ciphertext bytes, which on decrypt are the input rather than the output).
fn process(
    cipher: &dyn BlockCipher,
    iv: &[u8],
    data: &[u8],
    ciphertext_is_input: bool,
) -> Result<Vec<u8>, ModeError> {
    let block_size = cipher.block_size();
    check_iv(iv, block_size)?;

    let mut output = vec![0u8; data.len()];
    let mut register = iv.to_vec();

    for (i, chunk) in data.chunks(block_size).enumerate() {
        let keystream = cipher
            .encrypt_block(&register)
            .map_err(|e| ModeError::Cipher {
                block_index: i,
                source: Box::new(e),
            })?;

        let offset = i * block_size;
        let out_chunk = &mut output[offset..offset + chunk.len()];
        for j in 0..chunk.len() {
            out_chunk[j] = chunk[j] ^ keystream[j];
        }

        let ciphertext_bytes: &[u8] = if ciphertext_is_input { chunk } else { out_chunk };
        register = if ciphertext_bytes.len() == register.len() {
            ciphertext_bytes.to_vec()
        } else {
            let mut next = register[ciphertext_bytes.len()..].to_vec();
            next.extend_from_slice(ciphertext_bytes);
            next
        };
    }

    Ok(output)
}

impl Mode for Cfb {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError> {
        process(cipher, &self.iv, plaintext, false)
    }

    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError> {
        process(cipher, &self.iv, ciphertext, true)
    }
}
