//! Modes of operation: algorithms that extend a [`BlockCipher`] to data of
//! arbitrary length.
//!
//! ECB and CTR decompose into independent per-block work and are dispatched
//! across [`std::thread::scope`] worker threads, joining before returning and
//! surfacing the first error observed (remaining worker errors are
//! discarded, matching spec.md §5). CBC decryption is parallelizable in
//! principle (each block only needs its own ciphertext and the previous
//! ciphertext block) but is kept sequential here since nothing in this
//! toolkit calls for it. CBC encryption, PCBC, CFB and OFB are sequential by
//! construction: each block's input depends on the previous block's output.

use {
    super::{BlockCipher, CipherError},
    rand::RngCore,
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherModeTag {
    Ecb,
    Cbc,
    Pcbc,
    Cfb,
    Ofb,
    Ctr,
    RandomDelta,
}

impl CipherModeTag {
    /// Stream-like modes accept arbitrary-length input; block-oriented modes
    /// require input aligned to the cipher's block size.
    pub fn is_stream(self) -> bool {
        matches!(self, Self::Cfb | Self::Ofb | Self::Ctr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    InvalidInputLength { block_size: usize, actual: usize },
    InvalidIv { expected: usize, actual: usize },
    Cipher { block_index: usize, source: Box<CipherError> },
    Unsupported(&'static str),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputLength { block_size, actual } => write!(
                f,
                "input length {actual} is not a multiple of block size {block_size}"
            ),
            Self::InvalidIv { expected, actual } => {
                write!(f, "IV length must be {expected}, got {actual}")
            }
            Self::Cipher { block_index, source } => {
                write!(f, "block {block_index}: {source}")
            }
            Self::Unsupported(name) => write!(f, "mode {name} is not supported"),
        }
    }
}

impl std::error::Error for ModeError {}

impl From<CipherError> for ModeError {
    fn from(e: CipherError) -> Self {
        Self::Cipher {
            block_index: 0,
            source: Box::new(e),
        }
    }
}

/// A mode of operation: extends a [`BlockCipher`] to data of arbitrary
/// (stream modes) or block-aligned (block-oriented modes) length.
pub trait Mode {
    fn encrypt(&self, cipher: &dyn BlockCipher, plaintext: &[u8]) -> Result<Vec<u8>, ModeError>;
    fn decrypt(&self, cipher: &dyn BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>, ModeError>;
}

fn check_aligned(data: &[u8], block_size: usize) -> Result<(), ModeError> {
    if !data.len().is_multiple_of(block_size) {
        return Err(ModeError::InvalidInputLength {
            block_size,
            actual: data.len(),
        });
    }
    Ok(())
}

fn check_iv(iv: &[u8], block_size: usize) -> Result<(), ModeError> {
    if iv.len() != block_size {
        return Err(ModeError::InvalidIv {
            expected: block_size,
            actual: iv.len(),
        });
    }
    Ok(())
}

/// Run `f(block_index, block)` over every `block_size`-sized chunk of `data`
/// on a scoped worker thread per block, writing results into disjoint
/// regions of the output. Surfaces the first error observed by completion
/// order; the rest are discarded.
fn parallel_blocks<F>(
    data: &[u8],
    block_size: usize,
    f: F,
) -> Result<Vec<u8>, ModeError>
where
    F: Fn(usize, &[u8]) -> Result<Vec<u8>, CipherError> + Sync,
{
    let num_blocks = data.len().div_ceil(block_size);
    let mut output = vec![0u8; data.len()];
    let mut chunks: Vec<&mut [u8]> = output.chunks_mut(block_size).collect();

    let first_err = std::sync::Mutex::new(None);
    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(num_blocks);
        for (i, out_chunk) in chunks.drain(..).enumerate() {
            let offset = i * block_size;
            let end = (offset + block_size).min(data.len());
            let input = &data[offset..end];
            let f = &f;
            let first_err = &first_err;
            handles.push(scope.spawn(move || match f(i, input) {
                Ok(result) => {
                    out_chunk.copy_from_slice(&result[..out_chunk.len()]);
                }
                Err(e) => {
                    let mut guard = first_err.lock().unwrap();
                    if guard.is_none() {
                        *guard = Some(ModeError::Cipher {
                            block_index: i,
                            source: Box::new(e),
                        });
                    }
                }
            }));
        }
        for h in handles {
            let _ = h.join();
        }
    });

    if let Some(e) = first_err.into_inner().unwrap() {
        return Err(e);
    }
    Ok(output)
}

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;
mod pcbc;
mod random_delta;

pub use {
    cbc::Cbc, cfb::Cfb, ctr::Ctr, ecb::Ecb, ofb::Ofb, pcbc::Pcbc, random_delta::RandomDelta,
};

/// Generate a cryptographically random IV of `size` bytes.
pub fn generate_iv(size: usize) -> Vec<u8> {
    let mut iv = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut iv);
    iv
}
