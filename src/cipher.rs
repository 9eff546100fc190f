//! Block ciphers and the scaffolding ([`feistel`], [`modes`], [`padding`])
//! needed to turn them into ciphers over data of arbitrary length.
//!
//! The only thing modes and [`context::CipherContext`] know about a cipher is
//! the [`BlockCipher`] trait: set a key, encrypt or decrypt one block, report
//! the block size. Everything else — [`Des`](des::Des), [`Deal`](deal::Deal),
//! [`Rijndael`](rijndael::Rijndael) — is a value behind that trait, composed
//! by reference rather than inherited from.

pub mod context;
pub mod deal;
pub mod des;
pub mod feistel;
pub mod modes;
pub mod padding;
pub mod rijndael;

use std::fmt;

/// Errors a [`BlockCipher`] implementation can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Wrong key length was passed to `set_key`.
    InvalidKeyLength { expected: Vec<usize>, actual: usize },
    /// Wrong block length was passed to `encrypt_block`/`decrypt_block`.
    InvalidBlockLength { expected: usize, actual: usize },
    /// A block operation was attempted before `set_key`.
    KeyNotSet,
    /// A round of the Feistel network or DEAL failed (context included).
    Round { round: usize, source: Box<CipherError> },
    /// A bit permutation step failed.
    Permutation(crate::bitops::BitOpsError),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength { expected, actual } => write!(
                f,
                "invalid key length: expected one of {expected:?}, got {actual}"
            ),
            Self::InvalidBlockLength { expected, actual } => {
                write!(f, "invalid block length: expected {expected}, got {actual}")
            }
            Self::KeyNotSet => f.write_str("encrypt/decrypt called before set_key"),
            Self::Round { round, source } => write!(f, "round {round} failed: {source}"),
            Self::Permutation(e) => write!(f, "permutation failed: {e}"),
        }
    }
}

impl std::error::Error for CipherError {}

impl From<crate::bitops::BitOpsError> for CipherError {
    fn from(e: crate::bitops::BitOpsError) -> Self {
        Self::Permutation(e)
    }
}

/// A block cipher: a keyed permutation of fixed-size byte blocks.
///
/// A block cipher alone does not fulfill the definition of a cipher over
/// arbitrary-length data — for that it must be composed with a
/// [mode of operation](modes::Mode) and, for block-oriented modes, a
/// [padding scheme](padding::Padding). [`context::CipherContext`] performs
/// that composition.
///
/// `set_key` must be called before `encrypt_block`/`decrypt_block`; calling
/// either first is a precondition failure ([`CipherError::KeyNotSet`]), not a
/// panic, since a `CipherContext` constructs the cipher and keys it in the
/// same step and a directly-constructed cipher should fail the same way a
/// misused one over FFI or a trait object would.
pub trait BlockCipher: Sync {
    /// Compute and store this cipher's round-key schedule for `key`.
    /// Replaces any previously stored schedule.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;

    /// Encrypt one block of exactly [`block_size`](Self::block_size) bytes.
    fn encrypt_block(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// Decrypt one block of exactly [`block_size`](Self::block_size) bytes.
    fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// The fixed block size this cipher operates on, in bytes.
    fn block_size(&self) -> usize;
}
