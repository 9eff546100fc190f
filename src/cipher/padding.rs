//! Padding schemes that align arbitrary-length plaintext to a block-size
//! multiple for block-oriented [modes](super::modes).
//!
//! Exposing information about the validity of padding is dangerous — a
//! server that reports "bad padding" distinctly from "bad MAC"/"garbage
//! plaintext" hands an attacker a padding oracle. This module makes no effort
//! to defend against that (the toolkit as a whole does not provide
//! authenticated encryption, see the crate-level Non-goals), but the failure
//! mode is still reported as a structured error rather than silently
//! accepted.

use {rand::RngCore, std::fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// Pad with zero bytes; cannot be distinguished from plaintext that
    /// itself ends in `0x00`.
    Zeros,
    AnsiX923,
    Pkcs7,
    Iso10126,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingError {
    InvalidBlockSize(usize),
    /// Unpadding detected structural corruption: `pad_len` was 0, exceeded
    /// the data length, or the filler bytes didn't match the mode's
    /// invariant.
    InvalidPadding,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBlockSize(n) => write!(f, "invalid block size: {n}"),
            Self::InvalidPadding => f.write_str("invalid padding"),
        }
    }
}

impl std::error::Error for PaddingError {}

/// Pad `data` to a multiple of `block_size` under `mode`.
///
/// `pad_len = block_size - (data.len() % block_size)`, always in
/// `[1, block_size]` — when `data` is already block-aligned, a full extra
/// block of padding is appended (the standard PKCS7 convention).
pub fn pad(data: &[u8], block_size: usize, mode: PaddingMode) -> Result<Vec<u8>, PaddingError> {
    if block_size == 0 || block_size > 255 {
        return Err(PaddingError::InvalidBlockSize(block_size));
    }

    let pad_len = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);

    match mode {
        PaddingMode::Zeros => padded.resize(data.len() + pad_len, 0),
        PaddingMode::AnsiX923 => {
            padded.resize(data.len() + pad_len - 1, 0);
            padded.push(pad_len as u8);
        }
        PaddingMode::Pkcs7 => padded.resize(data.len() + pad_len, pad_len as u8),
        PaddingMode::Iso10126 => {
            let mut filler = vec![0u8; pad_len - 1];
            rand::thread_rng().fill_bytes(&mut filler);
            padded.extend(filler);
            padded.push(pad_len as u8);
        }
    }

    Ok(padded)
}

/// Remove padding added by [`pad`] under the same `mode`. There is no
/// cross-mode compatibility: unpadding data produced by a different mode is
/// undefined (may spuriously succeed or fail).
pub fn unpad(data: &[u8], mode: PaddingMode) -> Result<Vec<u8>, PaddingError> {
    if data.is_empty() {
        return Err(PaddingError::InvalidPadding);
    }

    // Zeros is the one mode that doesn't encode padLen in the last byte —
    // it can't, since the filler itself is zero — so it's stripped on its
    // own rather than through the padLen-guarded modes below.
    if mode == PaddingMode::Zeros {
        let mut end = data.len();
        while end > 0 && data[end - 1] == 0 {
            end -= 1;
        }
        return Ok(data[..end].to_vec());
    }

    let pad_len = *data.last().unwrap() as usize;
    if pad_len == 0 || pad_len > data.len() {
        return Err(PaddingError::InvalidPadding);
    }

    match mode {
        PaddingMode::Zeros => unreachable!(),
        PaddingMode::AnsiX923 => {
            let fill_start = data.len() - pad_len;
            if data[fill_start..data.len() - 1].iter().any(|&b| b != 0) {
                return Err(PaddingError::InvalidPadding);
            }
            Ok(data[..fill_start].to_vec())
        }
        PaddingMode::Pkcs7 => {
            let fill_start = data.len() - pad_len;
            if data[fill_start..].iter().any(|&b| b != pad_len as u8) {
                return Err(PaddingError::InvalidPadding);
            }
            Ok(data[..fill_start].to_vec())
        }
        PaddingMode::Iso10126 => Ok(data[..data.len() - pad_len].to_vec()),
    }
}
