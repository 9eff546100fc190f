//! Bit-level permutation over byte arrays.
//!
//! [`permute`] is the single primitive [DES](crate::Des) builds all of its
//! standardized tables (IP, FP, PC-1, PC-2, E, P) on top of. A permutation is
//! simply a list of source bit indices: output bit `i` is source bit
//! `p_block[i]`. The only subtlety is how bits are numbered within a byte, and
//! whether the table counts from 0 or from 1 — both are configurable so the
//! same primitive can reproduce the textbook (one-based, most-significant-bit
//! first) numbering used by FIPS 46 without silently assuming it.

use std::fmt;

/// Whether bit position 0 within a byte is the least or most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitIndexing {
    LsbFirst,
    MsbFirst,
}

/// Whether source indices in a P-block are counted from 0 or from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitNumbering {
    ZeroBased,
    OneBased,
}

/// Configuration for [`permute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermuteConfig {
    pub indexing: BitIndexing,
    pub numbering: BitNumbering,
}

impl PermuteConfig {
    /// The numbering DES's standardized tables (IP, FP, PC-1, PC-2, E, P) are
    /// written in.
    pub const DES: Self = Self {
        indexing: BitIndexing::MsbFirst,
        numbering: BitNumbering::OneBased,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOpsError {
    /// A source index in the P-block was negative (post zero-based
    /// adjustment) or `>= 8 * data.len()`.
    IndexOutOfRange { index: i64, total_bits: usize },
    /// The P-block had no entries.
    EmptyPBlock,
}

impl fmt::Display for BitOpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, total_bits } => write!(
                f,
                "bit index {index} out of range [0, {total_bits})"
            ),
            Self::EmptyPBlock => f.write_str("P-block cannot be empty"),
        }
    }
}

impl std::error::Error for BitOpsError {}

/// Permute the bits of `data` according to `p_block`.
///
/// Output bit `i` is source bit `p_block[i]` (adjusted for
/// [`BitNumbering::OneBased`]), drawn from `data` viewed as `8 * data.len()`
/// bits under `config.indexing`. The output is `ceil(p_block.len() / 8)`
/// bytes, packed under the same indexing orientation as the input.
pub fn permute(
    data: &[u8],
    p_block: &[i64],
    config: PermuteConfig,
) -> Result<Vec<u8>, BitOpsError> {
    let total_bits = data.len() * 8;
    if p_block.is_empty() {
        return Err(BitOpsError::EmptyPBlock);
    }

    let bits = bytes_to_bits(data, config.indexing);

    let mut output_bits = Vec::with_capacity(p_block.len());
    for &src in p_block {
        let src = match config.numbering {
            BitNumbering::OneBased => src - 1,
            BitNumbering::ZeroBased => src,
        };
        if src < 0 || src as usize >= total_bits {
            return Err(BitOpsError::IndexOutOfRange {
                index: src,
                total_bits,
            });
        }
        output_bits.push(bits[src as usize]);
    }

    Ok(bits_to_bytes(&output_bits, config.indexing))
}

fn bytes_to_bits(data: &[u8], indexing: BitIndexing) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for &b in data {
        match indexing {
            BitIndexing::LsbFirst => {
                for i in 0..8 {
                    bits.push((b >> i) & 1);
                }
            }
            BitIndexing::MsbFirst => {
                for i in (0..8).rev() {
                    bits.push((b >> i) & 1);
                }
            }
        }
    }
    bits
}

fn bits_to_bytes(bits: &[u8], indexing: BitIndexing) -> Vec<u8> {
    let num_bytes = bits.len().div_ceil(8);
    let mut result = vec![0u8; num_bytes];
    for (chunk_idx, chunk) in bits.chunks(8).enumerate() {
        let mut b = 0u8;
        match indexing {
            BitIndexing::LsbFirst => {
                for &bit in chunk.iter().rev() {
                    b = (b << 1) | bit;
                }
            }
            BitIndexing::MsbFirst => {
                for &bit in chunk {
                    b = (b << 1) | bit;
                }
            }
        }
        result[chunk_idx] = b;
    }
    result
}
