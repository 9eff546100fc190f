//! The four transformations applied to Rijndael's 4xNb state matrix each
//! round: SubBytes, ShiftRows, MixColumns, AddRoundKey.

use {super::sbox::SBox, crate::gfield};

/// 4xNb byte matrix, row-major (`state[row][col]`).
pub type State = Vec<Vec<u8>>;

pub fn add_round_key(state: &mut State, round_key: &[u8]) {
    let nb = state[0].len();
    for row in 0..4 {
        for col in 0..nb {
            state[row][col] ^= round_key[col * 4 + row];
        }
    }
}

pub fn sub_bytes(state: &mut State, sbox: &SBox, inverse: bool) {
    for row in state.iter_mut() {
        for b in row.iter_mut() {
            *b = if inverse { sbox.inv_sub(*b) } else { sbox.sub(*b) };
        }
    }
}

/// Row `r`'s shift amount for a given block width (in words).
fn shift_for(row: usize, nb: usize) -> usize {
    if nb == 8 {
        [0, 1, 3, 4][row]
    } else {
        [0, 1, 2, 3][row]
    }
}

pub fn shift_rows(state: &mut State, inverse: bool) {
    let nb = state[0].len();
    let mut result = vec![vec![0u8; nb]; 4];
    for r in 0..4 {
        let shift = shift_for(r, nb);
        for c in 0..nb {
            let source_col = if inverse {
                (c + shift) % nb
            } else {
                (c + nb - shift % nb) % nb
            };
            result[r][c] = state[r][source_col];
        }
    }
    *state = result;
}

const MIX_FORWARD: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

const MIX_INVERSE: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

pub fn mix_columns(state: &mut State, mod_poly: u8, inverse: bool) {
    let nb = state[0].len();
    let matrix = if inverse { &MIX_INVERSE } else { &MIX_FORWARD };
    let mut result = vec![vec![0u8; nb]; 4];
    for c in 0..nb {
        for r in 0..4 {
            let mut sum = 0u8;
            for k in 0..4 {
                sum ^= gfield::mul(matrix[r][k], state[k][c], mod_poly);
            }
            result[r][c] = sum;
        }
    }
    *state = result;
}
