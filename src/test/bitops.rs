use crate::bitops::{permute, BitIndexing, BitNumbering, PermuteConfig};

#[test]
fn permute_reverses_byte_order_of_bits_example() {
    let p_block: Vec<i64> = (9..=16).chain(1..=8).collect();
    let config = PermuteConfig {
        indexing: BitIndexing::LsbFirst,
        numbering: BitNumbering::OneBased,
    };

    let result = permute(&[0xFF, 0x00], &p_block, config).unwrap();
    assert_eq!(result, vec![0x00, 0xFF]);
}

#[test]
fn permute_des_pc1_produces_56_bits() {
    let key = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
    let result = permute(&key, &crate::cipher::des::tables::PC1, PermuteConfig::DES).unwrap();
    assert_eq!(result.len(), 7);
}

#[test]
fn permute_rejects_out_of_range_index() {
    let result = permute(&[0xFF], &[9], PermuteConfig::DES);
    assert!(result.is_err());
}

#[test]
fn permute_rejects_empty_p_block() {
    let result = permute(&[0xFF], &[], PermuteConfig::DES);
    assert!(result.is_err());
}
