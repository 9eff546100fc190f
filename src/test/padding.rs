use crate::cipher::padding::{pad, unpad, PaddingError, PaddingMode};

const MODES: [PaddingMode; 4] = [
    PaddingMode::Zeros,
    PaddingMode::AnsiX923,
    PaddingMode::Pkcs7,
    PaddingMode::Iso10126,
];

#[test]
fn pad_then_unpad_round_trips_for_every_mode_and_length() {
    for mode in MODES {
        for len in [0usize, 1, 7, 8, 15, 16, 17] {
            let data: Vec<u8> = (0..len).map(|i| (i % 250 + 1) as u8).collect();
            let padded = pad(&data, 8, mode).unwrap();
            assert_eq!(padded.len() % 8, 0);
            assert!(padded.len() > data.len());

            let unpadded = unpad(&padded, mode).unwrap();
            assert_eq!(unpadded, data, "{mode:?} len={len} did not round trip");
        }
    }
}

#[test]
fn pkcs7_pad_fills_with_pad_length_byte() {
    let data = [1u8, 2, 3];
    let padded = pad(&data, 8, PaddingMode::Pkcs7).unwrap();
    assert_eq!(padded, vec![1, 2, 3, 5, 5, 5, 5, 5]);
}

#[test]
fn ansi_x923_pad_fills_with_zeros_then_length() {
    let data = [1u8, 2, 3];
    let padded = pad(&data, 8, PaddingMode::AnsiX923).unwrap();
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 5]);
}

#[test]
fn zeros_pad_fills_with_zero_bytes() {
    let data = [1u8, 2, 3];
    let padded = pad(&data, 8, PaddingMode::Zeros).unwrap();
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn pad_rejects_invalid_block_size() {
    assert_eq!(pad(&[1, 2, 3], 0, PaddingMode::Pkcs7), Err(PaddingError::InvalidBlockSize(0)));
    assert_eq!(pad(&[1, 2, 3], 256, PaddingMode::Pkcs7), Err(PaddingError::InvalidBlockSize(256)));
}

#[test]
fn unpad_rejects_corrupted_pkcs7_padding() {
    let mut padded = pad(&[1u8, 2, 3], 8, PaddingMode::Pkcs7).unwrap();
    let last = padded.len() - 1;
    padded[last - 1] = 0xFF;
    assert_eq!(unpad(&padded, PaddingMode::Pkcs7), Err(PaddingError::InvalidPadding));
}

#[test]
fn unpad_rejects_empty_input() {
    assert_eq!(unpad(&[], PaddingMode::Pkcs7), Err(PaddingError::InvalidPadding));
}
