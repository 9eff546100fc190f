//! A symmetric-cipher and RSA toolkit: generic Feistel networks (DES,
//! DEAL), a parameterized Rijndael, block cipher modes of operation,
//! padding schemes, $GF(2^8)$ arithmetic, and the number theory behind
//! RSA — modular exponentiation, primality testing, and the Wiener
//! attack on small private exponents.
//!
//! Nothing here is vetted for production use: there is no authenticated
//! encryption, no constant-time arithmetic, and the primality tests are
//! tunable down to trivially-breakable confidence levels. It exists to
//! make the mechanics of these algorithms inspectable.

#[cfg(test)]
mod test;

pub mod bitops;
pub mod cipher;
pub mod gfield;
pub mod numtheory;
pub mod primality;
pub mod rsa;
pub mod wiener;

pub use cipher::{
    context::{CipherContext, CipherResult, ContextError},
    deal::Deal,
    des::Des,
    modes::{generate_iv, CipherModeTag},
    padding::PaddingMode,
    rijndael::Rijndael,
    BlockCipher, CipherError,
};
pub use gfield::AES_MOD_POLY;
pub use primality::PrimalityTest;
pub use rsa::{RsaError, RsaKeyPair, RsaService};
