//! Cross-cutting tests that don't belong to a single module: known-answer
//! vectors, and round-trip/determinism properties exercised across the
//! whole cipher x mode x padding combination space.

mod bitops;
mod des;
mod gfield;
mod numtheory;
mod padding;
mod primality;
mod roundtrip;
mod rsa;
mod wiener;
