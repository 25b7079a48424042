//! `field-core` is the generic big-integer / Montgomery prime-field
//! backend that the pairing tower builds on. It owns exactly the pieces
//! that a curve-agnostic `F_p` implementation needs — limb arithmetic,
//! Montgomery reduction, encode/decode and inversion — and nothing about
//! towers, curves or pairings.

pub mod biginteger;
pub mod fp;

pub use biginteger::BigInteger256;
pub use fp::{Fp256, FpParameters};
