//! Optimal ate pairing over a 128-bit-secure Barreto-Naehrig curve.
//!
//! The public surface is [`curve::G1Affine`]/[`curve::G2Affine`] for
//! the two source groups and [`pairing::map`]/[`pairing::multi_map`]
//! for the bilinear pairing `e: G1 x G2 -> GT`, `GT` being the
//! multiplicative subgroup of [`fp12::Fp12`] of order `r`. Internals
//! (the `F_p^2`/`F_p^6`/`F_p^12` tower, the Miller loop, final
//! exponentiation) are exposed for testing and benchmarking but are not
//! meant to be driven directly by callers outside this crate.

pub mod curve;
pub mod error;
pub mod final_exp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
pub mod miller;
pub mod pairing;
pub mod params;

pub use curve::{G1Affine, G2Affine};
pub use error::PairingError;
pub use fp12::Fp12;
pub use pairing::{map, multi_map};
