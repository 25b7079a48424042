//! Compile-time constants for the one BN curve this crate implements:
//! prime `p`, group order `r`, the two generators, the Miller-loop seed
//! and the precomputed Frobenius twist constants.
//!
//! Every constant below is bit-exact with the curve definition; the
//! comment above each hex literal names the quantity it represents so a
//! reviewer can check it against the curve specification without
//! re-deriving the Montgomery encoding by hand.

use field_core::{BigInteger256, Fp256, FpParameters};

/// Montgomery parameters for the base field `F_p`.
pub struct FqParameters;

impl FpParameters for FqParameters {
    // p = 2523648240000001BA344D80000000086121000000000013A700000000000013
    const MODULUS: BigInteger256 = BigInteger256::new([
        0xa700000000000013,
        0x6121000000000013,
        0xba344d8000000008,
        0x2523648240000001,
    ]);
    const R: BigInteger256 = BigInteger256::new([
        0x15ffffffffffff8e,
        0xb939ffffffffff8a,
        0xa2c62effffffffcd,
        0x212ba4f27ffffff5,
    ]);
    const R2: BigInteger256 = BigInteger256::new([
        0xb3e886745370473d,
        0x55efbf6e8c1cc3f1,
        0x281e3a1b7f86954f,
        0x1b0a32fdf6403a3d,
    ]);
    const INV: u64 = 0x0843_5e50_d794_35e5;
}

/// An element of `F_p`, in Montgomery form.
pub type Fq = Fp256<FqParameters>;

/// Group order `r` (the size of the prime-order subgroups `G1`, `G2`,
/// `GT`), as a plain (non-Montgomery) big integer — only ever used as an
/// exponent.
pub const R_ORDER: BigInteger256 = BigInteger256::new([
    0xa10000000000000d,
    0xff9f800000000010,
    0xba344d8000000007,
    0x2523648240000001,
]);

/// G1 generator, x-coordinate, already Montgomery-encoded.
pub const G1_GENERATOR_X: Fq = Fq::new(BigInteger256::new([
    0x9100000000000085,
    0xa7e7000000000089,
    0x176e1e800000003a,
    0x03f7bf8fc000000c,
]));
/// G1 generator, y-coordinate (`y = 1`), Montgomery-encoded (`= R`).
pub const G1_GENERATOR_Y: Fq = Fq::new(BigInteger256::new([
    0x15ffffffffffff8e,
    0xb939ffffffffff8a,
    0xa2c62effffffffcd,
    0x212ba4f27ffffff5,
]));

/// G2 generator x-coordinate, `c0` component, Montgomery-encoded.
pub const G2_GENERATOR_X_C0: Fq = Fq::new(BigInteger256::new([
    0xaf45aaaf63659e66,
    0xbb92f0233d01bc7c,
    0xef7ab941dcd46337,
    0x173f71de61df5b55,
]));
/// G2 generator x-coordinate, `c1` component, Montgomery-encoded.
pub const G2_GENERATOR_X_C1: Fq = Fq::new(BigInteger256::new([
    0x389bbb43d0d2f4e7,
    0x413d1e26bc087b6a,
    0x1fce93827a42e357,
    0x10c76bd06630c4e9,
]));
/// G2 generator y-coordinate, `c0` component, Montgomery-encoded.
pub const G2_GENERATOR_Y_C0: Fq = Fq::new(BigInteger256::new([
    0x25d0b13674482015,
    0x5a0fcf130c7d1012,
    0x9215e25e884b2cc7,
    0x182c7a581c2d120d,
]));
/// G2 generator y-coordinate, `c1` component, Montgomery-encoded.
pub const G2_GENERATOR_Y_C1: Fq = Fq::new(BigInteger256::new([
    0xfbb0d5e1fcb5d7aa,
    0x6ce6262aa3a25124,
    0x1e0d27e0927f8598,
    0x1598cffe781d1a20,
]));

/// Frobenius twist constant `gamma_1 in F_p^2`, `c0` component. The
/// curve specification's hex literal for this constant is already the
/// Montgomery representative (`gamma_1,0 * R mod p`), not the plain
/// residue, so it is transcribed here directly rather than re-encoded.
pub const GAMMA1_C0: Fq = Fq::new(BigInteger256::new([
    0x2728380075e94f74,
    0x144f87f9c79b1f6b,
    0xd5910ffed2c92f70,
    0x1830373ee92acf9f,
]));
/// Frobenius twist constant `gamma_1 in F_p^2`, `c1` component (already
/// Montgomery-encoded in the source literal).
pub const GAMMA1_C1: Fq = Fq::new(BigInteger256::new([
    0x7fd7c7ff8a16b09f,
    0x4cd178063864e0a8,
    0xe4a33d812d36d098,
    0x0cf32d4356d53061,
]));
/// Frobenius twist constant `gamma_2 in F_p` (already Montgomery-encoded
/// in the source literal).
pub const GAMMA2: Fq = Fq::new(BigInteger256::new([
    0x056efc68e869fd55,
    0x1c92209138d7ba61,
    0xc0651cd3594d6466,
    0x22a87debbfffffef,
]));
/// Frobenius twist constant `gamma_3 in F_p` (already Montgomery-encoded
/// in the source literal).
pub const GAMMA3: Fq = Fq::new(BigInteger256::new([
    0xfd55c5dc71674777,
    0xc45a8b4e56d9569c,
    0x5f0116472cae2274,
    0x1aa6d99b1d115e0a,
]));
/// Frobenius twist constant `gamma_4 in F_p` (already Montgomery-encoded
/// in the source literal).
pub const GAMMA4: Fq = Fq::new(BigInteger256::new([
    0x746efc68e869fcd0,
    0x74ab209138d7b9d7,
    0xa8f6fe53594d642b,
    0x1eb0be5bffffffe3,
]));
/// Frobenius twist constant `gamma_5 in F_p^2`, `c0` component (already
/// Montgomery-encoded in the source literal).
pub const GAMMA5_C0: Fq = Fq::new(BigInteger256::new([
    0x7d7dfddce75096d8,
    0x778913481e7475f4,
    0x7a5dd8c5ff7751dc,
    0x0db3ac57c63c2da8,
]));
/// Frobenius twist constant `gamma_5 in F_p^2`, `c1` component (already
/// Montgomery-encoded in the source literal).
pub const GAMMA5_C1: Fq = Fq::new(BigInteger256::new([
    0x2982022318af693b,
    0xe997ecb7e18b8a1f,
    0x3fd674ba0088ae2b,
    0x176fb82a79c3d259,
]));

/// `|u|` for the BN seed `u = -(2^62 + 2^55 + 1)`: bits 62, 55 and 0 set.
pub const SEED_U_ABS: u64 = (1u64 << 62) | (1u64 << 55) | 1u64;

/// `u` is negative for this curve.
pub const SEED_U_IS_NEGATIVE: bool = true;

/// `m = |6u + 2|`, the Miller-loop scalar for the optimal ate pairing,
/// as a little-endian bit count plus raw value (fits in 65 bits).
pub const MILLER_LOOP_SCALAR: u128 = {
    // u is negative, so 6u + 2 = -(6*|u|) + 2 = -(6*|u| - 2); since
    // 6*|u| > 2 the bracketed quantity is positive and |6u+2| = 6*|u| - 2.
    6 * (SEED_U_ABS as u128) - 2
};
