//! Final exponentiation: raises the Miller loop's `F_p^12` output to
//! `(p^12 - 1) / r`, landing it in the order-`r` subgroup of `GT`.
//!
//! Split into an "easy part" (`easy_part`, a cheap inversion-based
//! exponent `(p^6-1)(p^2+1)` that puts the result in the cyclotomic
//! subgroup) and a "hard part" (`hard_part`, the `(p^4-p^2+1)/r`
//! exponent) evaluated via a Fuentes-Castañeda-style addition chain in
//! the BN seed `u`, built entirely from squarings, unitary inverses and
//! Frobenius applications of the cheap cyclotomic-subgroup kind.

use crate::fp12::Fp12;
use crate::params::{GAMMA1_C0, GAMMA1_C1, GAMMA2, GAMMA3, GAMMA4, GAMMA5_C0, GAMMA5_C1};
use crate::fp2::Fp2;

fn frob(x: &Fp12) -> Fp12 {
    x.frobenius_map(
        Fp2::new(GAMMA1_C0, GAMMA1_C1),
        GAMMA2,
        GAMMA3,
        GAMMA4,
        Fp2::new(GAMMA5_C0, GAMMA5_C1),
    )
}

/// `f -> f^((p^6-1)(p^2+1))`.
pub(crate) fn easy_part(f: &Fp12) -> Fp12 {
    let inv = f.inverse().expect("Miller loop output is never zero");
    let mut r = f.conjugate() * inv;
    let frobenius_sq = frob(&frob(&r));
    r = r * frobenius_sq;
    r
}

/// `x -> x^|u|`, `u` the BN seed, via 55 + 7 compressed cyclotomic
/// squarings and a single decompression (the seed's only two set bits
/// above the constant term sit at positions 55 and 62).
fn exp_by_seed(a: &Fp12) -> Fp12 {
    let mut t0 = *a;
    for _ in 0..55 {
        cyclotomic_square_in_place(&mut t0);
    }
    let mut t1 = t0;
    for _ in 55..62 {
        cyclotomic_square_in_place(&mut t1);
    }
    let t0 = decompress(&t0);
    let t1 = decompress(&t1);
    (t0 * t1) * *a
}

fn cyclotomic_square_in_place(x: &mut Fp12) {
    let (y1, y2, y3, y4) =
        Fp12::cyclotomic_square_compressed(x.c0.c1, x.c1.c0, x.c0.c2, x.c1.c2);
    x.c0.c1 = y1;
    x.c1.c0 = y2;
    x.c0.c2 = y3;
    x.c1.c2 = y4;
}

fn decompress(x: &Fp12) -> Fp12 {
    Fp12::decompress(x.c0.c1, x.c1.c0, x.c0.c2, x.c1.c2)
        .expect("compressed cyclotomic coordinate is never degenerate for a valid Miller loop output")
}

/// The Fuentes-Castañeda hard-part addition chain over the BN seed.
fn hard_part(r: &Fp12) -> Fp12 {
    let mut t0 = exp_by_seed(r);
    t0 = t0.square();
    let mut t1 = t0.square();
    t1 = t1 * t0;
    let mut t2 = exp_by_seed(&t1);
    let mut t3 = t2.square();
    t3 = exp_by_seed(&t3);

    t0 = t0.conjugate();
    t1 = t1.conjugate();
    t3 = t3.conjugate();

    t3 = t3 * t2;
    t3 = t3 * t1;

    t0 = t0.conjugate();
    t0 = t0 * t3;

    t2 = t2 * t3;
    t2 = t2 * *r;

    let mut out = r.conjugate();
    out = out * t0;
    out = frob(&frob(&frob(&out)));
    out = out * t2;
    t0 = frob(&t0);
    out = out * t0;
    t3 = frob(&frob(&t3));
    out = out * t3;

    out
}

/// `f -> f^((p^12 - 1) / r)`.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    hard_part(&easy_part(f))
}
