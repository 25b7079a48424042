//! The Miller loop: iterated doubling/addition of a `G2` point held in
//! Jacobian coordinates on the twist, each step emitting a sparse line
//! function and folding it into a running `F_p^12` accumulator.

use crate::curve::{G1Affine, G2Affine};
use crate::fp2::Fp2;
use crate::fp12::Fp12;
use crate::params::{self, Fq};

/// Working state `T = (X, Y, Z)` of the point being doubled/added to
/// during the loop, in Jacobian coordinates on the twist.
#[derive(Clone, Copy, Debug)]
struct Jacobian {
    x: Fp2,
    y: Fp2,
    z: Fp2,
}

impl Jacobian {
    fn from_affine(p: &G2Affine) -> Self {
        Jacobian { x: p.x, y: p.y, z: Fp2::one() }
    }
}

/// A sparse line-function value: `c0 = (l00, 0, 0)`, `c1 = (l10, l11, 0)`
/// in `F_p^12` coordinates.
struct Line {
    l00: Fp2,
    l10: Fp2,
    l11: Fp2,
}

/// Doubling step: produces `l_{T,T}(P)` and updates `T <- 2T`.
///
/// `s = 3*xP`, `neg_yp = -yP` are precomputed once per pairing (the
/// doubling line only ever needs `P` scaled these two ways).
fn doubling_step(t: &mut Jacobian, s: &Fq, neg_yp: &Fq) -> Line {
    let c = t.z.square();
    let b = t.y.square();
    let t5 = b + c;

    // e = 3*b'*c = 3c * (1 - i)
    let three_c = c + c + c;
    let e = Fp2::new(three_c.c0 + three_c.c1, three_c.c1 - three_c.c0);

    let x_sq = t.x.square();
    let a = (t.x * t.y).halve();

    let f = e + e + e;
    let x3 = (b - f) * a;

    let g = (b + f).halve();

    let e_sq = e.square();
    let y3 = g.square() - (e_sq + e_sq + e_sq);

    let h = (t.y + t.z).square() - t5;
    let z3 = b * h;

    let l11 = e - b;
    let l10 = x_sq.mul_by_fp(s);
    let l00 = h.mul_by_fp(neg_yp);

    t.x = x3;
    t.y = y3;
    t.z = z3;

    Line { l00, l10, l11 }
}

/// Addition step: produces `l_{T,Q}(P)` and updates `T <- T + Q`
/// (`Q` given in affine coordinates).
fn addition_step(t: &mut Jacobian, q: &G2Affine, xp: &Fq, yp: &Fq) -> Line {
    let t1 = t.x - t.z * q.x;
    let t2 = t.y - t.z * q.y;

    let t3 = t1.square();
    let mut x3 = t3 * t.x;
    let t3 = t1 * t3;
    let t4 = t2.square() * t.z;
    let t4 = t3 + t4;

    let t4 = t4 - x3 - x3;
    x3 = x3 - t4;

    let u1 = t2 * x3;
    let u2 = t3 * t.y;
    let y3 = u1 - u2;

    let new_x = t1 * t4;
    let new_z = t.z * t3;

    let l10 = t2.mul_by_fp(xp).neg();
    let l11 = q.x * t2 - q.y * t1;
    let l00 = t1.mul_by_fp(yp);

    t.x = new_x;
    t.y = y3;
    t.z = new_z;

    Line { l00, l10, l11 }
}

fn fold_line(f: &mut Fp12, l: &Line) {
    *f = f.mul_by_line(&l.l00, &l.l10, &l.l11);
}

/// Runs the Miller loop for the optimal ate pairing `e(P, Q)`,
/// returning the accumulated `F_p^12` value before final
/// exponentiation.
///
/// `p`/`q` are assumed already validated (on-curve, in the order-`r`
/// subgroup) by the caller.
pub fn miller_loop(p: &G1Affine, q: &G2Affine) -> Fp12 {
    let xp = p.x;
    let yp = p.y;
    let s = xp + xp + xp;
    let neg_yp = yp.neg();

    let mut t = Jacobian::from_affine(q);
    let m = params::MILLER_LOOP_SCALAR;
    let nb = 128 - m.leading_zeros() as usize;

    let l = doubling_step(&mut t, &s, &neg_yp);
    let mut f = Fp12::one();
    fold_line(&mut f, &l);

    if (m >> (nb - 2)) & 1 == 1 {
        let l = addition_step(&mut t, q, &xp, &yp);
        fold_line(&mut f, &l);
    }

    for i in (0..nb.saturating_sub(2)).rev() {
        f = f.square();
        let l = doubling_step(&mut t, &s, &neg_yp);
        fold_line(&mut f, &l);
        if (m >> i) & 1 == 1 {
            let l = addition_step(&mut t, q, &xp, &yp);
            fold_line(&mut f, &l);
        }
    }

    // u < 0: negate the accumulator (unitary inverse) and the working
    // state's Y coordinate before the Frobenius-twisted adjustments.
    f = f.conjugate();
    t.y = t.y.neg();

    let (q1, q2) = frobenius_twisted_points(q);
    let l = addition_step(&mut t, &q1, &xp, &yp);
    fold_line(&mut f, &l);
    let l = addition_step(&mut t, &q2, &xp, &yp);
    fold_line(&mut f, &l);

    f
}

/// The two Frobenius-twisted points `Q1 = (x^p * gamma2, y^p * gamma3)`
/// and `Q2`, `Q2`'s `y` additionally negated, used by the two final
/// "adjustment" addition steps (`op_fin` in the driver this loop is
/// grounded on).
fn frobenius_twisted_points(q: &G2Affine) -> (G2Affine, G2Affine) {
    let x1 = q.x.conjugate().mul_by_fp(&params::GAMMA2).mul_by_i();
    let y1 = q.y.conjugate().mul_by_fp(&params::GAMMA3).mul_by_nonresidue();
    let q1 = G2Affine::new(x1, y1);

    let x2 = x1.conjugate().mul_by_fp(&params::GAMMA2).mul_by_i();
    let y2 = y1.conjugate().mul_by_fp(&params::GAMMA3).mul_by_nonresidue().neg();
    let q2 = G2Affine::new(x2, y2);

    (q1, q2)
}
