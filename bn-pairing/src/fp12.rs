//! `F_p^12 = F_p^6[z] / (z^2 - y)`, the target tower level the Miller
//! loop accumulates into and the final exponentiation operates on.
//!
//! Elements are stored as `(c0, c1)` with value `c0 + c1*z`. Besides the
//! ordinary field operations this module implements the Granger-Scott
//! compressed squaring used by cyclotomic exponentiation
//! (`cyclotomic_square`/`decompress`, "Faster Squaring in the
//! Cyclotomic Subgroup of Sixth Degree Extension Fields", 2010) and the
//! sparse `mul_034` product the Miller loop uses to fold in each line
//! function value.

use crate::fp2::Fp2;
use crate::fp6::Fp6;
use crate::params::Fq;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// An element `c0 + c1*z` of `F_p^12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl Fp12 {
    pub const fn new(c0: Fp6, c1: Fp6) -> Self {
        Fp12 { c0, c1 }
    }

    pub fn zero() -> Self {
        Fp12::new(Fp6::zero(), Fp6::zero())
    }

    pub fn one() -> Self {
        Fp12::new(Fp6::one(), Fp6::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    pub fn neg(&self) -> Self {
        Fp12::new(self.c0.neg(), self.c1.neg())
    }

    pub fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }

    pub fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }

    pub fn mul_assign(&mut self, other: &Self) {
        let a0 = self.c0;
        let a1 = self.c1;
        let b0 = other.c0;
        let b1 = other.c1;

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        self.c0 = v0 + v1.mul_art();
        self.c1 = (a0 + a1) * (b0 + b1) - v0 - v1;
    }

    pub fn square(&self) -> Self {
        let a0 = self.c0;
        let a1 = self.c1;
        let v0 = a0 * a1;
        let c0 = (a0 + a1) * (a0 + a1.mul_art()) - v0 - v0.mul_art();
        Fp12::new(c0, v0.double())
    }

    /// `self^{-1}`, via the norm `(c0 + c1 z)(c0 - c1 z) = c0^2 - y c1^2
    /// in F_p^6`.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let norm = self.c0.square() - self.c1.square().mul_art();
        let norm_inv = norm.inverse()?;
        Some(Fp12::new(self.c0 * norm_inv, self.c1.neg() * norm_inv))
    }

    /// Conjugation over `F_p^6`: `(c0, c1) -> (c0, -c1)`. Coincides with
    /// `x -> x^{p^6}` and, restricted to the order-`p^4 - p^2 + 1`
    /// cyclotomic subgroup computed by the easy part of the final
    /// exponentiation, with `x -> x^{-1}`.
    pub fn conjugate(&self) -> Self {
        Fp12::new(self.c0, self.c1.neg())
    }

    /// `x -> x^p`. Conjugates each of the six `F_p^2` coordinates (the
    /// `F_p^2`-Frobenius, `x -> x^p` there too) and then rescales five
    /// of them by the precomputed twist constants `gamma_1 .. gamma_5`;
    /// the `c0.c0` coordinate carries an implicit `gamma_0 = 1`. The
    /// `F_p`-valued constants `gamma_2`/`gamma_3` scale both coordinates
    /// of their `F_p^2` element and are then rotated by `i`/`xi`
    /// respectively — `gamma_2`/`gamma_3` alone are not the full twist
    /// factor.
    pub fn frobenius_map(&self, gamma1: Fp2, gamma2: Fq, gamma3: Fq, gamma4: Fq, gamma5: Fp2) -> Self {
        let c0c0 = self.c0.c0.conjugate();
        let c1c0 = self.c1.c0.conjugate() * gamma1;
        let c0c1 = self.c0.c1.conjugate().mul_by_fp(&gamma2).mul_by_i();
        let c1c1 = self.c1.c1.conjugate().mul_by_fp(&gamma3).mul_by_nonresidue();
        let c0c2 = self.c0.c2.conjugate().mul_by_fp(&gamma4);
        let c1c2 = self.c1.c2.conjugate() * gamma5;

        Fp12::new(Fp6::new(c0c0, c0c1, c0c2), Fp6::new(c1c0, c1c1, c1c2))
    }

    /// Sparse product for the Miller loop: `other` is a line-function
    /// value, the `F_p^12` element with `c0 = (l00, 0, 0)` and
    /// `c1 = (l10, l11, 0)` — only three of its twelve `F_p` slots are
    /// nonzero.
    pub fn mul_by_line(&self, l00: &Fp2, l10: &Fp2, l11: &Fp2) -> Self {
        let a0 = self.c0;
        let a1 = self.c1;

        let v0 = a0.mul_by_fp2(l00);
        let v1 = a1.mul_by_01(l10, l11);

        let c0_out = v0 + v1.mul_art();
        let sum = *l00 + *l10;
        let c1_out = (a0 + a1).mul_by_01(&sum, l11) - v0 - v1;

        Fp12::new(c0_out, c1_out)
    }

    /// Granger-Scott compressed cyclotomic squaring. The four
    /// coordinates are `(c0.c1, c1.c0, c0.c2, c1.c2)` of an element of
    /// the cyclotomic subgroup; `c0.c0` and `c1.c1` are redundant there
    /// (recoverable from the other four) and never touched.
    pub fn cyclotomic_square_compressed(x1: Fp2, x2: Fp2, x3: Fp2, x4: Fp2) -> (Fp2, Fp2, Fp2, Fp2) {
        let t0 = x1.square();
        let t1 = x4.square();
        let t5 = x1 + x4;
        let t2 = t5.square() - t0 - t1;
        let t6 = x2 + x3;
        let t3 = t6.square();
        let t2b = x2.square();

        let nr_t5 = t2.mul_by_nonresidue();
        let t5 = (nr_t5 + x2).double();
        let y2 = t5 + nr_t5;

        let nr_t1 = t1.mul_by_nonresidue();
        let t5 = t0 + nr_t1;
        let t6 = (t5 - x3).double();
        let y3 = t5 + t6;

        let t1_sq = x3.square();
        let nr_t1b = t1_sq.mul_by_nonresidue();
        let t5 = t2b + nr_t1b;
        let t6 = (t5 - x1).double();
        let y1 = t5 + t6;

        let t0b = t2b + t1_sq;
        let t5 = t3 - t0b;
        let t6 = (t5 + x4).double();
        let y4 = t5 + t6;

        (y1, y2, y3, y4)
    }

    /// Restores a full `F_p^12` element from compressed cyclotomic
    /// coordinates `(c0.c1, c1.c0, c0.c2, c1.c2)`, recovering `c1.c1`
    /// and `c0.c0` via the cyclotomic-subgroup norm relation instead of
    /// storing them directly.
    pub fn decompress(x1: Fp2, x2: Fp2, x3: Fp2, x4: Fp2) -> Option<Self> {
        // g4 = x1, g3 = x3, g5 = x4, g2 = x2 (source naming).
        let t0 = x1.square();
        let t1 = (t0 - x3).double() + t0;
        let t2 = x4.square();
        let t0 = t2.mul_by_nonresidue() + t1;
        let t1 = (x2.double()).double();
        let t1_inv = t1.inverse()?;
        let g1 = t0 * t1_inv;

        let t1 = x3 * x1;
        let t2 = (g1.square() - t1).double() - t1;
        let t1 = x2 * x4;
        let t2 = t2 + t1;
        let c0_c0 = t2.mul_by_nonresidue() + Fp2::one();

        Some(Fp12::new(
            Fp6::new(c0_c0, x1, x3),
            Fp6::new(x2, g1, x4),
        ))
    }
}

impl Add for Fp12 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut r = self;
        r.add_assign(&other);
        r
    }
}
impl Sub for Fp12 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut r = self;
        r.sub_assign(&other);
        r
    }
}
impl Mul for Fp12 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut r = self;
        r.mul_assign(&other);
        r
    }
}
impl AddAssign<&Fp12> for Fp12 {
    fn add_assign(&mut self, other: &Fp12) {
        Fp12::add_assign(self, other)
    }
}
impl SubAssign<&Fp12> for Fp12 {
    fn sub_assign(&mut self, other: &Fp12) {
        Fp12::sub_assign(self, other)
    }
}
impl MulAssign<&Fp12> for Fp12 {
    fn mul_assign(&mut self, other: &Fp12) {
        Fp12::mul_assign(self, other)
    }
}
impl Neg for Fp12 {
    type Output = Self;
    fn neg(self) -> Self {
        Fp12::neg(&self)
    }
}

impl Distribution<Fp12> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp12 {
        Fp12::new(rng.sample(Standard), rng.sample(Standard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::final_exp::easy_part;
    use crate::params::{GAMMA1_C0, GAMMA1_C1, GAMMA2, GAMMA3, GAMMA4, GAMMA5_C0, GAMMA5_C1};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed([23u8; 16])
    }

    fn frob(x: &Fp12) -> Fp12 {
        x.frobenius_map(
            Fp2::new(GAMMA1_C0, GAMMA1_C1),
            GAMMA2,
            GAMMA3,
            GAMMA4,
            Fp2::new(GAMMA5_C0, GAMMA5_C1),
        )
    }

    /// Samples a random element of the cyclotomic subgroup by running the
    /// easy part of final exponentiation on a random field element.
    fn cyclotomic_element(r: &mut XorShiftRng) -> Fp12 {
        loop {
            let f: Fp12 = r.sample(Standard);
            if !f.is_zero() {
                return easy_part(&f);
            }
        }
    }

    #[test]
    fn mul_is_commutative_associative_and_distributes() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp12 = r.sample(Standard);
            let b: Fp12 = r.sample(Standard);
            let c: Fp12 = r.sample(Standard);
            assert_eq!(a * b, b * a);
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a * Fp12::one(), a);
        }
    }

    #[test]
    fn square_matches_mul() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp12 = r.sample(Standard);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn inverse_is_multiplicative_inverse() {
        let mut r = rng();
        let mut done = 0;
        while done < 20 {
            let a: Fp12 = r.sample(Standard);
            if a.is_zero() {
                continue;
            }
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, Fp12::one());
            done += 1;
        }
        assert!(Fp12::zero().inverse().is_none());
    }

    #[test]
    fn frobenius_applied_twelve_times_is_identity() {
        let mut r = rng();
        for _ in 0..5 {
            let a: Fp12 = r.sample(Standard);
            let mut x = a;
            for _ in 0..12 {
                x = frob(&x);
            }
            assert_eq!(x, a);
        }
    }

    #[test]
    fn conjugate_is_inverse_on_cyclotomic_subgroup() {
        let mut r = rng();
        for _ in 0..10 {
            let x = cyclotomic_element(&mut r);
            assert_eq!(x.conjugate(), x.inverse().unwrap());
        }
    }

    #[test]
    fn mul_by_line_matches_full_mul_with_sparse_shape() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp12 = r.sample(Standard);
            let l00: Fp2 = r.sample(Standard);
            let l10: Fp2 = r.sample(Standard);
            let l11: Fp2 = r.sample(Standard);
            let line = Fp12::new(
                Fp6::new(l00, Fp2::zero(), Fp2::zero()),
                Fp6::new(l10, l11, Fp2::zero()),
            );
            assert_eq!(a.mul_by_line(&l00, &l10, &l11), a * line);
        }
    }

    #[test]
    fn compressed_squaring_matches_full_square_on_tracked_coordinates() {
        let mut r = rng();
        for _ in 0..10 {
            let x = cyclotomic_element(&mut r);
            let squared = x.square();
            let (y1, y2, y3, y4) =
                Fp12::cyclotomic_square_compressed(x.c0.c1, x.c1.c0, x.c0.c2, x.c1.c2);
            assert_eq!(y1, squared.c0.c1);
            assert_eq!(y2, squared.c1.c0);
            assert_eq!(y3, squared.c0.c2);
            assert_eq!(y4, squared.c1.c2);
        }
    }

    #[test]
    fn decompress_recovers_full_square() {
        let mut r = rng();
        for _ in 0..10 {
            let x = cyclotomic_element(&mut r);
            let squared = x.square();
            let (y1, y2, y3, y4) =
                Fp12::cyclotomic_square_compressed(x.c0.c1, x.c1.c0, x.c0.c2, x.c1.c2);
            let back = Fp12::decompress(y1, y2, y3, y4).unwrap();
            assert_eq!(back, squared);
        }
    }

    /// `frobenius_map` must agree with raw exponentiation by `p` itself,
    /// not just compose to the identity after 12 applications.
    #[test]
    fn frobenius_map_matches_direct_exponentiation_by_p() {
        use field_core::FpParameters;

        fn pow(base: Fp12, exp: &field_core::BigInteger256) -> Fp12 {
            let mut acc = Fp12::one();
            for i in (0..exp.num_bits()).rev() {
                acc = acc.square();
                if exp.get_bit(i as usize) {
                    acc = acc * base;
                }
            }
            acc
        }

        let mut r = rng();
        for _ in 0..5 {
            let a: Fp12 = r.sample(Standard);
            assert_eq!(pow(a, &crate::params::FqParameters::MODULUS), frob(&a));
        }
    }
}
