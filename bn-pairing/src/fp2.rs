//! `F_p^2 = F_p[i] / (i^2 + 1)`, the quadratic extension the rest of the
//! tower is built on.
//!
//! Elements are stored as `(c0, c1)` with value `c0 + c1*i`. Besides the
//! usual field operations this module carries the "unreduced"
//! multiplication/reduction split (`mul_unr`/`rdc`) that the cubic and
//! degree-12 extensions use to defer Montgomery reduction across a
//! Karatsuba product, and `mul_by_nonresidue`, used by the sextic twist
//! to multiply by `xi = 1 + i`.

use crate::params::Fq;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// An element `c0 + c1*i` of `F_p^2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fp2 {
    pub c0: Fq,
    pub c1: Fq,
}

impl Fp2 {
    pub const fn new(c0: Fq, c1: Fq) -> Self {
        Fp2 { c0, c1 }
    }

    pub fn zero() -> Self {
        Fp2::new(Fq::zero(), Fq::zero())
    }

    pub fn one() -> Self {
        Fp2::new(Fq::one(), Fq::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    /// Conjugation: `(c0, c1) -> (c0, -c1)`, the nontrivial automorphism
    /// fixing `F_p`. Equal to the Frobenius map `x -> x^p` on this field.
    pub fn conjugate(&self) -> Self {
        Fp2::new(self.c0, self.c1.neg())
    }

    pub fn neg(&self) -> Self {
        Fp2::new(self.c0.neg(), self.c1.neg())
    }

    pub fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }

    pub fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }

    pub fn double(&self) -> Self {
        Fp2::new(self.c0.double(), self.c1.double())
    }

    pub fn halve(&self) -> Self {
        Fp2::new(self.c0.halve(), self.c1.halve())
    }

    /// Multiplication by the base-field scalar `k`.
    pub fn mul_by_fp(&self, k: &Fq) -> Self {
        Fp2::new(self.c0 * *k, self.c1 * *k)
    }

    /// Karatsuba product: `3` base-field multiplications instead of `4`.
    pub fn mul_assign(&mut self, other: &Self) {
        let a0 = self.c0;
        let a1 = self.c1;
        let b0 = other.c0;
        let b1 = other.c1;

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        self.c0 = v0 - v1;
        self.c1 = (a0 + a1) * (b0 + b1) - v0 - v1;
    }

    pub fn square(&self) -> Self {
        // Complex squaring: (a0+a1)(a0-a1), 2*a0*a1 -- 2 multiplications.
        let a0 = self.c0;
        let a1 = self.c1;
        let v0 = a0 * a1;
        Fp2::new((a0 + a1) * (a0 - a1), v0.double())
    }

    /// Multiplies by the sextic non-residue `xi = 1 + i` used to build
    /// the cubic twist `F_p^6 = F_p^2[y]/(y^3 - xi)`.
    pub fn mul_by_nonresidue(&self) -> Self {
        // (c0 + c1*i)(1 + i) = (c0 - c1) + (c0 + c1)*i
        Fp2::new(self.c0 - self.c1, self.c0 + self.c1)
    }

    /// Multiplies by `i`: `(c0 + c1*i)*i = -c1 + c0*i`.
    pub fn mul_by_i(&self) -> Self {
        Fp2::new(self.c1.neg(), self.c0)
    }

    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // norm = c0^2 + c1^2; inverse = (c0, -c1) / norm
        let norm = self.c0.square() + self.c1.square();
        let norm_inv = norm.inverse()?;
        Some(Fp2::new(self.c0 * norm_inv, self.c1.neg() * norm_inv))
    }

    /// Unreduced Karatsuba product: computes the three widened
    /// cross-products and combines them without Montgomery-reducing in
    /// between, deferring that step to [`Fp2::rdc`]. `Fp2::rdc(&a.mul_unr(&b))
    /// == a * b` for any `a, b`.
    pub fn mul_unr(&self, other: &Self) -> Fp2Unreduced {
        let a0 = self.c0;
        let a1 = self.c1;
        let b0 = other.c0;
        let b1 = other.c1;

        let v0 = a0.mul_wide(&b0);
        let v1 = a1.mul_wide(&b1);
        let v2 = (a0 + a1).mul_wide(&(b0 + b1));

        let (c0, c0_neg) = Fq::wide_sub_abs(&v0, &v1);
        let sum = Fq::wide_add(&v0, &v1);
        let (c1, c1_neg) = Fq::wide_sub_abs(&v2, &sum);

        Fp2Unreduced { c0, c0_neg, c1, c1_neg }
    }

    /// Montgomery-reduces an unreduced product back into `F_p^2`, the
    /// second half of the `mul_unr`/`rdc` split.
    pub fn rdc(u: &Fp2Unreduced) -> Self {
        Fp2::new(Fq::rdc(u.c0, u.c0_neg), Fq::rdc(u.c1, u.c1_neg))
    }
}

/// The unreduced output of [`Fp2::mul_unr`]: two widened (512-bit)
/// coordinate magnitudes plus the sign each one carries, awaiting a
/// single Montgomery reduction via [`Fp2::rdc`].
pub struct Fp2Unreduced {
    c0: [u64; 8],
    c0_neg: bool,
    c1: [u64; 8],
    c1_neg: bool,
}

impl Add for Fp2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut r = self;
        r.add_assign(&other);
        r
    }
}
impl Sub for Fp2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut r = self;
        r.sub_assign(&other);
        r
    }
}
impl Mul for Fp2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut r = self;
        r.mul_assign(&other);
        r
    }
}
impl AddAssign<&Fp2> for Fp2 {
    fn add_assign(&mut self, other: &Fp2) {
        Fp2::add_assign(self, other)
    }
}
impl SubAssign<&Fp2> for Fp2 {
    fn sub_assign(&mut self, other: &Fp2) {
        Fp2::sub_assign(self, other)
    }
}
impl MulAssign<&Fp2> for Fp2 {
    fn mul_assign(&mut self, other: &Fp2) {
        Fp2::mul_assign(self, other)
    }
}
impl Neg for Fp2 {
    type Output = Self;
    fn neg(self) -> Self {
        Fp2::neg(&self)
    }
}

impl Distribution<Fp2> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp2 {
        Fp2::new(rng.sample(Standard), rng.sample(Standard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed([7u8; 16])
    }

    #[test]
    fn add_is_commutative_and_associative() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            let b: Fp2 = r.sample(Standard);
            let c: Fp2 = r.sample(Standard);
            assert_eq!(a + b, b + a);
            assert_eq!((a + b) + c, a + (b + c));
            assert_eq!(a + Fp2::zero(), a);
            assert_eq!(a + a.neg(), Fp2::zero());
        }
    }

    #[test]
    fn sub_matches_add_neg() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            let b: Fp2 = r.sample(Standard);
            assert_eq!(a - b, a + b.neg());
            assert_eq!(a - a, Fp2::zero());
            assert_eq!(a - Fp2::zero(), a);
        }
    }

    #[test]
    fn mul_is_commutative_associative_and_distributes() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            let b: Fp2 = r.sample(Standard);
            let c: Fp2 = r.sample(Standard);
            assert_eq!(a * b, b * a);
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a * Fp2::one(), a);
        }
    }

    #[test]
    fn square_matches_mul() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn inverse_is_multiplicative_inverse() {
        let mut r = rng();
        let mut done = 0;
        while done < 20 {
            let a: Fp2 = r.sample(Standard);
            if a.is_zero() {
                continue;
            }
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, Fp2::one());
            done += 1;
        }
        assert!(Fp2::zero().inverse().is_none());
    }

    #[test]
    fn conjugate_is_frobenius_and_involutive() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            assert_eq!(a.conjugate().conjugate(), a);
        }
    }

    #[test]
    fn halve_then_double_is_identity() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            assert_eq!(a.halve().double(), a);
        }
    }

    #[test]
    fn rdc_of_mul_unr_matches_mul() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            let b: Fp2 = r.sample(Standard);
            assert_eq!(Fp2::rdc(&a.mul_unr(&b)), a * b);
        }
    }

    #[test]
    fn mul_by_nonresidue_matches_explicit_multiplication() {
        let mut r = rng();
        let xi = Fp2::new(Fq::one(), Fq::one());
        for _ in 0..20 {
            let a: Fp2 = r.sample(Standard);
            assert_eq!(a.mul_by_nonresidue(), a * xi);
        }
    }
}
