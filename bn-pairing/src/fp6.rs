//! `F_p^6 = F_p^2[y] / (y^3 - xi)`, `xi = 1 + i`.
//!
//! Elements are stored as `(c0, c1, c2)` with value `c0 + c1*y + c2*y^2`.
//! Multiplication and squaring follow the Chung-Hasan formulas (Devegili,
//! O hEigeartaigh, Scott, Dahab, "Multiplication and Squaring on
//! Pairing-Friendly Fields", sections 4 and 5) so that both cost 5
//! `F_p^2` multiplications instead of the schoolbook 6/9: the
//! Karatsuba-style 3-term product for multiplication, and both squaring
//! variants, CH-SQR2 (`square`) and the halving-based SQR3 (`sqr`).

use crate::fp2::Fp2;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// An element `c0 + c1*y + c2*y^2` of `F_p^6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl Fp6 {
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Fp6 { c0, c1, c2 }
    }

    pub fn zero() -> Self {
        Fp6::new(Fp2::zero(), Fp2::zero(), Fp2::zero())
    }

    pub fn one() -> Self {
        Fp6::new(Fp2::one(), Fp2::zero(), Fp2::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    pub fn neg(&self) -> Self {
        Fp6::new(self.c0.neg(), self.c1.neg(), self.c2.neg())
    }

    pub fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
        self.c2.add_assign(&other.c2);
    }

    pub fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
        self.c2.sub_assign(&other.c2);
    }

    pub fn double(&self) -> Self {
        Fp6::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    pub fn mul_by_fp2(&self, k: &Fp2) -> Self {
        Fp6::new(self.c0 * *k, self.c1 * *k, self.c2 * *k)
    }

    /// Multiplies by the degree-12 tower's non-residue `y` (`z^2 = y`),
    /// a shift of `self`'s own `(c0, c1, c2)` coordinates with the
    /// wrapped-around `c2` term scaled by `F_p^2`'s non-residue.
    pub fn mul_art(&self) -> Self {
        Fp6::new(self.c2.mul_by_nonresidue(), self.c0, self.c1)
    }

    /// The sparse product used inside the Miller loop: `other` has
    /// `c2 = 0` (the line-function coefficient contributed by the
    /// twisted doubling/addition step never has a `y^2` term).
    pub fn mul_by_01(&self, c0: &Fp2, c1: &Fp2) -> Self {
        let a_a = self.c0 * *c0;
        let b_b = self.c1 * *c1;

        let t1 = *c1 * (self.c1 + self.c2) - b_b;
        let t1 = t1.mul_by_nonresidue() + a_a;

        let t3 = *c0 * (self.c0 + self.c2) - a_a + b_b;

        let t2 = (*c0 + *c1) * (self.c0 + self.c1) - a_a - b_b;

        Fp6::new(t1, t2, t3)
    }

    /// Karatsuba-style cubic product (5 `F_p^2` multiplications).
    pub fn mul_assign(&mut self, other: &Self) {
        let a0 = self.c0;
        let a1 = self.c1;
        let a2 = self.c2;
        let b0 = other.c0;
        let b1 = other.c1;
        let b2 = other.c2;

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let v2 = a2 * b2;

        let c0 = ((a1 + a2) * (b1 + b2) - v1 - v2).mul_by_nonresidue() + v0;
        let c1 = (a0 + a1) * (b0 + b1) - v0 - v1 + v2.mul_by_nonresidue();
        let c2 = (a0 + a2) * (b0 + b2) - v0 + v1 - v2;

        self.c0 = c0;
        self.c1 = c1;
        self.c2 = c2;
    }

    /// Chung-Hasan CH-SQR2 squaring (5 `F_p^2` multiplications).
    pub fn square(&self) -> Self {
        let a = self.c0;
        let b = self.c1;
        let c = self.c2;

        let s0 = a.square();
        let ab = a * b;
        let s1 = ab.double();
        let s2 = (a - b + c).square();
        let bc = b * c;
        let s3 = bc.double();
        let s4 = c.square();

        Fp6::new(
            s0 + s3.mul_by_nonresidue(),
            s1 + s4.mul_by_nonresidue(),
            s1 + s2 + s3 - s0 - s4,
        )
    }

    /// Chung-Hasan SQR3 squaring (the halving-based variant, 5 `F_p^2`
    /// multiplications plus two halvings in place of a division by 3).
    /// Agrees with [`Fp6::square`] (CH-SQR2) and with `self * self`.
    pub fn sqr(&self) -> Self {
        let a0 = self.c0;
        let a1 = self.c1;
        let a2 = self.c2;

        let t0 = a0.square();
        let t1 = (a1 * a2).double();
        let t2 = a2.square();

        let sum = a0 + a2;
        let t3 = (sum + a1).square();
        let c2 = (sum - a1).square();
        let c2 = (c2 + t3).halve();

        let t3 = t3 - c2 - t1;
        let c2 = c2 - t0 - t2;

        let c0 = t0 + t1.mul_by_nonresidue();
        let c1 = t3 + t2.mul_by_nonresidue();

        Fp6::new(c0, c1, c2)
    }

    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let a = self.c0;
        let b = self.c1;
        let c = self.c2;

        let t0 = a.square() - (b * c).mul_by_nonresidue();
        let t1 = c.square().mul_by_nonresidue() - a * b;
        let t2 = b.square() - a * c;

        let norm = ((c * t1) + (b * t2)).mul_by_nonresidue() + a * t0;
        let norm_inv = norm.inverse()?;

        Some(Fp6::new(t0 * norm_inv, t1 * norm_inv, t2 * norm_inv))
    }

}

impl Add for Fp6 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut r = self;
        r.add_assign(&other);
        r
    }
}
impl Sub for Fp6 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut r = self;
        r.sub_assign(&other);
        r
    }
}
impl Mul for Fp6 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut r = self;
        r.mul_assign(&other);
        r
    }
}
impl AddAssign<&Fp6> for Fp6 {
    fn add_assign(&mut self, other: &Fp6) {
        Fp6::add_assign(self, other)
    }
}
impl SubAssign<&Fp6> for Fp6 {
    fn sub_assign(&mut self, other: &Fp6) {
        Fp6::sub_assign(self, other)
    }
}
impl MulAssign<&Fp6> for Fp6 {
    fn mul_assign(&mut self, other: &Fp6) {
        Fp6::mul_assign(self, other)
    }
}
impl Neg for Fp6 {
    type Output = Self;
    fn neg(self) -> Self {
        Fp6::neg(&self)
    }
}

impl Distribution<Fp6> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp6 {
        Fp6::new(rng.sample(Standard), rng.sample(Standard), rng.sample(Standard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed([11u8; 16])
    }

    #[test]
    fn add_is_commutative_and_associative() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp6 = r.sample(Standard);
            let b: Fp6 = r.sample(Standard);
            let c: Fp6 = r.sample(Standard);
            assert_eq!(a + b, b + a);
            assert_eq!((a + b) + c, a + (b + c));
            assert_eq!(a + a.neg(), Fp6::zero());
        }
    }

    #[test]
    fn mul_is_commutative_associative_and_distributes() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp6 = r.sample(Standard);
            let b: Fp6 = r.sample(Standard);
            let c: Fp6 = r.sample(Standard);
            assert_eq!(a * b, b * a);
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a * Fp6::one(), a);
        }
    }

    #[test]
    fn square_matches_mul() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp6 = r.sample(Standard);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn sqr_matches_square_and_mul() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp6 = r.sample(Standard);
            assert_eq!(a.sqr(), a * a);
            assert_eq!(a.sqr(), a.square());
        }
    }

    #[test]
    fn mul_by_01_matches_full_mul_with_zero_c2() {
        let mut r = rng();
        for _ in 0..20 {
            let a: Fp6 = r.sample(Standard);
            let c0: Fp2 = r.sample(Standard);
            let c1: Fp2 = r.sample(Standard);
            let sparse = Fp6::new(c0, c1, Fp2::zero());
            assert_eq!(a.mul_by_01(&c0, &c1), a * sparse);
        }
    }

    #[test]
    fn inverse_is_multiplicative_inverse() {
        let mut r = rng();
        let mut done = 0;
        while done < 20 {
            let a: Fp6 = r.sample(Standard);
            if a.is_zero() {
                continue;
            }
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, Fp6::one());
            done += 1;
        }
        assert!(Fp6::zero().inverse().is_none());
    }
}
