//! Generic Montgomery-form prime field, parameterised over a single
//! curve's modulus via [`FpParameters`]. This is the "external"
//! prime-field backend: a concrete curve plugs in its modulus and
//! Montgomery constants and gets CIOS multiplication, inversion and
//! encode/decode for free.

use crate::biginteger::{adc, mac_with_carry, sbb, BigInteger256};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Curve-specific Montgomery constants for a 256-bit prime modulus.
pub trait FpParameters: 'static + Send + Sync + Sized {
    /// The modulus `p`.
    const MODULUS: BigInteger256;
    /// `R = 2^256 mod p`.
    const R: BigInteger256;
    /// `R2 = R^2 mod p`.
    const R2: BigInteger256;
    /// `INV = -p^{-1} mod 2^64`.
    const INV: u64;
}

/// An element of `F_p` held in Montgomery form (`self.0 = x * R mod p`).
pub struct Fp256<P: FpParameters> {
    pub(crate) repr: BigInteger256,
    _params: PhantomData<P>,
}

impl<P: FpParameters> Clone for Fp256<P> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P: FpParameters> Copy for Fp256<P> {}

impl<P: FpParameters> Fp256<P> {
    pub const fn new(repr: BigInteger256) -> Self {
        Fp256 {
            repr,
            _params: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(BigInteger256::zero())
    }

    pub fn one() -> Self {
        Self::new(P::R)
    }

    pub fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    /// Encodes a residue `x` (in `[0, p)`) into Montgomery form.
    pub fn from_repr(repr: BigInteger256) -> Self {
        let mut r = Self::new(repr);
        r.mul_assign(&Self::new(P::R2));
        r
    }

    /// Decodes `self` out of Montgomery form back to a plain residue.
    /// Equivalent to a single Montgomery reduction of `repr` padded with
    /// zero high limbs, i.e. `reduce(repr * 1)`.
    pub fn into_repr(&self) -> BigInteger256 {
        montgomery_reduce::<P>([
            self.repr.0[0],
            self.repr.0[1],
            self.repr.0[2],
            self.repr.0[3],
            0,
            0,
            0,
            0,
        ])
    }

    pub fn add_assign(&mut self, other: &Self) {
        self.repr.add_nocarry(&other.repr);
        if self.repr >= P::MODULUS {
            self.repr.sub_noborrow(&P::MODULUS);
        }
    }

    pub fn sub_assign(&mut self, other: &Self) {
        if self.repr < other.repr {
            self.repr.add_nocarry(&P::MODULUS);
        }
        self.repr.sub_noborrow(&other.repr);
    }

    pub fn neg(&self) -> Self {
        if self.is_zero() {
            *self
        } else {
            let mut m = P::MODULUS;
            m.sub_noborrow(&self.repr);
            Self::new(m)
        }
    }

    pub fn double(&self) -> Self {
        let mut r = *self;
        r.add_assign(self);
        r
    }

    pub fn mul_assign(&mut self, other: &Self) {
        let a = self.repr.0;
        let b = other.repr.0;
        let mut t = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0u64;
            for j in 0..4 {
                let (v, c) = mac_with_carry(t[i + j], a[i], b[j], carry);
                t[i + j] = v;
                carry = c;
            }
            t[i + 4] = carry;
        }
        self.repr = montgomery_reduce::<P>(t);
    }

    pub fn square(&self) -> Self {
        let mut r = *self;
        r.mul_assign(self);
        r
    }

    /// Binary-GCD style modular inverse via Fermat's little theorem
    /// (`self^{p-2}`), avoided in favour of the extended Euclidean
    /// algorithm on the decoded representative for speed.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let mut u = self.into_repr();
        let mut v = P::MODULUS;
        let mut x1 = BigInteger256::from(1u64);
        let mut x2 = BigInteger256::zero();

        while u != BigInteger256::from(1u64) && v != BigInteger256::from(1u64) {
            while u.is_even() {
                u.div2();
                if x1.is_even() {
                    x1.div2();
                } else {
                    x1.add_nocarry(&P::MODULUS);
                    x1.div2();
                }
            }
            while v.is_even() {
                v.div2();
                if x2.is_even() {
                    x2.div2();
                } else {
                    x2.add_nocarry(&P::MODULUS);
                    x2.div2();
                }
            }
            if u >= v {
                u.sub_noborrow(&v);
                if x1 < x2 {
                    x1.add_nocarry(&P::MODULUS);
                }
                x1.sub_noborrow(&x2);
            } else {
                v.sub_noborrow(&u);
                if x2 < x1 {
                    x2.add_nocarry(&P::MODULUS);
                }
                x2.sub_noborrow(&x1);
            }
        }
        let out = if u == BigInteger256::from(1u64) { x1 } else { x2 };
        Some(Self::from_repr(out))
    }

    pub fn is_one(&self) -> bool {
        self.repr == P::R
    }

    /// Divides by 2 modulo `p`: add `p` when the representative is odd
    /// (making it even without changing the residue class) then shift
    /// right. Valid directly on the Montgomery representative, since
    /// halving a residue mod an odd prime is representation-agnostic.
    pub fn halve(&self) -> Self {
        let mut r = self.repr;
        if r.is_odd() {
            r.add_nocarry(&P::MODULUS);
        }
        r.div2();
        Self::new(r)
    }

    /// Widened product of `self` and `other`, without the Montgomery
    /// reduction step. Pairs with [`Fp256::wide_add`]/[`Fp256::wide_sub_abs`]
    /// and [`Fp256::rdc`] to defer reduction across a multi-term
    /// Karatsuba combination (the `mul_unr`/`rdc` split the tower's
    /// extension fields build their own `mul_unr` on top of).
    pub fn mul_wide(&self, other: &Self) -> [u64; 8] {
        let a = self.repr.0;
        let b = other.repr.0;
        let mut t = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0u64;
            for j in 0..4 {
                let (v, c) = mac_with_carry(t[i + j], a[i], b[j], carry);
                t[i + j] = v;
                carry = c;
            }
            t[i + 4] = carry;
        }
        t
    }

    /// Adds two widened magnitudes as produced by [`Fp256::mul_wide`].
    pub fn wide_add(a: &[u64; 8], b: &[u64; 8]) -> [u64; 8] {
        let mut out = *a;
        let mut carry = 0u64;
        for (x, y) in out.iter_mut().zip(b.iter()) {
            let (sum, c) = adc(*x, *y, carry);
            *x = sum;
            carry = c;
        }
        out
    }

    /// Subtracts the smaller of two widened magnitudes from the larger,
    /// returning `(|a - b|, a < b)`. Widened products carry no sign bit
    /// of their own, so the sign has to be tracked alongside the
    /// magnitude, the way the unreduced Karatsuba terms this backs do.
    pub fn wide_sub_abs(a: &[u64; 8], b: &[u64; 8]) -> ([u64; 8], bool) {
        let (hi, lo, negative) = if wide_cmp(a, b) == Ordering::Less {
            (b, a, true)
        } else {
            (a, b, false)
        };
        let mut out = *hi;
        let mut borrow = 0u64;
        for (x, y) in out.iter_mut().zip(lo.iter()) {
            let (diff, bw) = sbb(*x, *y, borrow);
            *x = diff;
            borrow = bw;
        }
        (out, negative)
    }

    /// Montgomery-reduces a widened magnitude back into the field, the
    /// second half of the `mul_unr`/`rdc` split: negating the reduced
    /// result when `negative` is set mirrors the source's "add `p`
    /// back" step for a coordinate that came out negative.
    pub fn rdc(t: [u64; 8], negative: bool) -> Self {
        let r = Self::new(montgomery_reduce::<P>(t));
        if negative {
            r.neg()
        } else {
            r
        }
    }
}

fn wide_cmp(a: &[u64; 8], b: &[u64; 8]) -> Ordering {
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// CIOS Montgomery reduction of an 8-limb product into a 4-limb residue.
fn montgomery_reduce<P: FpParameters>(mut t: [u64; 8]) -> BigInteger256 {
    for i in 0..4 {
        let k = t[i].wrapping_mul(P::INV);
        let mut carry = 0u64;
        for j in 0..4 {
            let (v, c) = mac_with_carry(t[i + j], k, P::MODULUS.0[j], carry);
            t[i + j] = v;
            carry = c;
        }
        // propagate carry into the remaining high limbs
        let mut idx = i + 4;
        while carry != 0 && idx < 8 {
            let (v, c) = adc(t[idx], 0, carry);
            t[idx] = v;
            carry = c;
            idx += 1;
        }
    }
    let mut out = BigInteger256([t[4], t[5], t[6], t[7]]);
    if out >= P::MODULUS {
        out.sub_noborrow(&P::MODULUS);
    }
    out
}

impl<P: FpParameters> PartialEq for Fp256<P> {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}
impl<P: FpParameters> Eq for Fp256<P> {}

impl<P: FpParameters> PartialOrd for Fp256<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.repr.partial_cmp(&other.repr)
    }
}
impl<P: FpParameters> Ord for Fp256<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl<P: FpParameters> Default for Fp256<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FpParameters> fmt::Debug for Fp256<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp256({:?})", self.into_repr())
    }
}
impl<P: FpParameters> fmt::Display for Fp256<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_repr())
    }
}

impl<P: FpParameters> Add for Fp256<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut r = self;
        r.add_assign(&other);
        r
    }
}
impl<P: FpParameters> Sub for Fp256<P> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut r = self;
        r.sub_assign(&other);
        r
    }
}
impl<P: FpParameters> Mul for Fp256<P> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut r = self;
        r.mul_assign(&other);
        r
    }
}
impl<P: FpParameters> AddAssign<&Self> for Fp256<P> {
    fn add_assign(&mut self, other: &Self) {
        Fp256::add_assign(self, other)
    }
}
impl<P: FpParameters> SubAssign<&Self> for Fp256<P> {
    fn sub_assign(&mut self, other: &Self) {
        Fp256::sub_assign(self, other)
    }
}
impl<P: FpParameters> MulAssign<&Self> for Fp256<P> {
    fn mul_assign(&mut self, other: &Self) {
        Fp256::mul_assign(self, other)
    }
}
impl<P: FpParameters> Neg for Fp256<P> {
    type Output = Self;
    fn neg(self) -> Self {
        Fp256::neg(&self)
    }
}

impl<P: FpParameters> Distribution<Fp256<P>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp256<P> {
        loop {
            let mut repr: BigInteger256 = rng.sample(Standard);
            // ensure the sampled residue stays below the modulus by
            // clearing the top bits beyond the modulus' bit length
            let shave = 256 - P::MODULUS.num_bits();
            if shave > 0 {
                let top = repr.0.len() - 1;
                repr.0[top] &= u64::MAX >> shave.min(64);
            }
            if repr < P::MODULUS {
                return Fp256::from_repr(repr);
            }
        }
    }
}
