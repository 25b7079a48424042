//! A fixed-width 256-bit big integer, little-endian limb order.
//!
//! This mirrors the `BigInteger` family of the arkworks `algebra-core`
//! crate, trimmed to the single width this backend needs.

use core::cmp::Ordering;
use core::fmt;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::string::String;

pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = (a as u128) + (b as u128) + (carry as u128);
    (tmp as u64, (tmp >> 64) as u64)
}

pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (1u128 << 64) + (a as u128) - (b as u128) - (borrow as u128);
    (tmp as u64, if tmp >> 64 == 0 { 1 } else { 0 })
}

pub(crate) const fn mac_with_carry(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let tmp = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (tmp as u64, (tmp >> 64) as u64)
}

/// A 256-bit unsigned integer, represented as four `u64` limbs,
/// least-significant limb first.
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct BigInteger256(pub [u64; 4]);

impl BigInteger256 {
    pub const NUM_LIMBS: usize = 4;

    pub const fn new(limbs: [u64; 4]) -> Self {
        BigInteger256(limbs)
    }

    pub const fn zero() -> Self {
        BigInteger256([0u64; 4])
    }

    /// Adds `other` to `self`, returning the carry bit.
    pub fn add_nocarry(&mut self, other: &Self) -> bool {
        let mut carry = 0u64;
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            let (sum, c) = adc(*a, *b, carry);
            *a = sum;
            carry = c;
        }
        carry != 0
    }

    /// Subtracts `other` from `self`, returning the borrow bit.
    pub fn sub_noborrow(&mut self, other: &Self) -> bool {
        let mut borrow = 0u64;
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            let (diff, b_) = sbb(*a, *b, borrow);
            *a = diff;
            borrow = b_;
        }
        borrow != 0
    }

    pub fn mul2(&mut self) {
        let mut last = 0u64;
        for limb in self.0.iter_mut() {
            let tmp = *limb >> 63;
            *limb <<= 1;
            *limb |= last;
            last = tmp;
        }
    }

    pub fn div2(&mut self) {
        let mut t = 0u64;
        for limb in self.0.iter_mut().rev() {
            let t2 = *limb << 63;
            *limb >>= 1;
            *limb |= t;
            t = t2;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&x| x == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Number of bits needed to represent `self`, without leading zeros.
    pub fn num_bits(&self) -> u32 {
        let mut ret = (Self::NUM_LIMBS as u32) * 64;
        for limb in self.0.iter().rev() {
            let leading = limb.leading_zeros();
            ret -= leading;
            if leading != 64 {
                break;
            }
        }
        ret
    }

    pub fn get_bit(&self, i: usize) -> bool {
        if i >= 64 * Self::NUM_LIMBS {
            return false;
        }
        let part = i / 64;
        let bit = i - 64 * part;
        (self.0[part] >> bit) & 1 == 1
    }

    /// Parses a big-endian hex string (with or without a leading `0x`)
    /// into a big integer. Panics on malformed input — this is only
    /// ever called on compile-time curve constants.
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches("0x").trim_start_matches("0X");
        let mut limbs = [0u64; 4];
        let bytes = hex.as_bytes();
        let mut limb_idx = 0;
        let mut shift = 0u32;
        let mut i = bytes.len();
        while i > 0 && limb_idx < 4 {
            let start = if i >= 2 { i - 2 } else { i - 1 };
            let chunk = core::str::from_utf8(&bytes[start..i]).unwrap();
            let nibble = u64::from_str_radix(chunk, 16).expect("invalid hex constant");
            limbs[limb_idx] |= nibble << shift;
            shift += 8;
            if shift == 64 {
                shift = 0;
                limb_idx += 1;
            }
            i = start;
        }
        BigInteger256(limbs)
    }

    pub fn to_hex(&self) -> String {
        let mut s = String::new();
        for limb in self.0.iter().rev() {
            s.push_str(&format!("{:016x}", limb));
        }
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

impl Ord for BigInteger256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigInteger256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigInteger256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Display for BigInteger256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<u64> for BigInteger256 {
    fn from(val: u64) -> Self {
        BigInteger256([val, 0, 0, 0])
    }
}

impl AsRef<[u64]> for BigInteger256 {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl AsMut<[u64]> for BigInteger256 {
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

impl Distribution<BigInteger256> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInteger256 {
        BigInteger256([rng.gen(), rng.gen(), rng.gen(), rng.gen()])
    }
}
