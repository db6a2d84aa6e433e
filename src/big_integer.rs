//! Signed arbitrary-precision integers stored as base-10000 limbs.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;

use anyhow::{ensure, Error};
use num_traits::{One, Zero};

use crate::arith::{add, cmp, div, mul};
use crate::constants::{Limb, BASE, LIMB_WIDTH};

/// A signed arbitrary-precision integer.
///
/// The magnitude is a sequence of base-10000 limbs, least significant first.
/// Values are always normalized: at least one limb, no most-significant zero
/// limbs (except the single limb of zero) and zero is never negative. The
/// representation is therefore canonical and structural equality is numeric
/// equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    digits: Vec<Limb>,
    negative: bool,
}

impl BigInteger {
    /// Builds a value from a sign and raw magnitude limbs, normalizing them.
    /// An empty magnitude is zero.
    pub(crate) fn from_parts(negative: bool, digits: Vec<Limb>) -> Self {
        debug_assert!(digits.iter().all(|&x| x < BASE), "limb out of range");
        let mut res = Self { digits, negative };
        res.normalize();
        res
    }

    fn from_magnitude(negative: bool, mut n: u64) -> Self {
        let base = u64::from(BASE);
        let mut digits = Vec::new();
        loop {
            digits.push((n % base) as Limb);
            n /= base;
            if n == 0 {
                break;
            }
        }
        Self::from_parts(negative, digits)
    }

    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// The magnitude limbs, least significant first.
    pub fn digits(&self) -> &[Limb] {
        &self.digits
    }

    /// Number of limbs in the magnitude; zero has one.
    pub fn limb_len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Self {
            digits: self.digits.clone(),
            negative: false,
        }
    }

    /// Quotient and remainder by a machine word, truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    pub fn div_rem_int(&self, d: i64) -> (Self, i64) {
        div::div_rem_int(self, d)
    }

    /// Quotient by a machine word, or `None` if `d` is zero.
    pub fn checked_div_int(&self, d: i64) -> Option<Self> {
        div::checked_div_int(self, d)
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self {
            digits: vec![0],
            negative: false,
        }
    }

    fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self {
            digits: vec![1],
            negative: false,
        }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::from_magnitude(value < 0, value.unsigned_abs())
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_magnitude(false, value)
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    /// Parses `-?[0-9]+`. Leading zeros are accepted, and `-0` is zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        ensure!(!body.is_empty(), "no digits in integer literal {:?}", s);
        if let Some(c) = body.chars().find(|c| !c.is_ascii_digit()) {
            log::debug!("rejecting integer literal {:?}", s);
            anyhow::bail!("invalid digit {:?} in integer literal {:?}", c, s);
        }

        // groups of LIMB_WIDTH digits from the least-significant end; the
        // most-significant group may be shorter
        let bytes = body.as_bytes();
        let mut digits = Vec::with_capacity(bytes.len() / LIMB_WIDTH + 1);
        let mut end = bytes.len();
        while end > 0 {
            let begin = end.saturating_sub(LIMB_WIDTH);
            let limb = bytes[begin..end]
                .iter()
                .fold(0, |acc: Limb, &b| acc * 10 + Limb::from(b - b'0'));
            digits.push(limb);
            end = begin;
        }
        Ok(Self::from_parts(negative, digits))
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let Some((most, rest)) = self.digits.split_last() else {
            return f.write_str("0");
        };
        write!(f, "{}", most)?;
        for limb in rest.iter().rev() {
            write!(f, "{:0width$}", limb, width = LIMB_WIDTH)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp::cmp_signed(self.negative, &self.digits, other.negative, &other.digits)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The engines work on references; the owned forms forward to them.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $engine:path) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $engine(self, rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $engine(self, &rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $engine(&self, rhs)
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $engine(&self, &rhs)
            }
        }
    };
}

forward_binop!(impl Add, add, add::add);
forward_binop!(impl Sub, sub, add::subtract);
forward_binop!(impl Mul, mul, mul::multiply);

macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident, $engine:path) => {
        impl $imp<&BigInteger> for BigInteger {
            fn $method(&mut self, rhs: &BigInteger) {
                *self = $engine(self, rhs);
            }
        }

        impl $imp<BigInteger> for BigInteger {
            fn $method(&mut self, rhs: BigInteger) {
                *self = $engine(self, &rhs);
            }
        }
    };
}

forward_assign_op!(impl AddAssign, add_assign, add::add);
forward_assign_op!(impl SubAssign, sub_assign, add::subtract);
forward_assign_op!(impl MulAssign, mul_assign, mul::multiply);

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        add::negate(self)
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Div<i64> for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: i64) -> BigInteger {
        div::div_by_int(self, rhs)
    }
}

impl Div<i64> for BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: i64) -> BigInteger {
        div::div_by_int(&self, rhs)
    }
}

impl Div<i32> for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: i32) -> BigInteger {
        div::div_by_int(self, i64::from(rhs))
    }
}

impl Div<i32> for BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: i32) -> BigInteger {
        div::div_by_int(&self, i64::from(rhs))
    }
}

impl Rem<i64> for &BigInteger {
    type Output = i64;

    fn rem(self, rhs: i64) -> i64 {
        div::div_rem_int(self, rhs).1
    }
}

impl Rem<i64> for BigInteger {
    type Output = i64;

    fn rem(self, rhs: i64) -> i64 {
        div::div_rem_int(&self, rhs).1
    }
}
