use itertools::Itertools;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use rand::Rng;

use crate::big_integer::BigInteger;
use crate::constants::{Limb, BASE, LIMB_WIDTH};

/// Packs little-endian decimal digits into base-10000 limbs.
fn decimal_digits_to_limbs(decimal_le: &[u8]) -> Vec<Limb> {
    decimal_le
        .chunks(LIMB_WIDTH)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .fold(0, |acc: Limb, &d| acc * 10 + Limb::from(d))
        })
        .collect_vec()
}

pub fn to_num_bigint(x: &BigInteger) -> BigInt {
    let magnitude = x
        .digits()
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &limb| acc * BASE + limb);
    let sign = if x.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

pub fn from_num_bigint(x: &BigInt) -> BigInteger {
    let limbs = decimal_digits_to_limbs(&x.magnitude().to_radix_le(10));
    BigInteger::from_parts(x.sign() == Sign::Minus, limbs)
}

impl From<&BigInt> for BigInteger {
    fn from(value: &BigInt) -> Self {
        from_num_bigint(value)
    }
}

impl From<&BigInteger> for BigInt {
    fn from(value: &BigInteger) -> Self {
        to_num_bigint(value)
    }
}

/// A uniformly random integer with exactly `digits` decimal digits (a single
/// digit may be zero). With `allow_negative` the sign is a coin flip.
pub fn random_big_integer<R: Rng + ?Sized>(
    rng: &mut R,
    digits: usize,
    allow_negative: bool,
) -> BigInteger {
    assert!(digits > 0, "an integer has at least one digit");
    let mut decimal_le = (0..digits - 1).map(|_| rng.gen_range(0..10u8)).collect_vec();
    decimal_le.push(if digits == 1 {
        rng.gen_range(0..10)
    } else {
        rng.gen_range(1..10)
    });
    let negative = allow_negative && rng.gen_bool(0.5);
    BigInteger::from_parts(negative, decimal_digits_to_limbs(&decimal_le))
}
