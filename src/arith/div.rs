use crate::big_integer::BigInteger;
use crate::constants::{Limb, BASE};

/// Long division of a magnitude by a single non-zero word.
///
/// Walks the limbs from most to least significant; returns the quotient
/// limbs (not normalized) and the remainder.
pub fn div_rem_magnitude(a: &[Limb], d: u64) -> (Vec<Limb>, u64) {
    assert!(d != 0, "attempt to divide by zero");
    let d = u128::from(d);
    let mut quot = vec![0; a.len()];
    let mut rem: u128 = 0;
    for (q, &limb) in quot.iter_mut().zip(a).rev() {
        let cur = rem * u128::from(BASE) + u128::from(limb);
        // rem < d, so cur / d < BASE
        *q = (cur / d) as Limb;
        rem = cur % d;
    }
    (quot, rem as u64)
}

/// Quotient and remainder of `a / d`, truncating toward zero.
///
/// The remainder has the sign of the dividend, so `a == q * d + r` and
/// `|r| < |d|`, as with the primitive integer operators.
///
/// # Panics
///
/// Panics if `d` is zero.
pub fn div_rem_int(a: &BigInteger, d: i64) -> (BigInteger, i64) {
    let (quot, rem) = div_rem_magnitude(a.digits(), d.unsigned_abs());
    let q = BigInteger::from_parts(a.is_negative() != (d < 0), quot);
    // |rem| < |d| <= 2^63, so it fits once the sign is applied
    let r = if a.is_negative() {
        (rem as i64).wrapping_neg()
    } else {
        rem as i64
    };
    (q, r)
}

/// Quotient of `a / d`, truncating toward zero.
///
/// # Panics
///
/// Panics if `d` is zero.
pub fn div_by_int(a: &BigInteger, d: i64) -> BigInteger {
    div_rem_int(a, d).0
}

/// Like [`div_by_int`], but returns `None` for a zero divisor.
pub fn checked_div_int(a: &BigInteger, d: i64) -> Option<BigInteger> {
    if d == 0 {
        None
    } else {
        Some(div_by_int(a, d))
    }
}
