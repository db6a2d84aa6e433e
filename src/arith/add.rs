use itertools::{EitherOrBoth, Itertools};

use crate::arith::cmp::less_than_magnitude;
use crate::big_integer::BigInteger;
use crate::constants::{Limb, BASE};

/// |a| + |b| with carry propagation. The result may carry one extra limb.
pub fn add_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut sum = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut cy = 0;
    for pair in a.iter().zip_longest(b) {
        let t = cy + match pair {
            EitherOrBoth::Both(&x, &y) => x + y,
            EitherOrBoth::Left(&x) | EitherOrBoth::Right(&x) => x,
        };
        sum.push(t % BASE);
        cy = t / BASE;
    }
    if cy != 0 {
        sum.push(cy);
    }
    sum
}

/// |a| - |b| with borrow propagation; requires |a| >= |b|.
///
/// The result is not normalized: it has as many limbs as `a`.
pub fn sub_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(!less_than_magnitude(a, b), "subtrahend exceeds minuend");
    let mut diff = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        // x + BASE - borrow - y cannot underflow since x, y < BASE
        let t = x + BASE - borrow - y;
        if t < BASE {
            diff.push(t);
            borrow = 1;
        } else {
            diff.push(t - BASE);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0);
    diff
}

/// -a; zero stays non-negative.
pub fn negate(a: &BigInteger) -> BigInteger {
    BigInteger::from_parts(!a.is_negative(), a.digits().to_vec())
}

/// a + b. Mixed signs are rewritten as a subtraction of magnitudes.
pub fn add(a: &BigInteger, b: &BigInteger) -> BigInteger {
    if a.is_negative() == b.is_negative() {
        return BigInteger::from_parts(a.is_negative(), add_magnitude(a.digits(), b.digits()));
    }
    if a.is_negative() {
        // (-x) + y = y - x
        subtract(b, &negate(a))
    } else {
        // x + (-y) = x - y
        subtract(a, &negate(b))
    }
}

/// a - b. Mixed signs are rewritten as an addition; a smaller minuend is
/// swapped so the borrow chain always runs on |a| >= |b|.
pub fn subtract(a: &BigInteger, b: &BigInteger) -> BigInteger {
    if a.is_negative() != b.is_negative() {
        return add(a, &negate(b));
    }
    if less_than_magnitude(a.digits(), b.digits()) {
        return negate(&subtract(b, a));
    }
    BigInteger::from_parts(a.is_negative(), sub_magnitude(a.digits(), b.digits()))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::utils::{random_big_integer, to_num_bigint};

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_magnitude_carry_chain() {
        // 9999_9999_9999 + 1
        assert_eq!(add_magnitude(&[9999, 9999, 9999], &[1]), vec![0, 0, 0, 1]);
        assert_eq!(add_magnitude(&[1], &[9999, 9999]), vec![0, 0, 1]);
    }

    #[test]
    fn test_sub_magnitude_borrow_chain() {
        // 1_0000_0000 - 1
        assert_eq!(sub_magnitude(&[0, 0, 1], &[1]), vec![9999, 9999, 0]);
        assert_eq!(sub_magnitude(&[5], &[5]), vec![0]);
    }

    #[test]
    fn test_sign_combinations() {
        assert_eq!(add(&big("-50"), &big("30")).to_string(), "-20");
        assert_eq!(subtract(&big("-50"), &big("30")).to_string(), "-80");
        assert_eq!(add(&big("50"), &big("-30")).to_string(), "20");
        assert_eq!(subtract(&big("30"), &big("50")).to_string(), "-20");
        assert_eq!(subtract(&big("-30"), &big("-50")).to_string(), "20");
        assert_eq!(add(&big("-30"), &big("-50")).to_string(), "-80");
        assert_eq!(subtract(&big("30"), &big("-50")).to_string(), "80");
    }

    #[test]
    fn test_zero_results_are_not_negative() {
        let r = subtract(&big("-12345678"), &big("-12345678"));
        assert!(!r.is_negative());
        assert_eq!(r.to_string(), "0");
        assert_eq!(negate(&big("0")), big("0"));
        assert_eq!(add(&big("0"), &big("0")).to_string(), "0");
        assert_eq!(subtract(&big("0"), &big("0")).to_string(), "0");
    }

    #[test]
    fn test_additive_properties_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for i in 0..200 {
            let digits = 1 + (i % 60) * 3;
            let a = random_big_integer(&mut rng, digits, true);
            let b = random_big_integer(&mut rng, 1 + (i * 7) % 90, true);
            let c = random_big_integer(&mut rng, 1 + (i * 13) % 40, true);

            let sum = add(&a, &b);
            assert_eq!(to_num_bigint(&sum), to_num_bigint(&a) + to_num_bigint(&b));
            assert_eq!(sum, add(&b, &a));
            assert_eq!(add(&add(&a, &b), &c), add(&a, &add(&b, &c)));

            let diff = subtract(&a, &b);
            assert_eq!(to_num_bigint(&diff), to_num_bigint(&a) - to_num_bigint(&b));
            assert_eq!(diff, add(&a, &negate(&b)));

            assert_eq!(add(&a, &negate(&a)).to_string(), "0");
            assert_eq!(to_num_bigint(&add(&a, &negate(&a))), BigInt::from(0));
        }
    }
}
