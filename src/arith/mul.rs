//! Karatsuba multiplication of limb vectors.
//!
//! The recursion works on raw signed limbs and never carries; intermediate
//! coefficients may be negative or far above the base. A single carry pass
//! in [`multiply`] turns the final convolution back into canonical limbs.

use crate::arith::pol_utils::{
    pol_add, pol_add_assign, pol_add_assign_shifted, pol_mul_wide, pol_sub_assign, pol_widen,
    pol_zero,
};
use crate::big_integer::BigInteger;
use crate::constants::{Limb, WideLimb, BASE, KARATSUBA_THRESHOLD, MAX_KARATSUBA_LIMBS};

/// Schoolbook product of raw limbs, `O(n*m)`. Used as the recursion base case.
pub fn schoolbook_mul(a: &[WideLimb], b: &[WideLimb]) -> Vec<WideLimb> {
    pol_mul_wide(a, b)
}

/// Karatsuba product of raw limbs, `O(n^1.585)`.
///
/// Returns the uncarried convolution of `a` and `b`; an empty operand gives
/// an empty result.
pub fn karatsuba_mul(a: &[WideLimb], b: &[WideLimb]) -> Vec<WideLimb> {
    if a.len() < b.len() {
        return karatsuba_mul(b, a);
    }
    if b.is_empty() {
        return Vec::new();
    }

    let n = a.len();
    if n <= KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    // b may be shorter than the split point, in which case b2 is empty
    let k = n / 2;
    let (a1, a2) = a.split_at(k);
    let (b1, b2) = b.split_at(b.len().min(k));
    log::trace!("karatsuba split: n = {}, m = {}, k = {}", n, b.len(), k);

    let z0 = karatsuba_mul(a1, b1);
    let z2 = karatsuba_mul(a2, b2);

    // z1 = (a1 + a2)(b1 + b2) - z0 - z2
    // Coefficients past the true degree of a raw product are exactly zero,
    // so padding z1 (and the output) to a common length changes nothing.
    let mut z1 = karatsuba_mul(&pol_add(a1, a2), &pol_add(b1, b2));
    z1.resize(z1.len().max(z0.len()).max(z2.len()), 0);
    pol_sub_assign(&mut z1, &z0);
    pol_sub_assign(&mut z1, &z2);

    let res_len = (z0.len() + 2 * (n - k))
        .max(k + z1.len())
        .max(2 * k + z2.len());
    let mut res = pol_zero(res_len);
    pol_add_assign(&mut res, &z0);
    pol_add_assign_shifted(&mut res, &z1, k);
    pol_add_assign_shifted(&mut res, &z2, 2 * k);
    res
}

/// Turns a raw convolution into canonical limbs.
///
/// Positions may be negative as long as the represented total is not;
/// Euclidean division keeps every emitted limb in `[0, BASE)`.
pub fn carry_normalize(raw: &[WideLimb]) -> Vec<Limb> {
    let base = WideLimb::from(BASE);
    let mut limbs = Vec::with_capacity(raw.len() + 1);
    let mut cy: WideLimb = 0;
    for &c in raw {
        let t = c + cy;
        limbs.push(t.rem_euclid(base) as Limb);
        cy = t.div_euclid(base);
    }
    debug_assert!(cy >= 0, "negative total after carry pass");
    while cy > 0 {
        limbs.push((cy % base) as Limb);
        cy /= base;
    }
    limbs
}

/// |a| * |b| as canonical (not yet normalized) limbs.
pub fn mul_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    assert!(
        a.len().max(b.len()) <= MAX_KARATSUBA_LIMBS,
        "operand of {} limbs exceeds the multiplication limit of {} limbs",
        a.len().max(b.len()),
        MAX_KARATSUBA_LIMBS
    );
    let raw = karatsuba_mul(&pol_widen(a), &pol_widen(b));
    carry_normalize(&raw)
}

/// a * b. The sign is the XOR of the operand signs; a zero product is
/// normalized back to non-negative.
pub fn multiply(a: &BigInteger, b: &BigInteger) -> BigInteger {
    #[cfg(feature = "timing")]
    let now = std::time::Instant::now();

    let recursive = a.limb_len().max(b.limb_len()) > KARATSUBA_THRESHOLD;
    let digits = mul_magnitude(a.digits(), b.digits());
    let product = BigInteger::from_parts(a.is_negative() != b.is_negative(), digits);

    if recursive {
        log::debug!(
            "karatsuba multiply: {} x {} limbs -> {} limbs",
            a.limb_len(),
            b.limb_len(),
            product.limb_len()
        );
    }
    #[cfg(feature = "timing")]
    log::debug!(
        "multiply {} x {} limbs took {:?}",
        a.limb_len(),
        b.limb_len(),
        now.elapsed()
    );

    product
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::utils::{random_big_integer, to_num_bigint};

    fn random_limbs(rng: &mut ChaCha8Rng, len: usize) -> Vec<WideLimb> {
        (0..len)
            .map(|_| rng.gen_range(0..WideLimb::from(BASE)))
            .collect()
    }

    #[test]
    fn test_karatsuba_matches_schoolbook_around_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let lens = [1, 2, 15, 16, 17, 31, 32, 33, 34, 63, 64, 65, 100];
        for &n in lens.iter() {
            for &m in lens.iter() {
                let a = random_limbs(&mut rng, n);
                let b = random_limbs(&mut rng, m);
                let expected = carry_normalize(&schoolbook_mul(&a, &b));
                let actual = carry_normalize(&karatsuba_mul(&a, &b));
                assert_eq!(expected, actual, "mismatch for {} x {} limbs", n, m);
            }
        }
    }

    #[test]
    fn test_karatsuba_all_max_limbs() {
        // worst case for the raw coefficients
        let a = vec![WideLimb::from(BASE - 1); 257];
        let b = vec![WideLimb::from(BASE - 1); 129];
        assert_eq!(
            carry_normalize(&karatsuba_mul(&a, &b)),
            carry_normalize(&schoolbook_mul(&a, &b))
        );
    }

    #[test]
    fn test_empty_operand() {
        assert!(karatsuba_mul(&[], &[1, 2, 3]).is_empty());
        assert!(karatsuba_mul(&[1, 2, 3], &[]).is_empty());
    }

    #[test]
    fn test_carry_normalize_resolves_negative_positions() {
        // -1 + 2*BASE = 19999 -> [9999, 1]
        assert_eq!(carry_normalize(&[-1, 2]), vec![9999, 1]);
        assert_eq!(carry_normalize(&[25_000, 0]), vec![5000, 2]);
        assert_eq!(carry_normalize(&[0, 123_456_789]), vec![0, 6789, 2345, 1]);
    }

    #[test]
    fn test_multiply_signs() {
        let a: BigInteger = "-50".parse().unwrap();
        let b: BigInteger = "30".parse().unwrap();
        assert_eq!(multiply(&a, &b).to_string(), "-1500");
        assert_eq!(multiply(&a, &a).to_string(), "2500");
        let zero = BigInteger::from(0);
        let product = multiply(&a, &zero);
        assert!(!product.is_negative());
        assert_eq!(product.to_string(), "0");
    }

    #[test]
    fn test_multiply_large_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(200);
        for digits in [124, 128, 129, 132, 200, 257, 400, 1000] {
            let a = random_big_integer(&mut rng, digits, true);
            let b = random_big_integer(&mut rng, digits + 37, true);
            let product = multiply(&a, &b);
            assert_eq!(
                to_num_bigint(&product),
                to_num_bigint(&a) * to_num_bigint(&b)
            );
            assert_eq!(product, multiply(&b, &a));
        }
    }

    #[test]
    fn test_multiply_unbalanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = random_big_integer(&mut rng, 2000, false);
        let b = random_big_integer(&mut rng, 3, true);
        let expected: BigInt = to_num_bigint(&a) * to_num_bigint(&b);
        assert_eq!(to_num_bigint(&multiply(&a, &b)), expected);
        assert_eq!(to_num_bigint(&multiply(&b, &a)), expected);
    }
}
