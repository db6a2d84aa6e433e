use std::ops::{AddAssign, SubAssign};

use crate::constants::{Limb, WideLimb};

/// Return a vector of `n` zeros of type T.
pub(crate) fn pol_zero<T>(n: usize) -> Vec<T>
where
    T: Copy + Default,
{
    vec![T::default(); n]
}

/// a(x) += b(x), but must have deg(a) >= deg(b).
pub fn pol_add_assign<T>(a: &mut [T], b: &[T])
where
    T: AddAssign + Copy,
{
    debug_assert!(a.len() >= b.len(), "expected {} >= {}", a.len(), b.len());
    for (a_item, b_item) in a.iter_mut().zip(b) {
        *a_item += *b_item;
    }
}

/// a(x) -= b(x), but must have deg(a) >= deg(b).
pub fn pol_sub_assign<T>(a: &mut [T], b: &[T])
where
    T: SubAssign + Copy,
{
    debug_assert!(a.len() >= b.len(), "expected {} >= {}", a.len(), b.len());
    for (a_item, b_item) in a.iter_mut().zip(b) {
        *a_item -= *b_item;
    }
}

/// a(x) += b(x) * x^shift, where a must be long enough to hold the shifted b.
pub fn pol_add_assign_shifted<T>(a: &mut [T], b: &[T], shift: usize)
where
    T: AddAssign + Copy,
{
    pol_add_assign(&mut a[shift..], b);
}

/// Return a(x) + b(x) for operands of any length. No carries are propagated,
/// so coefficients of the result may exceed the limb base.
pub fn pol_add<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: AddAssign + Copy,
{
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = long.to_vec();
    pol_add_assign(&mut sum, short);
    sum
}

/// Given polynomials a(x) and b(x), return a(x)*b(x) by direct convolution.
///
/// The result has `a.len() + b.len()` coefficients (the last one is zero
/// unless a carry pass later moves something into it), or none when either
/// operand is empty.
///
/// NB: The caller is responsible for ensuring that no undesired
/// overflow occurs during the calculation of the coefficients of the
/// product.
pub fn pol_mul_wide(a: &[WideLimb], b: &[WideLimb]) -> Vec<WideLimb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut res = pol_zero(a.len() + b.len());
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            res[i + j] += ai * bj;
        }
    }
    res
}

/// Lift canonical limbs into the signed accumulator type.
pub fn pol_widen(a: &[Limb]) -> Vec<WideLimb> {
    a.iter().map(|&x| WideLimb::from(x)).collect()
}
