use std::cmp::Ordering;

use crate::constants::Limb;

/// Orders two normalized magnitudes.
///
/// Both slices must be free of most-significant zero limbs, so a shorter
/// slice is always the smaller value.
pub fn cmp_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// |a| < |b| for normalized magnitudes. Equal magnitudes are not less.
pub fn less_than_magnitude(a: &[Limb], b: &[Limb]) -> bool {
    cmp_magnitude(a, b) == Ordering::Less
}

/// Signed ordering of two normalized values given as (negative, magnitude).
///
/// Zero never carries the negative flag, so a sign mismatch alone decides.
pub fn cmp_signed(a_negative: bool, a: &[Limb], b_negative: bool, b: &[Limb]) -> Ordering {
    match (a_negative, b_negative) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => cmp_magnitude(a, b),
        (true, true) => cmp_magnitude(b, a),
    }
}
