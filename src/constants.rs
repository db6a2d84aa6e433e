use static_assertions::const_assert;

/// Storage type of a canonical limb, always in `[0, BASE)`.
pub type Limb = u32;

/// Signed accumulator used by the multiplication engine. Raw limbs of this
/// type may be negative or exceed `BASE` until the final carry pass.
pub type WideLimb = i64;

pub const LIMB_WIDTH: usize = 4;
pub const BASE: Limb = 10_000;

/// Operands at or below this many limbs are multiplied with the quadratic
/// convolution instead of recursing.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Largest operand (in limbs) the multiplication engine accepts. A raw
/// coefficient is bounded by roughly `n^2 / (KARATSUBA_THRESHOLD / 2) * (BASE - 1)^2`
/// (the shortest base-case operand has half the threshold length), which has
/// to stay below `WideLimb::MAX`.
pub const MAX_KARATSUBA_LIMBS: usize = 1 << 20;

const_assert!(10u32.pow(LIMB_WIDTH as u32) == BASE);
const_assert!(KARATSUBA_THRESHOLD >= 2);
const_assert!(
    (MAX_KARATSUBA_LIMBS as u128) * (MAX_KARATSUBA_LIMBS as u128) / (KARATSUBA_THRESHOLD as u128 / 2)
        * ((BASE as u128 - 1) * (BASE as u128 - 1))
        < i64::MAX as u128
);
