pub mod add;
pub mod cmp;
pub mod div;
pub mod mul;
pub mod pol_utils;
