pub mod arith;
pub mod big_integer;
pub mod constants;
#[cfg(feature = "std")]
pub mod io;
pub mod utils;

pub use big_integer::BigInteger;
