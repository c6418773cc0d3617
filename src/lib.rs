//! Decimal Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers stored as base-10 digits, with
//!   comparison, negation, addition, subtraction, multiplication and increment/decrement.
//! - [`ParseBigIntError`]: the error returned when a decimal string is not of the form `-?[0-9]+`.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::{InvalidFormatReason, ParseBigIntError};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&b - &a).to_string(), "-9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
    }
}
