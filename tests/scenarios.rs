use decimal_big_int::{BigInt, InvalidFormatReason, ParseBigIntError};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_mixed_sign_addition() {
    assert_eq!(BigInt::from(-100) + BigInt::from(25), BigInt::from(-75));
}

#[test]
fn test_long_multiplication() {
    assert_eq!(big("987654321") * big("123456789"), big("121932631112635269"));
}

#[test]
fn test_subtraction_borrows_across_digits() {
    assert_eq!(big("1000") - big("999"), big("1"));
}

#[test]
fn test_subtraction_of_negatives() {
    assert_eq!(big("-123") - big("-12345"), big("12222"));
}

#[test]
fn test_leading_zeros_are_dropped() {
    assert_eq!(big("00012345"), BigInt::from(12345));
}

#[test]
fn test_invalid_format() {
    for input in ["", "-", "123a456", " 1", "1.0", "0x10"] {
        let err = input.parse::<BigInt>().unwrap_err();
        assert!(matches!(err, ParseBigIntError::InvalidFormat { .. }), "{:?}", input);
    }

    let err = BigInt::try_from("123a456").unwrap_err();
    assert_eq!(
        err,
        ParseBigIntError::InvalidFormat {
            input: "123a456".to_string(),
            reason: InvalidFormatReason::InvalidDigit { ch: 'a', index: 3 },
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid big integer literal \"123a456\": invalid digit 'a' at index 3"
    );
    assert_eq!(
        "".parse::<BigInt>().unwrap_err().to_string(),
        "invalid big integer literal \"\": no digits"
    );
}

#[test]
fn test_post_increment_returns_prior_value() {
    let mut x = BigInt::from(999);
    assert_eq!(x.post_increment(), BigInt::from(999));
    assert_eq!(x, BigInt::from(1000));
}

#[test]
fn test_negated_zero_is_zero() {
    let zero = BigInt::from(0);
    assert_eq!(zero, -BigInt::from(0));
    assert_eq!((-&zero).to_string(), "0");
    assert_eq!(big("-0"), zero);
}

#[test]
fn test_factorial_of_thirty() {
    let mut acc = BigInt::from(1);
    let mut i = BigInt::from(1);
    while i <= BigInt::from(30) {
        acc *= &i;
        i.increment();
    }
    assert_eq!(acc.to_string(), "265252859812191058636308480000000");
}

#[test]
fn test_countdown_through_zero() {
    let mut x = BigInt::from(2);
    let seen: Vec<String> = (0..5).map(|_| x.post_decrement().to_string()).collect();
    assert_eq!(seen, ["2", "1", "0", "-1", "-2"]);
    assert_eq!(x, BigInt::from(-3));
}
