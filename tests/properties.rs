use decimal_big_int::BigInt;
use proptest::prelude::*;

/// Decimal strings well beyond the native integer range, including leading zeros.
fn arb_decimal() -> impl Strategy<Value = String> {
    "-?[0-9]{1,60}".prop_map(|s| s.to_string())
}

fn arb_big_int() -> impl Strategy<Value = BigInt> {
    arb_decimal().prop_map(|s| s.parse::<BigInt>().unwrap())
}

fn arb_small() -> impl Strategy<Value = i64> {
    any::<i64>().prop_map(|x| x >> 2)
}

proptest! {
    #[test]
    fn round_trip_through_text(a in arb_big_int()) {
        let text = a.to_string();
        prop_assert_eq!(text.parse::<BigInt>().unwrap(), a);
    }

    #[test]
    fn rendering_has_no_leading_zeros(s in arb_decimal()) {
        let text = s.parse::<BigInt>().unwrap().to_string();
        let digits = text.strip_prefix('-').unwrap_or(&text);
        prop_assert!(digits == "0" || !digits.starts_with('0'));
        prop_assert!(text != "-0");
    }

    #[test]
    fn addition_commutes(a in arb_big_int(), b in arb_big_int()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn multiplication_commutes(a in arb_big_int(), b in arb_big_int()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn additive_inverse(a in arb_big_int()) {
        let sum = &a + &(-&a);
        prop_assert_eq!(&sum, &BigInt::new());
        prop_assert!(!sum.is_negative());
    }

    #[test]
    fn subtraction_is_adding_the_negation(a in arb_big_int(), b in arb_big_int()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
        prop_assert_eq!(&(&a - &b) + &b, a);
    }

    #[test]
    fn increment_and_decrement_invert(a in arb_big_int()) {
        let mut x = a.clone();
        x.decrement().increment();
        prop_assert_eq!(&x, &a);
        x.increment().decrement();
        prop_assert_eq!(&x, &a);
    }

    #[test]
    fn zero_is_never_negative(a in arb_big_int()) {
        let zero = &a * &BigInt::new();
        prop_assert!(!zero.is_negative());
        prop_assert!(!(-&zero).is_negative());
        prop_assert!(!(&a - &a).is_negative());
    }

    #[test]
    fn ordering_matches_difference_sign(a in arb_big_int(), b in arb_big_int()) {
        let diff = &a - &b;
        prop_assert_eq!(a < b, diff.is_negative());
        prop_assert_eq!(a == b, diff.is_zero());
        prop_assert_eq!(a > b, diff.signum() == 1);
    }

    #[test]
    fn agrees_with_native_arithmetic(x in arb_small(), y in arb_small()) {
        let (a, b) = (BigInt::from(x), BigInt::from(y));
        let (x, y) = (x as i128, y as i128);
        prop_assert_eq!((&a + &b).to_string(), (x + y).to_string());
        prop_assert_eq!((&a - &b).to_string(), (x - y).to_string());
        prop_assert_eq!((&a * &b).to_string(), (x * y).to_string());
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
    }
}
