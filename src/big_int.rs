//! # BigInt
//! Arbitrary-precision signed integers in sign-magnitude form.
//! The magnitude is kept as base-10 digits, least significant first, so parsing and printing
//! never need a base conversion.
//! # Example
//! ```
//! use decimal_big_int::BigInt;
//!
//! let a: BigInt = "987654321".parse().unwrap();
//! let b: BigInt = "123456789".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "121932631112635269");
//! assert_eq!((&a - &b).to_string(), "864197532");
//! assert_eq!((-&a + &b).to_string(), "-864197532");
//! ```
//!

use std::fmt::Display;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_int_constants::*;
use crate::big_int_cache::*;
use crate::error::{InvalidFormatReason, ParseBigIntError};

/// Pops most-significant zero digits, always leaving at least one digit.
macro_rules! trim_high_zeros {
    ($vec: expr) => {
        while $vec.len() > 1 && $vec.last() == Some(&0) {
            $vec.pop();
        }
    };
}

/// `mag` holds digits `0..=9`, least significant first, never empty and with no
/// most-significant zero except for the single digit of zero. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u8>,
}

// 规范化
impl BigInt {
    fn normalize(&mut self) {
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        trim_high_zeros!(self.mag);
        if self.is_zero() {
            self.negative = false;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }
}

// 实现构造
impl BigInt {
    /// The canonical zero.
    pub fn new() -> Self {
        POS_CACHE[0].clone()
    }

    /// Builds a value from raw least-significant-first digits and normalizes it.
    pub(crate) fn from_raw(mag: Vec<u8>, negative: bool) -> Self {
        debug_assert!(mag.iter().all(|d| *d < RADIX));
        let mut val = BigInt { negative, mag };
        val.normalize();
        val
    }

    fn value_of(mut val: u64, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            return if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        // u64::MAX has 20 decimal digits
        let mut mag = Vec::with_capacity(20);
        loop {
            mag.push((val % RADIX as u64) as u8);
            val /= RADIX as u64;
            if val == 0 {
                break;
            }
        }
        BigInt::from_raw(mag, negative)
    }

    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }

    fn abs_take(self) -> BigInt {
        let BigInt { mag, .. } = self;
        BigInt { negative: false, mag }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            // unsigned_abs keeps MIN from overflowing
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.negative, "", &self.digits_to_string())
    }
}

impl BigInt {
    fn digits_to_string(&self) -> String {
        self.mag
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect()
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        BigInt::parse_decimal(val)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = ParseBigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        BigInt::parse_decimal(val)
    }
}

impl BigInt {
    /// Accepts `-?[0-9]+`. Leading zeros are dropped and `-0` is zero.
    fn parse_decimal(val: &str) -> Result<BigInt, ParseBigIntError> {
        let (negative, cursor) = if val.starts_with('-') {
            (true, 1)
        } else {
            (false, 0)
        };

        let body = &val[cursor..];
        if body.is_empty() {
            debug!("rejecting big integer literal {:?}: no digits", val);
            return Err(ParseBigIntError::invalid_format(val, InvalidFormatReason::Empty));
        }

        let mut mag = Vec::with_capacity(body.len());
        for (index, ch) in body.char_indices() {
            match ch.to_digit(RADIX as u32) {
                Some(d) => mag.push(d as u8),
                None => {
                    let reason = InvalidFormatReason::InvalidDigit { ch, index: cursor + index };
                    debug!("rejecting big integer literal {:?}: {}", val, reason);
                    return Err(ParseBigIntError::invalid_format(val, reason));
                }
            }
        }
        mag.reverse();

        Ok(BigInt::from_raw(mag, negative))
    }
}

// 实现大小比较
impl BigInt {
    /// Orders two magnitudes, ignoring sign. Both must be normalized.
    fn compare_mag(x: &[u8], y: &[u8]) -> Ordering {
        let x_len = x.len();
        let y_len = y.len();

        if x_len != y_len {
            return x_len.cmp(&y_len);
        }

        let mut pos = x_len;
        while pos > 0 {
            pos -= 1;
            if x[pos] != y[pos] {
                return x[pos].cmp(&y[pos]);
            }
        }

        Ordering::Equal
    }

    fn mag_less(&self, other: &BigInt) -> bool {
        BigInt::compare_mag(&self.mag, &other.mag) == Ordering::Less
    }

    fn less_than(&self, other: &BigInt) -> bool {
        if self.negative != other.negative {
            return self.negative;
        }
        if self.negative {
            other.mag_less(self)
        } else {
            self.mag_less(other)
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self == other {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

// 绝对值运算
impl BigInt {
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u8;
        for (i, &a) in long.iter().enumerate() {
            let b = short.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }

    /// `big` must not be smaller in magnitude than `little`.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        assert!(
            little.len() <= big.len(),
            "subtrahend magnitude exceeds minuend magnitude"
        );

        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0i8;
        for (i, &a) in big.iter().enumerate() {
            let b = little.get(i).copied().unwrap_or(0);
            let mut diff = a as i8 - borrow - b as i8;
            if diff < 0 {
                diff += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }

        assert_eq!(borrow, 0, "subtrahend magnitude exceeds minuend magnitude");

        trim_high_zeros!(result);
        result
    }

    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        trace!("schoolbook multiply, {} x {} digits", x.len(), y.len());

        let radix = RADIX as u32;
        let y_len = y.len();
        let mut result = vec![0u8; x.len() + y_len];

        for (i, &a) in x.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut carry = 0u32;
            let mut j = 0;
            while j < y_len || carry != 0 {
                let b = if j < y_len { y[j] as u32 } else { 0 };
                let current = result[i + j] as u32 + a as u32 * b + carry;
                result[i + j] = (current % radix) as u8;
                carry = current / radix;
                j += 1;
            }
        }

        trim_high_zeros!(result);
        result
    }

    /// Signed addition of two magnitudes. Subtraction passes the flipped sign of its operand.
    fn signed_add(x_negative: bool, x: &[u8], y_negative: bool, y: &[u8]) -> BigInt {
        if x_negative == y_negative {
            return BigInt::from_raw(BigInt::add_mag(x, y), x_negative);
        }

        match BigInt::compare_mag(x, y) {
            Ordering::Less => BigInt::from_raw(BigInt::sub_mag(y, x), y_negative),
            Ordering::Equal => BigInt::new(),
            Ordering::Greater => BigInt::from_raw(BigInt::sub_mag(x, y), x_negative),
        }
    }
}

macro_rules! forward_val_binop {
    ($imp: ident, $method: ident) => {
        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! forward_assign_op {
    ($imp: ident, $method: ident, $op: ident) => {
        impl $imp for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = (&*self).$op(&rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = (&*self).$op(rhs);
            }
        }
    };
}

// 实现加法
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        BigInt::signed_add(self.negative, &self.mag, rhs.negative, &rhs.mag)
    }
}
forward_val_binop!(Add, add);
forward_assign_op!(AddAssign, add_assign, add);

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        // a - b == a + (-b); a zero rhs with a flipped flag still lands on the right branch
        BigInt::signed_add(self.negative, &self.mag, !rhs.negative, &rhs.mag)
    }
}
forward_val_binop!(Sub, sub);
forward_assign_op!(SubAssign, sub_assign, sub);

// 实现乘法
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::new();
        }
        BigInt::from_raw(BigInt::mul_mag(&self.mag, &rhs.mag), self.negative != rhs.negative)
    }
}
forward_val_binop!(Mul, mul);
forward_assign_op!(MulAssign, mul_assign, mul);

// 实现自增自减
impl BigInt {
    /// Pre-increment: adds one in place and hands back the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self += &POS_CACHE[1];
        self
    }

    /// Post-increment: adds one in place and returns the value from before.
    pub fn post_increment(&mut self) -> BigInt {
        let prior = self.clone();
        self.increment();
        prior
    }

    pub fn decrement(&mut self) -> &mut Self {
        *self -= &POS_CACHE[1];
        self
    }

    pub fn post_decrement(&mut self) -> BigInt {
        let prior = self.clone();
        self.decrement();
        prior
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::new(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::new(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(POS_CACHE[1].clone(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(POS_CACHE[1].clone(), |acc, x| acc * x)
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = -12;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.mag, vec![2, 1]);
    assert!(big_num.negative);

    let num: u16 = 100;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.mag, vec![0, 0, 1]);
    assert!(!big_num.negative);

    let big_num = BigInt::from(0_i64);
    assert_eq!(big_num.mag, vec![0]);
    assert!(!big_num.negative);

    let big_num = BigInt::from(i64::MIN);
    assert_eq!(big_num.to_string(), "-9223372036854775808");

    let big_num = BigInt::from(i64::MAX);
    assert_eq!(big_num.to_string(), "9223372036854775807");

    let big_num = BigInt::from(u64::MAX);
    assert_eq!(big_num.to_string(), "18446744073709551615");

    assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
    assert_eq!(BigInt::default(), BigInt::new());
    assert_eq!(BigInt::new().mag, vec![0]);
}

#[test]
fn test_normalize() {
    let mut a = BigInt { negative: true, mag: vec![0, 0, 0] };
    a.normalize();
    assert_eq!(a.mag, vec![0]);
    assert!(!a.negative);

    let mut b = BigInt { negative: true, mag: vec![5, 4, 0, 0] };
    b.normalize();
    assert_eq!(b.mag, vec![5, 4]);
    assert!(b.negative);

    let before = b.clone();
    b.normalize();
    assert_eq!(b, before);

    let mut empty = BigInt { negative: true, mag: vec![] };
    empty.normalize();
    assert_eq!(empty, BigInt::new());
}

#[test]
fn test_parse() {
    let a = big("00012345");
    assert_eq!(a.mag, vec![5, 4, 3, 2, 1]);
    assert_eq!(a, BigInt::from(12345));

    let b = big("-000");
    assert_eq!(b, BigInt::new());
    assert!(!b.negative);

    assert_eq!(big("-42"), BigInt::from(-42));
    assert_eq!(BigInt::try_from("7").unwrap(), BigInt::from(7));
}

#[test]
fn test_parse_errors() {
    let err = "".parse::<BigInt>().unwrap_err();
    assert_eq!(err.reason(), InvalidFormatReason::Empty);

    let err = "-".parse::<BigInt>().unwrap_err();
    assert_eq!(err.reason(), InvalidFormatReason::Empty);

    let err = "123a456".parse::<BigInt>().unwrap_err();
    assert_eq!(err.reason(), InvalidFormatReason::InvalidDigit { ch: 'a', index: 3 });

    let err = "-12 3".parse::<BigInt>().unwrap_err();
    assert_eq!(err.reason(), InvalidFormatReason::InvalidDigit { ch: ' ', index: 3 });

    let err = "+1".parse::<BigInt>().unwrap_err();
    assert_eq!(err.reason(), InvalidFormatReason::InvalidDigit { ch: '+', index: 0 });

    let err = "--1".parse::<BigInt>().unwrap_err();
    assert_eq!(err.reason(), InvalidFormatReason::InvalidDigit { ch: '-', index: 1 });

    // full-width digits are not ASCII
    assert!("１２".parse::<BigInt>().is_err());
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::new().to_string(), "0");
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(big("000100").to_string(), "100");
    assert_eq!(BigInt::from(-75).to_string(), "-75");

    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(s).to_string(), s);

    assert_eq!(format!("{:>6}", BigInt::from(-12)), "   -12");
    assert_eq!(format!("{:06}", BigInt::from(-12)), "-00012");
}

#[test]
fn test_compare_mag() {
    assert_eq!(BigInt::compare_mag(&[9], &[0, 1]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[0, 1], &[9]), Ordering::Greater);
    assert_eq!(BigInt::compare_mag(&[1, 2, 3], &[2, 2, 3]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[1, 2, 3], &[1, 2, 3]), Ordering::Equal);
    assert!(!big("-500").mag_less(&big("499")));
    assert!(big("-499").mag_less(&big("500")));
}

#[test]
fn test_ordering() {
    assert!(big("-1") < big("0"));
    assert!(big("-100") < big("-99"));
    assert!(big("99") < big("100"));
    assert!(big("-5") < big("5"));
    assert!(!(big("7") < big("7")));
    assert!(big("7") <= big("7"));
    assert!(big("8") > big("7"));
    assert!(big("-7") >= big("-8"));
    assert_ne!(big("1"), big("-1"));

    let mut v = vec![big("3"), big("-10"), big("0"), big("-2"), big("25")];
    v.sort();
    let s: Vec<String> = v.iter().map(|x| x.to_string()).collect();
    assert_eq!(s, ["-10", "-2", "0", "3", "25"]);
}

#[test]
fn test_add_mag() {
    assert_eq!(BigInt::add_mag(&[9, 9, 9], &[1]), vec![0, 0, 0, 1]);
    assert_eq!(BigInt::add_mag(&[1], &[9, 9, 9]), vec![0, 0, 0, 1]);
    assert_eq!(BigInt::add_mag(&[0], &[0]), vec![0]);
    assert_eq!(BigInt::add_mag(&[5, 4, 3, 2, 1], &[9, 9]), vec![4, 4, 4, 2, 1]);
}

#[test]
fn test_sub_mag() {
    assert_eq!(BigInt::sub_mag(&[0, 0, 0, 1], &[9, 9, 9]), vec![1]);
    assert_eq!(BigInt::sub_mag(&[5, 4, 3], &[5, 4, 3]), vec![0]);
    assert_eq!(BigInt::sub_mag(&[0, 0, 1], &[1]), vec![9, 9]);
}

#[test]
#[should_panic]
fn test_sub_mag_rejects_larger_subtrahend() {
    BigInt::sub_mag(&[9, 9], &[0, 0, 1]);
}

#[test]
#[should_panic]
fn test_sub_mag_rejects_larger_subtrahend_same_length() {
    BigInt::sub_mag(&[1, 2], &[2, 2]);
}

#[test]
fn test_mul_mag() {
    assert_eq!(BigInt::mul_mag(&[9, 9, 9], &[9, 9]), vec![1, 0, 9, 8, 9]);
    assert_eq!(BigInt::mul_mag(&[0], &[9, 9]), vec![0]);
    assert_eq!(BigInt::mul_mag(&[2, 1], &[0]), vec![0]);
    assert_eq!(BigInt::mul_mag(&[1], &[7, 6, 5]), vec![7, 6, 5]);
}

#[test]
fn test_add() {
    assert_eq!(BigInt::from(-100) + BigInt::from(25), BigInt::from(-75));
    assert_eq!(BigInt::from(100) + BigInt::from(-25), BigInt::from(75));
    assert_eq!(BigInt::from(-25) + BigInt::from(100), BigInt::from(75));
    assert_eq!(BigInt::from(-25) + BigInt::from(-100), BigInt::from(-125));
    assert_eq!(BigInt::from(25) + BigInt::from(-25), BigInt::new());
    assert!(!(BigInt::from(-25) + BigInt::from(25)).negative);

    let a = big("99999999999999999999");
    assert_eq!(&a + &BigInt::from(1), big("100000000000000000000"));
}

#[test]
fn test_sub() {
    assert_eq!(big("1000") - big("999"), big("1"));
    assert_eq!(big("999") - big("1000"), big("-1"));
    assert_eq!(big("-123") - big("-12345"), big("12222"));
    assert_eq!(big("-12345") - big("-123"), big("-12222"));
    assert_eq!(big("-5") - big("5"), big("-10"));
    assert_eq!(big("5") - big("-5"), big("10"));
    assert_eq!(big("5") - big("0"), big("5"));
    assert_eq!(big("0") - big("5"), big("-5"));
    assert_eq!(big("-5") - big("-5"), BigInt::new());
}

#[test]
fn test_sub_formulations_agree() {
    // a - b worked out directly on magnitudes, without going through negation
    fn sub_by_magnitudes(a: &BigInt, b: &BigInt) -> BigInt {
        if a.negative != b.negative {
            return BigInt::from_raw(BigInt::add_mag(&a.mag, &b.mag), a.negative);
        }
        match BigInt::compare_mag(&a.mag, &b.mag) {
            Ordering::Equal => BigInt::new(),
            Ordering::Greater => BigInt::from_raw(BigInt::sub_mag(&a.mag, &b.mag), a.negative),
            Ordering::Less => BigInt::from_raw(BigInt::sub_mag(&b.mag, &a.mag), !a.negative),
        }
    }

    let values = [
        "0", "1", "-1", "9", "-9", "10", "-10", "999", "-999", "1000", "-1000",
        "12345", "-12345", "123", "-123", "100000000000000000000", "-99999999999999999999",
    ];
    for x in values.iter() {
        for y in values.iter() {
            let a = big(x);
            let b = big(y);
            assert_eq!(&a - &b, sub_by_magnitudes(&a, &b), "{} - {}", a, b);
            assert_eq!(&a - &b, &a + &(-&b), "{} - {}", a, b);
        }
    }
}

#[test]
fn test_neg() {
    let zero = BigInt::new();
    assert_eq!(-&zero, zero);
    assert!(!(-zero.clone()).negative);
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-BigInt::from(-5), BigInt::from(5));
    assert_eq!(BigInt::from(-5).abs(), BigInt::from(5));
}

#[test]
fn test_mul() {
    assert_eq!(big("987654321") * big("123456789"), big("121932631112635269"));
    assert_eq!(big("-12") * big("12"), big("-144"));
    assert_eq!(big("-12") * big("-12"), big("144"));
    assert_eq!(big("-12") * BigInt::new(), BigInt::new());
    assert!(!(big("-12") * BigInt::new()).negative);
    assert_eq!(
        big("99999999999999999999") * big("99999999999999999999"),
        big("9999999999999999999800000000000000000001")
    );
}

#[test]
fn test_assign_ops() {
    let mut a = BigInt::from(10);
    a += BigInt::from(5);
    assert_eq!(a, BigInt::from(15));
    a -= &BigInt::from(20);
    assert_eq!(a, BigInt::from(-5));
    a *= BigInt::from(-3);
    assert_eq!(a, BigInt::from(15));
    a *= &BigInt::new();
    assert_eq!(a, BigInt::new());
}

#[test]
fn test_increment_decrement() {
    let mut a = BigInt::from(999);
    assert_eq!(a.post_increment(), BigInt::from(999));
    assert_eq!(a, BigInt::from(1000));
    assert_eq!(*a.increment(), BigInt::from(1001));

    assert_eq!(a.post_decrement(), BigInt::from(1001));
    assert_eq!(*a.decrement(), BigInt::from(999));

    let mut z = BigInt::new();
    z.decrement();
    assert_eq!(z, BigInt::from(-1));
    z.increment();
    assert_eq!(z, BigInt::new());
    assert!(!z.negative);
}

#[test]
fn test_signum() {
    assert_eq!(BigInt::from(-3).signum(), -1);
    assert_eq!(BigInt::new().signum(), 0);
    assert_eq!(BigInt::from(3).signum(), 1);
    assert!(BigInt::new().is_zero());
    assert!(BigInt::from(-3).is_negative());
}

#[test]
fn test_sum_product() {
    let values: Vec<BigInt> = (1..=20_i64).map(BigInt::from).collect();
    let sum: BigInt = values.iter().sum();
    assert_eq!(sum, BigInt::from(210));
    let product: BigInt = values.into_iter().product();
    assert_eq!(product, big("2432902008176640000"));

    let empty: Vec<BigInt> = Vec::new();
    assert_eq!(empty.iter().sum::<BigInt>(), BigInt::new());
    assert_eq!(empty.iter().product::<BigInt>(), BigInt::from(1));
}
