//! Tests for three-way relational comparison.

extern crate bigcmp;

use bigcmp::ds::big_int::BigValue;
use bigcmp::ds::value::{ComparisonResult, Operand};
use bigcmp::ds::operations::test_and_comparison::{
    compare, greater_than, greater_than_or_equal, less_than, less_than_or_equal,
};

lazy_static::lazy_static! {
    /// The exact integer value of Number.MAX_VALUE: (2^53 - 1) * 2^971.
    static ref MAX_VALUE_EXACT: BigValue = BigValue::from_u64((1u64 << 53) - 1).shl(971);
    static ref ONE: BigValue = BigValue::from_u64(1);
}

fn big(text: &str) -> Operand {
    Operand::BigInt(BigValue::from_decimal_str(text).unwrap())
}

fn num(n: f64) -> Operand {
    Operand::Number(n)
}

fn string(s: &str) -> Operand {
    Operand::String(s.to_string())
}

fn assert_compare(a: &Operand, b: &Operand, expected: ComparisonResult) {
    assert_eq!(
        compare(a, b).unwrap(),
        expected,
        "compare({:?}, {:?})",
        a,
        b
    );
}

#[test]
fn test_big_int_big_int_ordering() {
    assert_compare(&big("1"), &big("2"), ComparisonResult::LessThan);
    assert_compare(&big("2"), &big("1"), ComparisonResult::GreaterThan);
    assert_compare(&big("2"), &big("2"), ComparisonResult::Equal);
    assert_compare(&big("-2"), &big("-1"), ComparisonResult::LessThan);
    assert_compare(
        &big("-99999999999999999999"),
        &big("1"),
        ComparisonResult::LessThan,
    );
}

#[test]
fn test_big_int_number_ordering() {
    assert_compare(&big("1"), &num(1.5), ComparisonResult::LessThan);
    assert_compare(&big("2"), &num(1.5), ComparisonResult::GreaterThan);
    assert_compare(&big("1"), &num(1.0), ComparisonResult::Equal);
    assert_compare(&num(1.5), &big("2"), ComparisonResult::LessThan);
    assert_compare(&big("-3"), &num(-2.5), ComparisonResult::LessThan);
}

#[test]
fn test_max_value_boundary_is_exact() {
    let max = Operand::BigInt(MAX_VALUE_EXACT.clone());
    let above = Operand::BigInt(MAX_VALUE_EXACT.add(&ONE));
    let below = Operand::BigInt(MAX_VALUE_EXACT.sub(&ONE));
    assert_compare(&max, &num(f64::MAX), ComparisonResult::Equal);
    assert_compare(&above, &num(f64::MAX), ComparisonResult::GreaterThan);
    assert_compare(&below, &num(f64::MAX), ComparisonResult::LessThan);
    // And mirrored.
    assert_compare(&num(f64::MAX), &above, ComparisonResult::LessThan);
    assert_compare(&num(f64::MAX), &below, ComparisonResult::GreaterThan);
}

#[test]
fn test_infinities() {
    let huge = Operand::BigInt(MAX_VALUE_EXACT.add(&ONE).shl(10));
    assert_compare(&huge, &num(f64::INFINITY), ComparisonResult::LessThan);
    assert_compare(&huge, &num(f64::NEG_INFINITY), ComparisonResult::GreaterThan);
    assert_compare(&num(f64::INFINITY), &huge, ComparisonResult::GreaterThan);
}

#[test]
fn test_nan_is_unordered() {
    assert_compare(&big("0"), &num(f64::NAN), ComparisonResult::Unordered);
    assert_compare(&num(f64::NAN), &big("0"), ComparisonResult::Unordered);
    assert_compare(&num(f64::NAN), &num(f64::NAN), ComparisonResult::Unordered);
    assert_compare(&num(f64::NAN), &num(1.0), ComparisonResult::Unordered);
}

#[test]
fn test_all_relational_operators_false_when_unordered() {
    let a = big("7");
    let b = num(f64::NAN);
    assert!(!less_than(&a, &b).unwrap());
    assert!(!less_than_or_equal(&a, &b).unwrap());
    assert!(!greater_than(&a, &b).unwrap());
    assert!(!greater_than_or_equal(&a, &b).unwrap());
    assert!(!less_than(&b, &a).unwrap());
    assert!(!less_than_or_equal(&b, &a).unwrap());
    assert!(!greater_than(&b, &a).unwrap());
    assert!(!greater_than_or_equal(&b, &a).unwrap());
}

#[test]
fn test_relational_operators_on_ordered_pairs() {
    let one = big("1");
    let two = big("2");
    assert!(less_than(&one, &two).unwrap());
    assert!(less_than_or_equal(&one, &two).unwrap());
    assert!(less_than_or_equal(&one, &one).unwrap());
    assert!(!less_than(&one, &one).unwrap());
    assert!(greater_than(&two, &one).unwrap());
    assert!(greater_than_or_equal(&two, &two).unwrap());
}

#[test]
fn test_big_int_string_ordering() {
    assert_compare(&big("10"), &string("11"), ComparisonResult::LessThan);
    assert_compare(&big("10"), &string("0x0A"), ComparisonResult::Equal);
    assert_compare(&string("12"), &big("10"), ComparisonResult::GreaterThan);
    // An unparseable string is unordered against a BigInt.
    assert_compare(&big("10"), &string("10.5"), ComparisonResult::Unordered);
    assert_compare(&string("pelican"), &big("10"), ComparisonResult::Unordered);
    assert!(!less_than(&big("10"), &string("pelican")).unwrap());
    assert!(!greater_than_or_equal(&big("10"), &string("pelican")).unwrap());
}

#[test]
fn test_number_string_ordering() {
    assert_compare(&num(1.0), &string("1.5"), ComparisonResult::LessThan);
    assert_compare(&string("2.5"), &num(2.0), ComparisonResult::GreaterThan);
    assert_compare(&num(1.0), &string("bogus"), ComparisonResult::Unordered);
}

#[test]
fn test_string_string_is_lexicographic() {
    assert_compare(&string("a"), &string("b"), ComparisonResult::LessThan);
    assert_compare(&string("10"), &string("9"), ComparisonResult::LessThan);
    assert_compare(&string("abc"), &string("abc"), ComparisonResult::Equal);
}

#[test]
fn test_boolean_ordering() {
    assert_compare(&Operand::Boolean(false), &big("1"), ComparisonResult::LessThan);
    assert_compare(&Operand::Boolean(true), &big("1"), ComparisonResult::Equal);
    assert_compare(&Operand::Boolean(true), &num(0.5), ComparisonResult::GreaterThan);
}

#[test]
fn test_signed_zero_ordering() {
    assert_compare(&big("0"), &num(-0.0), ComparisonResult::Equal);
    assert_compare(&num(0.0), &num(-0.0), ComparisonResult::Equal);
    assert_compare(&big("-1"), &num(-0.0), ComparisonResult::LessThan);
}

#[test]
fn test_trichotomy_over_sample_pairs() {
    let samples = [
        big("-2"),
        big("0"),
        big("9007199254740993"),
        num(-0.0),
        num(2.5),
        num(9007199254740992.0),
        num(f64::NAN),
    ];
    for a in &samples {
        for b in &samples {
            let result = compare(a, b).unwrap();
            let holds = [
                result == ComparisonResult::LessThan,
                result == ComparisonResult::Equal,
                result == ComparisonResult::GreaterThan,
                result == ComparisonResult::Unordered,
            ];
            assert_eq!(
                holds.iter().filter(|&&h| h).count(),
                1,
                "compare({:?}, {:?}) = {:?}",
                a,
                b,
                result
            );
        }
    }
}
