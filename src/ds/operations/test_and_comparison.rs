//! Equality and relational comparison.
//!
//! `equals` is the abstract equality comparison and `compare` the
//! three-way relational comparison, both restricted to numeric-capable
//! operands. Both are pure apart from whatever side effects user
//! coercion hooks have, and both surface hook errors unmodified.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::ds::big_int::BigValue;
use crate::ds::error::JErrorType;
use crate::ds::operations::type_conversion::{
    boolean_to_big_int, object_to_primitive, string_to_big_int, string_to_number, to_primitive,
};
use crate::ds::value::{ComparisonResult, Operand};

/// Abstract equality. Never errors except when a user coercion hook
/// does, or when an object cannot be converted to a primitive at all.
pub fn equals(a: &Operand, b: &Operand) -> Result<bool, JErrorType> {
    match (a, b) {
        (Operand::BigInt(x), Operand::BigInt(y)) => Ok(x == y),
        (Operand::Number(x), Operand::Number(y)) => Ok(x == y),
        (Operand::String(x), Operand::String(y)) => Ok(x == y),
        (Operand::Boolean(x), Operand::Boolean(y)) => Ok(x == y),
        (Operand::Symbol(x), Operand::Symbol(y)) => Ok(x == y),
        (Operand::Object(x), Operand::Object(y)) => Ok(Rc::ptr_eq(x, y)),
        (Operand::BigInt(x), Operand::Number(n)) | (Operand::Number(n), Operand::BigInt(x)) => {
            Ok(x.cmp_f64(*n) == Some(Ordering::Equal))
        }
        (Operand::BigInt(x), Operand::String(s)) | (Operand::String(s), Operand::BigInt(x)) => {
            Ok(match string_to_big_int(s) {
                Some(y) => *x == y,
                None => false,
            })
        }
        (Operand::Number(n), Operand::String(s)) | (Operand::String(s), Operand::Number(n)) => {
            Ok(*n == string_to_number(s))
        }
        (Operand::Boolean(v), other) | (other, Operand::Boolean(v)) => match other {
            Operand::BigInt(x) => Ok(*x == boolean_to_big_int(*v)),
            _ => equals(&Operand::Number(if *v { 1.0 } else { 0.0 }), other),
        },
        (Operand::Object(o), other) | (other, Operand::Object(o)) => {
            let primitive = object_to_primitive(o)?;
            equals(&primitive, other)
        }
        (Operand::Symbol(_), _) | (_, Operand::Symbol(_)) => Ok(false),
    }
}

/// Three-way relational comparison. Exactly one of less/equal/greater/
/// unordered holds; `Unordered` arises only from NaN. Symbols are
/// incomparable and raise a type error here (equality against them is
/// simply false).
pub fn compare(a: &Operand, b: &Operand) -> Result<ComparisonResult, JErrorType> {
    let pa = to_primitive(a)?;
    let pb = to_primitive(b)?;
    match (&pa, &pb) {
        (Operand::String(x), Operand::String(y)) => Ok(ordering_to_result(x.cmp(y))),
        (Operand::BigInt(x), Operand::String(s)) => Ok(match string_to_big_int(s) {
            Some(y) => ordering_to_result(x.cmp(&y)),
            None => ComparisonResult::Unordered,
        }),
        (Operand::String(s), Operand::BigInt(y)) => Ok(match string_to_big_int(s) {
            Some(x) => ordering_to_result(x.cmp(y)),
            None => ComparisonResult::Unordered,
        }),
        _ => {
            let nx = to_numeric(&pa)?;
            let ny = to_numeric(&pb)?;
            Ok(match (nx, ny) {
                (NumericValue::BigInt(x), NumericValue::BigInt(y)) => {
                    ordering_to_result(x.cmp(&y))
                }
                (NumericValue::BigInt(x), NumericValue::Number(n)) => {
                    option_to_result(x.cmp_f64(n))
                }
                (NumericValue::Number(n), NumericValue::BigInt(y)) => {
                    option_to_result(y.cmp_f64(n).map(Ordering::reverse))
                }
                (NumericValue::Number(x), NumericValue::Number(y)) => {
                    option_to_result(x.partial_cmp(&y))
                }
            })
        }
    }
}

/// `a < b`; false when unordered.
pub fn less_than(a: &Operand, b: &Operand) -> Result<bool, JErrorType> {
    Ok(compare(a, b)? == ComparisonResult::LessThan)
}

/// `a <= b`; false when unordered.
pub fn less_than_or_equal(a: &Operand, b: &Operand) -> Result<bool, JErrorType> {
    Ok(matches!(
        compare(a, b)?,
        ComparisonResult::LessThan | ComparisonResult::Equal
    ))
}

/// `a > b`; false when unordered.
pub fn greater_than(a: &Operand, b: &Operand) -> Result<bool, JErrorType> {
    Ok(compare(a, b)? == ComparisonResult::GreaterThan)
}

/// `a >= b`; false when unordered.
pub fn greater_than_or_equal(a: &Operand, b: &Operand) -> Result<bool, JErrorType> {
    Ok(matches!(
        compare(a, b)?,
        ComparisonResult::GreaterThan | ComparisonResult::Equal
    ))
}

enum NumericValue {
    BigInt(BigValue),
    Number(f64),
}

// ToNumeric over primitives: strings and booleans become numbers,
// symbols are a type error. Objects never reach here because compare
// resolves them first.
fn to_numeric(v: &Operand) -> Result<NumericValue, JErrorType> {
    match v {
        Operand::BigInt(x) => Ok(NumericValue::BigInt(x.clone())),
        Operand::Number(n) => Ok(NumericValue::Number(*n)),
        Operand::String(s) => Ok(NumericValue::Number(string_to_number(s))),
        Operand::Boolean(b) => Ok(NumericValue::Number(if *b { 1.0 } else { 0.0 })),
        Operand::Symbol(_) => Err(JErrorType::TypeError(
            "Cannot convert a Symbol to a number".to_string(),
        )),
        Operand::Object(_) => {
            let pv = to_primitive(v)?;
            to_numeric(&pv)
        }
    }
}

fn ordering_to_result(ordering: Ordering) -> ComparisonResult {
    match ordering {
        Ordering::Less => ComparisonResult::LessThan,
        Ordering::Equal => ComparisonResult::Equal,
        Ordering::Greater => ComparisonResult::GreaterThan,
    }
}

fn option_to_result(ordering: Option<Ordering>) -> ComparisonResult {
    match ordering {
        Some(o) => ordering_to_result(o),
        None => ComparisonResult::Unordered,
    }
}
