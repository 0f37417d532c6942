//! Type conversion abstract operations: ToPrimitive, ToNumber and the
//! numeric string conversions the comparator needs.

use std::rc::Rc;

use crate::ds::big_int::BigValue;
use crate::ds::error::JErrorType;
use crate::ds::value::{JsObjectLike, Operand};
use crate::parser::{
    parse_integer_string, parse_numeric_string, ParsedIntegerString, ParsedNumericString,
};

pub const TYPE_STR_BIGINT: &str = "bigint";
pub const TYPE_STR_NUMBER: &str = "number";
pub const TYPE_STR_STRING: &str = "string";
pub const TYPE_STR_BOOLEAN: &str = "boolean";
pub const TYPE_STR_SYMBOL: &str = "symbol";
pub const TYPE_STR_OBJECT: &str = "object";

pub fn get_type(v: &Operand) -> &'static str {
    match v {
        Operand::BigInt(_) => TYPE_STR_BIGINT,
        Operand::Number(_) => TYPE_STR_NUMBER,
        Operand::String(_) => TYPE_STR_STRING,
        Operand::Boolean(_) => TYPE_STR_BOOLEAN,
        Operand::Symbol(_) => TYPE_STR_SYMBOL,
        Operand::Object(_) => TYPE_STR_OBJECT,
    }
}

lazy_static! {
    static ref BIG_ZERO: BigValue = BigValue::zero();
    static ref BIG_ONE: BigValue = BigValue::from_u64(1);
}

/// Convert an operand to a primitive. Primitives pass through; objects
/// go through their hooks, `value_of` before `to_string_hint`, each
/// invoked at most once. A hook error propagates unmodified. An object
/// whose hooks never produce a primitive is a type error.
pub fn to_primitive(v: &Operand) -> Result<Operand, JErrorType> {
    match v {
        Operand::Object(o) => object_to_primitive(o),
        _ => Ok(v.clone()),
    }
}

pub fn object_to_primitive(o: &Rc<dyn JsObjectLike>) -> Result<Operand, JErrorType> {
    if let Some(result) = o.value_of() {
        let candidate = result?;
        if !matches!(candidate, Operand::Object(_)) {
            return Ok(candidate);
        }
    }
    if let Some(result) = o.to_string_hint() {
        let candidate = result?;
        if !matches!(candidate, Operand::Object(_)) {
            return Ok(candidate);
        }
    }
    Err(JErrorType::TypeError(
        "Cannot convert object to primitive value".to_string(),
    ))
}

/// The ToNumber conversion. BigInt and Symbol operands cannot become
/// numbers; everything else converts without error (malformed strings
/// are NaN, not errors).
pub fn to_number(v: &Operand) -> Result<f64, JErrorType> {
    match v {
        Operand::Number(n) => Ok(*n),
        Operand::Boolean(b) => Ok(match *b {
            true => 1.0,
            false => 0.0,
        }),
        Operand::String(s) => Ok(string_to_number(s)),
        Operand::BigInt(_) | Operand::Symbol(_) => Err(JErrorType::TypeError(format!(
            "Cannot convert a {} to a number",
            get_type(v)
        ))),
        Operand::Object(_) => {
            let pv = to_primitive(v)?;
            to_number(&pv)
        }
    }
}

/// The StringNumericLiteral conversion: empty and whitespace-only
/// strings are +0, radix-prefixed literals are integer-valued, and a
/// string outside the grammar is NaN.
pub fn string_to_number(s: &str) -> f64 {
    match parse_numeric_string(s) {
        None => f64::NAN,
        Some(ParsedNumericString::Empty) => 0.0,
        Some(ParsedNumericString::Infinity { negative }) => {
            if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        }
        Some(ParsedNumericString::Decimal { text }) => match text.parse::<f64>() {
            Ok(n) => n,
            Err(_) => f64::NAN,
        },
        Some(ParsedNumericString::Radix { radix, digits }) => {
            match BigValue::from_digits(radix, &digits) {
                Some(b) => b.to_f64(),
                None => f64::NAN,
            }
        }
    }
}

/// The StringToBigInt conversion. `None` means the string is not an
/// integer literal; that is a comparison outcome, never an error.
pub fn string_to_big_int(s: &str) -> Option<BigValue> {
    match parse_integer_string(s)? {
        ParsedIntegerString::Empty => Some(BigValue::zero()),
        ParsedIntegerString::Decimal { negative, digits } => {
            let magnitude = BigValue::from_digits(10, &digits)?;
            Some(if negative { magnitude.negate() } else { magnitude })
        }
        ParsedIntegerString::Radix { radix, digits } => BigValue::from_digits(radix, &digits),
    }
}

/// Booleans coerce to the BigInt zero or one when compared against a
/// BigInt operand.
pub fn boolean_to_big_int(b: bool) -> BigValue {
    if b {
        BIG_ONE.clone()
    } else {
        BIG_ZERO.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number("12.5"), 12.5);
        assert_eq!(string_to_number("  42  "), 42.0);
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("   "), 0.0);
        assert_eq!(string_to_number("0x10"), 16.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert!(string_to_number("12x").is_nan());
        assert!(string_to_number("1_0").is_nan());
    }

    #[test]
    fn test_string_to_number_huge_hex_rounds() {
        // 2^64 is exactly representable; 2^64 + 1 rounds back down.
        assert_eq!(
            string_to_number("0x10000000000000000"),
            18446744073709551616.0
        );
        assert_eq!(
            string_to_number("0x10000000000000001"),
            18446744073709551616.0
        );
    }

    #[test]
    fn test_string_to_big_int() {
        assert_eq!(string_to_big_int("42"), Some(BigValue::from_u64(42)));
        assert_eq!(string_to_big_int("-42"), Some(BigValue::from_i64(-42)));
        assert_eq!(string_to_big_int(""), Some(BigValue::zero()));
        assert_eq!(string_to_big_int("0xFF"), Some(BigValue::from_u64(255)));
        assert_eq!(string_to_big_int("5.0"), None);
        assert_eq!(string_to_big_int("Infinity"), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&Operand::Number(1.5)).unwrap(), 1.5);
        assert_eq!(to_number(&Operand::Boolean(true)).unwrap(), 1.0);
        assert_eq!(to_number(&Operand::Boolean(false)).unwrap(), 0.0);
        assert_eq!(to_number(&Operand::String("0b101".to_string())).unwrap(), 5.0);
        assert!(matches!(
            to_number(&Operand::BigInt(BigValue::from_u64(1))),
            Err(JErrorType::TypeError(_))
        ));
    }

    #[test]
    fn test_to_primitive_passes_primitives_through() {
        let v = Operand::String("x".to_string());
        assert!(matches!(to_primitive(&v).unwrap(), Operand::String(_)));
        assert!(matches!(
            to_primitive(&Operand::Number(1.0)).unwrap(),
            Operand::Number(_)
        ));
    }

    #[test]
    fn test_get_type() {
        assert_eq!(get_type(&Operand::BigInt(BigValue::zero())), TYPE_STR_BIGINT);
        assert_eq!(get_type(&Operand::Number(0.0)), TYPE_STR_NUMBER);
        assert_eq!(get_type(&Operand::Boolean(true)), TYPE_STR_BOOLEAN);
    }

    #[test]
    fn test_boolean_to_big_int() {
        assert_eq!(boolean_to_big_int(true), BigValue::from_u64(1));
        assert_eq!(boolean_to_big_int(false), BigValue::zero());
    }
}
