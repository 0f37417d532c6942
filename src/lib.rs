//! # bigcmp - BigInt-aware numeric comparison
//!
//! Exact equality and ordering between arbitrary-precision integers,
//! IEEE-754 doubles, numeric strings, booleans and coercible objects,
//! following the ECMAScript abstract equality and relational comparison
//! rules for BigInt operands:
//! - Arbitrary-precision integers as a sign + limb-vector value type
//! - Exact BigInt/double comparison via mantissa/exponent decomposition
//!   (never a lossy float cast)
//! - PEG grammars for the `StringNumericLiteral` and `StringToBigInt`
//!   string conversions
//! - `valueOf`/`toString` coercion hooks whose errors propagate verbatim
//!
//! ## Quick Start
//!
//! ### Comparing values
//!
//! ```
//! use bigcmp::ds::big_int::BigValue;
//! use bigcmp::ds::value::{ComparisonResult, Operand};
//! use bigcmp::ds::operations::test_and_comparison::{compare, equals};
//!
//! // 2^53 + 1 is not representable as a double; a naive cast would
//! // round it to 2^53 and report equality.
//! let a = Operand::BigInt(BigValue::from_i64(9007199254740993));
//! let b = Operand::Number(9007199254740992.0);
//! assert!(!equals(&a, &b).unwrap());
//! assert_eq!(compare(&a, &b).unwrap(), ComparisonResult::GreaterThan);
//! ```
//!
//! ### String operands
//!
//! ```
//! use bigcmp::ds::big_int::BigValue;
//! use bigcmp::ds::value::Operand;
//! use bigcmp::ds::operations::test_and_comparison::equals;
//!
//! let a = Operand::BigInt(BigValue::from_i64(255));
//! assert!(equals(&a, &Operand::String("0xFF".to_string())).unwrap());
//! assert!(!equals(&a, &Operand::String("255.0".to_string())).unwrap());
//! ```
//!
//! ### Coercible objects
//!
//! ```
//! use std::rc::Rc;
//! use bigcmp::ds::big_int::BigValue;
//! use bigcmp::ds::error::JErrorType;
//! use bigcmp::ds::value::{JsObjectLike, Operand};
//! use bigcmp::ds::operations::test_and_comparison::equals;
//!
//! struct Boxed(i64);
//!
//! impl JsObjectLike for Boxed {
//!     fn value_of(&self) -> Option<Result<Operand, JErrorType>> {
//!         Some(Ok(Operand::Number(self.0 as f64)))
//!     }
//! }
//!
//! let obj = Operand::Object(Rc::new(Boxed(10)));
//! let big = Operand::BigInt(BigValue::from_i64(10));
//! assert!(equals(&big, &obj).unwrap());
//! ```
//!
//! ## Architecture
//!
//! - **[`parser`]** - PEG grammars for numeric string conversion
//! - **[`ds`]** - Data structures (big integers, operands, errors)
//!   - **[`ds::operations`]** - Abstract operations (coercion, comparison)

#[macro_use]
extern crate lazy_static;

pub mod ds;
pub mod parser;
