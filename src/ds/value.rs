use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::big_int::BigValue;
use crate::ds::error::JErrorType;
use crate::ds::symbol::SymbolData;

/// Primitive-conversion hooks of a non-primitive operand.
///
/// `to_primitive` tries `value_of` first and falls back to
/// `to_string_hint`, invoking each at most once per conversion. A hook
/// that is not overridden returns `None`. A hook that throws returns
/// `Some(Err(_))`, and that error reaches the comparator's caller
/// unchanged. Hooks may have side effects; the comparator holds no
/// state of its own, so reentrant calls from inside a hook are safe.
pub trait JsObjectLike {
    /// The `valueOf` hook.
    fn value_of(&self) -> Option<Result<Operand, JErrorType>> {
        None
    }

    /// The `toString` hook.
    fn to_string_hint(&self) -> Option<Result<Operand, JErrorType>> {
        None
    }
}

/// A comparison operand. Constructed fresh per comparison call and
/// immutable for its lifetime.
pub enum Operand {
    BigInt(BigValue),
    Number(f64),
    String(String),
    Boolean(bool),
    Symbol(SymbolData),
    Object(Rc<dyn JsObjectLike>),
}

impl Clone for Operand {
    fn clone(&self) -> Self {
        match self {
            Operand::BigInt(d) => Operand::BigInt(d.clone()),
            Operand::Number(d) => Operand::Number(*d),
            Operand::String(d) => Operand::String(d.to_string()),
            Operand::Boolean(d) => Operand::Boolean(*d),
            Operand::Symbol(d) => Operand::Symbol(d.clone()),
            Operand::Object(o) => Operand::Object(o.clone()),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::BigInt(b) => write!(f, "{}n", b),
            Operand::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if *n == f64::INFINITY {
                    write!(f, "+Infinity")
                } else if *n == f64::NEG_INFINITY {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "{}", n)
                }
            }
            Operand::String(s) => write!(f, "\"{}\"", s),
            Operand::Boolean(b) => write!(f, "bool({})", b),
            Operand::Symbol(s) => write!(f, "{}", s),
            Operand::Object(_) => write!(f, "object"),
        }
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::BigInt(b) => write!(f, "Operand::BigInt({})", b),
            Operand::Number(n) => write!(f, "Operand::Number({:?})", n),
            Operand::String(s) => write!(f, "Operand::String({:?})", s),
            Operand::Boolean(b) => write!(f, "Operand::Boolean({})", b),
            Operand::Symbol(s) => write!(f, "Operand::Symbol({})", s),
            Operand::Object(_) => write!(f, "Operand::Object(...)"),
        }
    }
}

/// Three-way comparison outcome. `Unordered` arises only when NaN is
/// involved; every relational operator over an unordered pair is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    LessThan,
    Equal,
    GreaterThan,
    Unordered,
}
