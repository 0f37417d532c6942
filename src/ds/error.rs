use std::any::Any;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error raised by a user-supplied coercion hook, carried through
/// the comparator without being wrapped or rephrased. The payload is
/// the hook's original error value; callers can downcast it back.
pub struct PropagatedError {
    message: String,
    payload: Box<dyn Any>,
}

impl PropagatedError {
    pub fn new(message: String) -> Self {
        PropagatedError {
            message,
            payload: Box::new(()),
        }
    }

    pub fn with_payload(message: String, payload: Box<dyn Any>) -> Self {
        PropagatedError { message, payload }
    }

    /// The original error message, verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> &dyn Any {
        &*self.payload
    }

    pub fn into_payload(self) -> Box<dyn Any> {
        self.payload
    }
}

impl fmt::Debug for PropagatedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PropagatedError({:?})", self.message)
    }
}

impl Display for PropagatedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug)]
pub enum JErrorType {
    /// A `valueOf`/`toString` hook threw; surfaced unmodified.
    Propagated(PropagatedError),
    /// Operands that are fundamentally incomparable under ordering,
    /// e.g. a Symbol used with a relational operator.
    TypeError(String),
}

impl JErrorType {
    pub fn to_string(&self) -> String {
        match self {
            // Never reworded: the caller re-raises this as-is.
            JErrorType::Propagated(e) => e.message().to_string(),
            JErrorType::TypeError(m) => format!("Uncaught type error: {}.", m),
        }
    }
}
