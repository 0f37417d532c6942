use std::fmt;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// A symbol operand. Symbols compare equal only to themselves; a
/// description-less symbol gets a random unique description so that
/// two of them never collide.
pub struct SymbolData {
    description: String,
}

impl SymbolData {
    pub fn new(description: String) -> Self {
        SymbolData { description }
    }

    pub fn new_empty() -> Self {
        SymbolData {
            description: Uuid::new_v4().to_hyphenated().to_string(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
impl Clone for SymbolData {
    fn clone(&self) -> Self {
        SymbolData {
            description: self.description.to_string(),
        }
    }
}
impl PartialEq for SymbolData {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}
impl Display for SymbolData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}
impl fmt::Debug for SymbolData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolData({})", self.description)
    }
}
