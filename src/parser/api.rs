use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/numeric_string.pest"] // relative to src
pub struct NumericStringParser;

/// Outcome of parsing a string against the `StringNumericLiteral`
/// grammar. A string that does not match the grammar at all is not an
/// error, it simply converts to NaN, which is why the parse functions
/// return `Option` rather than `Result`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedNumericString {
    /// Empty or whitespace-only input, which converts to +0.
    Empty,
    Infinity {
        negative: bool,
    },
    /// A decimal literal, possibly signed, with optional fraction and
    /// exponent. The text is the literal exactly as matched.
    Decimal {
        text: String,
    },
    /// A `0b`/`0o`/`0x` prefixed literal. Digits are unsigned.
    Radix {
        radix: u32,
        digits: String,
    },
}

/// Outcome of parsing a string against the `StringIntegerLiteral`
/// grammar (the StringToBigInt conversion). No fraction, no exponent,
/// no `Infinity`, and a sign is only allowed on decimal digits.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedIntegerString {
    /// Empty or whitespace-only input, which converts to zero.
    Empty,
    Decimal {
        negative: bool,
        digits: String,
    },
    Radix {
        radix: u32,
        digits: String,
    },
}

/// Parse `input` as a `StringNumericLiteral`. Returns `None` when the
/// string does not match the grammar (the NaN case).
pub fn parse_numeric_string(input: &str) -> Option<ParsedNumericString> {
    let mut pairs = NumericStringParser::parse(Rule::numeric_string, input).ok()?;
    let root = pairs.next()?;
    for pair in root.into_inner() {
        if pair.as_rule() == Rule::numeric_literal {
            return build_numeric_literal(pair);
        }
    }
    Some(ParsedNumericString::Empty)
}

/// Parse `input` as a `StringIntegerLiteral`. Returns `None` when the
/// string does not match the grammar, which StringToBigInt treats as a
/// non-throwing non-value.
pub fn parse_integer_string(input: &str) -> Option<ParsedIntegerString> {
    let mut pairs = NumericStringParser::parse(Rule::integer_string, input).ok()?;
    let root = pairs.next()?;
    for pair in root.into_inner() {
        if pair.as_rule() == Rule::integer_literal {
            return build_integer_literal(pair);
        }
    }
    Some(ParsedIntegerString::Empty)
}

fn build_numeric_literal(pair: Pair<Rule>) -> Option<ParsedNumericString> {
    let inner = pair.into_inner().next()?;
    match inner.as_rule() {
        Rule::binary_literal => Some(ParsedNumericString::Radix {
            radix: 2,
            digits: digits_of(inner)?,
        }),
        Rule::octal_literal => Some(ParsedNumericString::Radix {
            radix: 8,
            digits: digits_of(inner)?,
        }),
        Rule::hex_literal => Some(ParsedNumericString::Radix {
            radix: 16,
            digits: digits_of(inner)?,
        }),
        Rule::decimal_literal => {
            let text = inner.as_str().to_string();
            let negative = text.starts_with('-');
            for part in inner.into_inner() {
                if part.as_rule() == Rule::infinity {
                    return Some(ParsedNumericString::Infinity { negative });
                }
            }
            Some(ParsedNumericString::Decimal { text })
        }
        _ => None,
    }
}

fn build_integer_literal(pair: Pair<Rule>) -> Option<ParsedIntegerString> {
    let inner = pair.into_inner().next()?;
    match inner.as_rule() {
        Rule::binary_literal => Some(ParsedIntegerString::Radix {
            radix: 2,
            digits: digits_of(inner)?,
        }),
        Rule::octal_literal => Some(ParsedIntegerString::Radix {
            radix: 8,
            digits: digits_of(inner)?,
        }),
        Rule::hex_literal => Some(ParsedIntegerString::Radix {
            radix: 16,
            digits: digits_of(inner)?,
        }),
        Rule::signed_integer => {
            let negative = inner.as_str().starts_with('-');
            for part in inner.into_inner() {
                if part.as_rule() == Rule::decimal_digits {
                    return Some(ParsedIntegerString::Decimal {
                        negative,
                        digits: part.as_str().to_string(),
                    });
                }
            }
            None
        }
        _ => None,
    }
}

fn digits_of(pair: Pair<Rule>) -> Option<String> {
    pair.into_inner()
        .next()
        .map(|digits| digits.as_str().to_string())
}
