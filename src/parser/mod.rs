mod api;

pub use api::{
    parse_integer_string, parse_numeric_string, NumericStringParser, ParsedIntegerString,
    ParsedNumericString,
};
