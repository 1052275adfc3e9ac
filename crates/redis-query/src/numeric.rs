use model::core::value::Value;
use std::fmt;

const INFINITY: &str = "inf";
const MINUS_INFINITY: &str = "-inf";
const EXCLUSIVE_PREFIX: &str = "(";

/// One endpoint of a numeric range predicate.
///
/// A finite endpoint renders as the bare value when inclusive and with a
/// leading `(` when exclusive. The unbounded endpoints always render as
/// `inf` / `-inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericBound<'a> {
    Value { value: &'a Value, exclusive: bool },
    PositiveInfinity,
    NegativeInfinity,
}

impl<'a> NumericBound<'a> {
    pub fn inclusive(value: &'a Value) -> Self {
        NumericBound::Value {
            value,
            exclusive: false,
        }
    }

    pub fn exclusive(value: &'a Value) -> Self {
        NumericBound::Value {
            value,
            exclusive: true,
        }
    }
}

impl fmt::Display for NumericBound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericBound::Value {
                value,
                exclusive: true,
            } => write!(f, "{EXCLUSIVE_PREFIX}{value}"),
            NumericBound::Value {
                value,
                exclusive: false,
            } => write!(f, "{value}"),
            NumericBound::PositiveInfinity => f.write_str(INFINITY),
            NumericBound::NegativeInfinity => f.write_str(MINUS_INFINITY),
        }
    }
}
