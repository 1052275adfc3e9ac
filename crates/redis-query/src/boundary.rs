//! Bracket pairs of the RediSearch query grammar.

use std::fmt::Display;

/// Opening and closing delimiters around a predicate body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    left: &'static str,
    right: &'static str,
}

impl Boundary {
    /// Tag values: `{red}`, `{a | b}`.
    pub const TAG: Boundary = Boundary::new("{", "}");
    /// Exact text phrase: `"hello"`.
    pub const TEXT: Boundary = Boundary::new("\"", "\"");
    /// Disjunction of text phrases: `("a" | "b")`.
    pub const TEXT_IN: Boundary = Boundary::new("(", ")");
    /// Numeric point or range: `[10 inf]`.
    pub const NUMERIC: Boundary = Boundary::new("[", "]");

    const fn new(left: &'static str, right: &'static str) -> Self {
        Self { left, right }
    }

    pub fn wrap(&self, value: impl Display) -> String {
        format!("{}{}{}", self.left, value, self.right)
    }

    /// Two values separated by a single space.
    pub fn wrap_range(&self, lower: impl Display, upper: impl Display) -> String {
        format!("{}{} {}{}", self.left, lower, upper, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(Boundary::TAG.wrap("red"), "{red}");
        assert_eq!(Boundary::TEXT.wrap("hello world"), "\"hello world\"");
        assert_eq!(Boundary::TEXT_IN.wrap("\"a\" | \"b\""), "(\"a\" | \"b\")");
        assert_eq!(Boundary::NUMERIC.wrap(7), "[7]");
    }

    #[test]
    fn test_wrap_range() {
        assert_eq!(Boundary::NUMERIC.wrap_range(1, 2), "[1 2]");
        assert_eq!(Boundary::NUMERIC.wrap_range("-inf", "(5"), "[-inf (5]");
    }
}
