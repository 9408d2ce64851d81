//! Genotype to token decoding.
//!
//! Decoding scans a genotype left to right and keeps only the codes that
//! extend a strictly alternating `digit op digit op ...` sequence. Codes that
//! would break the alternation, and the meaningless codes 14-15, are dropped.
//! A trailing operator is dropped too, so a non-empty sequence always ends on
//! a digit.

use crate::gp::genome::Genotype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First code that denotes an operator.
const OPERATOR_BASE: u8 = 10;

/// An arithmetic operator, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (code 10).
    Add,
    /// Subtraction (code 11).
    Sub,
    /// Multiplication (code 12).
    Mul,
    /// Division (code 13).
    Div,
}

impl Operator {
    /// All operators in code order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Operator for a symbolic code, if the code denotes one.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            10 => Some(Self::Add),
            11 => Some(Self::Sub),
            12 => Some(Self::Mul),
            13 => Some(Self::Div),
            _ => None,
        }
    }

    /// Symbolic code of this operator.
    #[must_use]
    pub fn code(self) -> u8 {
        OPERATOR_BASE + self as u8
    }

    /// Combine `lhs` and `rhs` with IEEE-754 semantics.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }

    /// Printable symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A decoded unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A decimal digit 0-9.
    Digit(u8),
    /// One of the four operators.
    Op(Operator),
}

impl Token {
    /// Classify a symbolic code. Returns `None` for the meaningless codes.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0..=9 => Some(Self::Digit(code)),
            _ => Operator::from_code(code).map(Self::Op),
        }
    }

    /// Symbolic code of this token.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Digit(d) => d,
            Self::Op(op) => op.code(),
        }
    }

    /// Whether this is a digit token.
    #[must_use]
    pub fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Op(op) => write!(f, "{op}"),
        }
    }
}

/// An alternating `digit op digit ...` sequence, empty or digit-terminated.
///
/// Only [`decode`] builds these, which is what upholds the alternation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// The decoded tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no digit was ever accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Symbolic codes that decode back to this sequence.
    #[must_use]
    pub fn to_codes(&self) -> Vec<u8> {
        self.tokens.iter().map(|t| t.code()).collect()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Decode a genotype into its token sequence.
///
/// This is a total function: malformed or misplaced codes are filtered out,
/// never reported.
#[must_use]
pub fn decode(genotype: &Genotype) -> TokenSequence {
    decode_codes(genotype.codes())
}

/// Decode raw codes. Codes above 15 are treated like the meaningless codes.
#[must_use]
pub fn decode_codes(codes: &[u8]) -> TokenSequence {
    let mut tokens: Vec<Token> = Vec::with_capacity(codes.len());

    for token in codes.iter().filter_map(|&c| Token::from_code(c)) {
        let accept = matches!(
            (token, tokens.last()),
            (Token::Digit(_), None | Some(Token::Op(_))) | (Token::Op(_), Some(Token::Digit(_)))
        );
        if accept {
            tokens.push(token);
        }
    }

    // An operator with no digit after it contributes nothing
    if tokens.last().is_some_and(|t| !t.is_digit()) {
        tokens.pop();
    }

    TokenSequence { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(codes: &[u8]) -> TokenSequence {
        decode_codes(codes)
    }

    #[test]
    fn test_decode_simple_expression() {
        let genotype = Genotype::new(vec![4, 10, 2]).unwrap();
        let seq = decode(&genotype);
        assert_eq!(
            seq.tokens(),
            &[Token::Digit(4), Token::Op(Operator::Add), Token::Digit(2)]
        );
        assert_eq!(seq.to_string(), "4 + 2");
    }

    #[test]
    fn test_consecutive_digits_keep_first() {
        let seq = codes(&[7, 3, 9, 12, 5, 1]);
        assert_eq!(
            seq.tokens(),
            &[Token::Digit(7), Token::Op(Operator::Mul), Token::Digit(5)]
        );
    }

    #[test]
    fn test_leading_and_repeated_operators_dropped() {
        let seq = codes(&[10, 11, 2, 13, 10, 8]);
        assert_eq!(
            seq.tokens(),
            &[Token::Digit(2), Token::Op(Operator::Div), Token::Digit(8)]
        );
    }

    #[test]
    fn test_invalid_codes_dropped() {
        let seq = codes(&[14, 15, 6, 14, 11, 15, 3]);
        assert_eq!(seq.to_string(), "6 - 3");
    }

    #[test]
    fn test_trailing_operator_dropped() {
        let seq = codes(&[1, 10, 2, 12]);
        assert_eq!(seq.to_string(), "1 + 2");
    }

    #[test]
    fn test_no_digit_decodes_empty() {
        assert!(codes(&[10, 11, 14, 15, 13]).is_empty());
        assert!(codes(&[]).is_empty());
    }

    #[test]
    fn test_decode_idempotent_on_alternating_codes() {
        let seq = codes(&[9, 13, 3, 11, 1, 12, 0]);
        assert_eq!(seq.to_codes(), vec![9, 13, 3, 11, 1, 12, 0]);
        assert_eq!(codes(&seq.to_codes()), seq);
    }

    #[test]
    fn test_operator_codes_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_code(op.code()), Some(op));
        }
        assert_eq!(Operator::from_code(14), None);
    }
}
