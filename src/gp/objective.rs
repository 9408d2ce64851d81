//! Objective evaluation of decoded expressions.
//!
//! Evaluation is strictly left to right with no precedence: `2 + 3 * 4` is
//! `(2 + 3) * 4 = 20`. Division by zero follows IEEE-754 and yields an
//! infinity or NaN, which the fitness function absorbs.

use crate::gp::codec::{Token, TokenSequence};

/// Reduce a token sequence to its numeric value. The empty sequence is `0.0`.
#[must_use]
pub fn evaluate(sequence: &TokenSequence) -> f64 {
    evaluate_tokens(sequence.tokens())
}

fn evaluate_tokens(tokens: &[Token]) -> f64 {
    let Some((first, rest)) = tokens.split_first() else {
        return 0.0;
    };

    let mut acc = match *first {
        Token::Digit(d) => f64::from(d),
        Token::Op(_) => 0.0,
    };
    let mut last_op = None;

    for token in rest {
        match *token {
            Token::Op(op) => last_op = Some(op),
            Token::Digit(d) => {
                if let Some(op) = last_op {
                    acc = op.apply(acc, f64::from(d));
                }
            }
        }
    }

    acc
}
