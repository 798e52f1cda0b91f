//! Punctuation spacing transformation
//!
//! The last pipeline stage normalizes spacing around punctuation and
//! quote characters:
//! - whitespace immediately before a punctuation run or quote is dropped
//! - exactly one space is inserted after one when a word follows directly
//! - consecutive whitespace tokens collapse to one
//! - trailing whitespace is trimmed
//!
//! Running last, this also tidies the doubled whitespace that marker
//! deletion leaves behind. Quote characters participate in the same
//! spacing rules as punctuation runs; the quote stage before this one only
//! handles the pairing-specific trims.

use crate::textfmt::lexer::Token;
use crate::textfmt::transformations::Transformation;

/// Punctuation spacing transformation
pub struct NormalizePunctuation;

impl Transformation for NormalizePunctuation {
    fn name(&self) -> &str {
        "normalize_punctuation"
    }

    fn description(&self) -> &str {
        "Normalize spacing around punctuation and quotes, collapse and trim whitespace"
    }

    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut iter = tokens.into_iter().peekable();

        while let Some(token) = iter.next() {
            if token.is_punctuation() || token.is_quote() {
                if matches!(out.last(), Some(Token::Whitespace(_))) {
                    out.pop();
                }
                out.push(token);
                if matches!(iter.peek(), Some(Token::Word(_))) {
                    out.push(Token::Whitespace(" ".to_string()));
                }
            } else if token.is_whitespace() {
                if !matches!(out.last(), Some(Token::Whitespace(_))) {
                    out.push(token);
                }
            } else {
                out.push(token);
            }
        }

        while matches!(out.last(), Some(Token::Whitespace(_))) {
            out.pop();
        }

        out
    }
}
