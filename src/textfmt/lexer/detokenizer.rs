//! Detokenizer for the formatter
//!
//! This module provides functionality to convert a stream of tokens back
//! into a string. Since every token carries its source text verbatim,
//! reassembly is a plain concatenation of the surviving tokens in order.

use crate::textfmt::lexer::tokens::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
