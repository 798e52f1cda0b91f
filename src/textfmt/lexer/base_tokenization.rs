//! Base tokenization implementation for the formatter
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! This is NOT a transformation - transformations operate on token streams.
//! This is the source that creates the initial token stream from a string.

use crate::textfmt::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a source string into an ordered token stream
///
/// The token classes are total over the input alphabet, so every character
/// lands in exactly one token and concatenating the stream's texts
/// reproduces the source byte-for-byte. Empty input yields an empty stream.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}
