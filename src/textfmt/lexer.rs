//! Lexer
//!
//! This module owns the tokenization boundary of the formatter.
//!
//! Structure:
//!     The tokenization is done through the logos lexer library; every
//!     token carries the exact substring it represents, so a token stream
//!     that no transformation has touched concatenates back to the source
//!     byte-for-byte. Transformations operate on the stream produced here
//!     and the detokenizer turns the surviving tokens back into text.
//!
//! Tokenization is total: malformed input (an unterminated marker, an
//! unmatched quote) still yields tokens, never an error.

pub mod base_tokenization;
pub mod detokenizer;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use detokenizer::detokenize;
pub use tokens::Token;
