//! Test factories for creating tokens succinctly

use crate::textfmt::lexer::Token;

/// Make a word token
pub fn word(text: &str) -> Token {
    Token::Word(text.to_string())
}

/// Make a marker token; `text` is the full bracketed form, e.g. `(cap,2)`
pub fn marker(text: &str) -> Token {
    Token::Marker(text.to_string())
}

/// Make a punctuation run token
pub fn punct(text: &str) -> Token {
    Token::Punctuation(text.to_string())
}

/// Make a quote token from its single character
pub fn quote(text: &str) -> Token {
    Token::Quote(text.to_string())
}

/// Make the canonical single-space whitespace token
pub fn space() -> Token {
    Token::Whitespace(" ".to_string())
}

/// Make a whitespace token with explicit text (tab, newline)
pub fn ws(text: &str) -> Token {
    Token::Whitespace(text.to_string())
}
