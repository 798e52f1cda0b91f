//! Token definitions for the text formatter
//!
//! This module defines all the tokens that can be produced by the lexer.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. Each variant carries the verbatim source text it covers;
//! nothing is normalized at this stage.

use std::fmt;

use logos::Logos;
use serde::{Deserialize, Serialize};

/// All possible tokens in a source document
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A bracketed directive such as `(cap)`, `(up, 2)` or `(hex)`,
    /// kept verbatim including the parentheses
    #[regex(r"\([^)]*\)", |lex| lex.slice().to_owned())]
    Marker(String),

    /// A maximal run of sentence punctuation, e.g. `...` or `!?`
    #[regex(r"[!?.,:;]+", |lex| lex.slice().to_owned())]
    Punctuation(String),

    /// A single quote character, `'` or `"`
    #[regex(r#"['"]"#, |lex| lex.slice().to_owned())]
    Quote(String),

    /// Exactly one whitespace character
    #[regex(r"[ \t\r\n]", |lex| lex.slice().to_owned())]
    Whitespace(String),

    /// Any other run of characters; a `(` with no matching `)` before end
    /// of input degrades to a word covering the rest of the text
    #[regex(r#"[^ \t\r\n!?.,:;'"(]+"#, |lex| lex.slice().to_owned())]
    #[regex(r"\([^)]*", |lex| lex.slice().to_owned())]
    Word(String),
}

impl Token {
    /// The exact source text this token represents
    pub fn text(&self) -> &str {
        match self {
            Token::Marker(text)
            | Token::Punctuation(text)
            | Token::Quote(text)
            | Token::Whitespace(text)
            | Token::Word(text) => text,
        }
    }

    /// Check if this token is a word
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// Check if this token is a directive marker
    pub fn is_marker(&self) -> bool {
        matches!(self, Token::Marker(_))
    }

    /// Check if this token is a punctuation run
    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::Punctuation(_))
    }

    /// Check if this token is a quote character
    pub fn is_quote(&self) -> bool {
        matches!(self, Token::Quote(_))
    }

    /// Check if this token is whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Token::Word(_) => "word",
            Token::Marker(_) => "marker",
            Token::Punctuation(_) => "punctuation",
            Token::Quote(_) => "quote",
            Token::Whitespace(_) => "whitespace",
        };
        write!(f, "<{}:{}>", kind, self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    #[test]
    fn test_marker_token() {
        let mut lexer = Token::lexer("(cap)");
        assert_eq!(lexer.next(), Some(Ok(Token::Marker("(cap)".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_marker_with_count() {
        let mut lexer = Token::lexer("(up, 2)");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token::Marker("(up, 2)".to_string())))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_punctuation_runs() {
        let mut lexer = Token::lexer("...!?");
        // A maximal run is a single token
        assert_eq!(
            lexer.next(),
            Some(Ok(Token::Punctuation("...!?".to_string())))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_quote_tokens() {
        let mut lexer = Token::lexer("'\"");
        assert_eq!(lexer.next(), Some(Ok(Token::Quote("'".to_string()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Quote("\"".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_whitespace_is_unit_width() {
        let mut lexer = Token::lexer("  ");
        assert_eq!(lexer.next(), Some(Ok(Token::Whitespace(" ".to_string()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Whitespace(" ".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unterminated_marker_degrades_to_word() {
        let mut lexer = Token::lexer("(cap hello");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token::Word("(cap hello".to_string())))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_closing_paren_is_a_word_character() {
        let mut lexer = Token::lexer(")abc");
        assert_eq!(lexer.next(), Some(Ok(Token::Word(")abc".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Word("hello".to_string()).is_word());
        assert!(Token::Marker("(cap)".to_string()).is_marker());
        assert!(Token::Punctuation(",".to_string()).is_punctuation());
        assert!(Token::Quote("'".to_string()).is_quote());
        assert!(Token::Whitespace(" ".to_string()).is_whitespace());
        assert!(!Token::Word("hello".to_string()).is_whitespace());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            Token::Word("hello".to_string()).to_string(),
            "<word:hello>"
        );
        assert_eq!(
            Token::Marker("(cap,2)".to_string()).to_string(),
            "<marker:(cap,2)>"
        );
        assert_eq!(
            Token::Whitespace(" ".to_string()).to_string(),
            "<whitespace: >"
        );
    }
}
