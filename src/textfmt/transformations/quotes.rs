//! Quote trimming transformation
//!
//! For a paired quote, the whitespace token immediately inside each end is
//! removed: the one after the opening quote and the one before the closing
//! quote. One piece of state tracks which quote character is currently
//! open; a quote of a different kind seen while another is open passes
//! through as ordinary text, and an unmatched open quote simply never
//! closes. Both `'` and `"` participate, each pairing only with itself.

use crate::textfmt::lexer::Token;
use crate::textfmt::transformations::Transformation;

/// Quote trimming transformation
pub struct TrimQuotes;

impl Transformation for TrimQuotes {
    fn name(&self) -> &str {
        "trim_quotes"
    }

    fn description(&self) -> &str {
        "Remove the whitespace immediately inside paired quotes"
    }

    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut open: Option<String> = None;
        let mut iter = tokens.into_iter().peekable();

        while let Some(token) = iter.next() {
            let quote = match token {
                Token::Quote(q) => q,
                other => {
                    out.push(other);
                    continue;
                }
            };

            if open.as_deref() == Some(quote.as_str()) {
                // Closing quote: drop the whitespace just inside it
                if matches!(out.last(), Some(Token::Whitespace(_))) {
                    out.pop();
                }
                out.push(Token::Quote(quote));
                open = None;
            } else if open.is_none() {
                // Opening quote: drop the whitespace just inside it
                out.push(Token::Quote(quote.clone()));
                if matches!(iter.peek(), Some(Token::Whitespace(_))) {
                    iter.next();
                }
                open = Some(quote);
            } else {
                // A different quote kind while one is open is ordinary text
                out.push(Token::Quote(quote));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textfmt::testing::{quote, space, word};

    #[test]
    fn test_spaces_inside_pair_are_removed() {
        let tokens = vec![
            quote("'"),
            space(),
            word("hello"),
            space(),
            quote("'"),
        ];
        let result = TrimQuotes.transform(tokens);
        assert_eq!(result, vec![quote("'"), word("hello"), quote("'")]);
    }

    #[test]
    fn test_only_one_whitespace_token_is_dropped_per_side() {
        let tokens = vec![
            quote("'"),
            space(),
            space(),
            word("x"),
            space(),
            quote("'"),
        ];
        let result = TrimQuotes.transform(tokens);
        assert_eq!(result, vec![quote("'"), space(), word("x"), quote("'")]);
    }

    #[test]
    fn test_double_quotes_pair_too() {
        let tokens = vec![
            quote("\""),
            space(),
            word("hi"),
            space(),
            quote("\""),
        ];
        let result = TrimQuotes.transform(tokens);
        assert_eq!(result, vec![quote("\""), word("hi"), quote("\"")]);
    }

    #[test]
    fn test_other_kind_inside_open_pair_passes_through() {
        let tokens = vec![
            quote("\""),
            word("it"),
            quote("'"),
            word("s"),
            quote("\""),
        ];
        let result = TrimQuotes.transform(tokens.clone());
        assert_eq!(result, tokens);
    }

    #[test]
    fn test_unmatched_quote_never_closes() {
        let tokens = vec![word("it"), quote("'"), space(), word("s")];
        let result = TrimQuotes.transform(tokens);
        assert_eq!(result, vec![word("it"), quote("'"), word("s")]);
    }

    #[test]
    fn test_tight_pair_is_untouched() {
        let tokens = vec![quote("'"), word("snug"), quote("'")];
        let result = TrimQuotes.transform(tokens.clone());
        assert_eq!(result, tokens);
    }
}
