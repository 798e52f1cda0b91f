//! Article correction transformation
//!
//! A standalone `a` (or `A`) becomes `an` (or `An`) when the next word,
//! skipping whitespace, starts with a vowel or `h`. Only the literal first
//! letter is checked; `a hero` becomes `an Hero` after a capitalizing
//! marker, and that is the documented behavior, not a defect to fix.
//!
//! This stage never inserts or deletes tokens; it is a pure in-place
//! rewrite.

use crate::textfmt::lexer::Token;
use crate::textfmt::transformations::Transformation;

/// Article correction transformation
pub struct CorrectArticles;

impl Transformation for CorrectArticles {
    fn name(&self) -> &str {
        "correct_articles"
    }

    fn description(&self) -> &str {
        "Rewrite a/A to an/An before words starting with a vowel or h"
    }

    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut tokens = tokens;

        for i in 0..tokens.len() {
            let is_article = matches!(&tokens[i], Token::Word(text) if text.eq_ignore_ascii_case("a"));
            if !is_article {
                continue;
            }

            // The next token that is not whitespace must be a qualifying word
            let qualifies = match tokens[i + 1..].iter().find(|t| !t.is_whitespace()) {
                Some(Token::Word(next)) => starts_with_vowel_or_h(next),
                _ => false,
            };

            if qualifies {
                let rewritten = match &tokens[i] {
                    Token::Word(text) if text == "A" => "An",
                    _ => "an",
                };
                tokens[i] = Token::Word(rewritten.to_string());
            }
        }

        tokens
    }
}

fn starts_with_vowel_or_h(word: &str) -> bool {
    word.chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'h'))
        .unwrap_or(false)
}
