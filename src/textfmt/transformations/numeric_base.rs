//! Numeric base conversion transformation
//!
//! A `(hex)` or `(bin)` marker reinterprets the word immediately before it
//! as a base-16 or base-2 integer and replaces it with its decimal
//! rendering. The marker may be separated from its word by at most one
//! whitespace token, which is preserved. The marker itself is always
//! deleted, whether or not the conversion succeeded; markers carrying any
//! other command pass through for the case stage to consume.

use crate::textfmt::lexer::Token;
use crate::textfmt::marker::{Marker, MarkerCommand};
use crate::textfmt::transformations::Transformation;

/// Numeric base conversion transformation
pub struct ConvertNumericBases;

impl Transformation for ConvertNumericBases {
    fn name(&self) -> &str {
        "convert_numeric_bases"
    }

    fn description(&self) -> &str {
        "Convert words preceding (hex)/(bin) markers to their decimal rendering"
    }

    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());

        for token in tokens {
            if let Token::Marker(text) = &token {
                let base = match Marker::parse(text).map(|m| m.command) {
                    Some(MarkerCommand::Hex) => Some(16),
                    Some(MarkerCommand::Bin) => Some(2),
                    _ => None,
                };
                if let Some(base) = base {
                    convert_preceding_word(&mut out, base);
                    // Marker consumed, not appended
                    continue;
                }
            }
            out.push(token);
        }

        out
    }
}

/// Reparse the word nearest the end of `out` (skipping at most one
/// whitespace token) in the given base; on success, replace its text with
/// the base-10 rendering. Parse failures and overflow leave the word
/// unchanged.
fn convert_preceding_word(out: &mut [Token], base: u32) {
    let index = match out.last() {
        Some(Token::Whitespace(_)) if out.len() >= 2 => out.len() - 2,
        Some(Token::Whitespace(_)) | None => return,
        Some(_) => out.len() - 1,
    };

    if let Token::Word(text) = &out[index] {
        if let Ok(value) = i64::from_str_radix(text, base) {
            out[index] = Token::Word(value.to_string());
        }
    }
}
