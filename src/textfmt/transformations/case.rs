//! Case marker transformation
//!
//! A `(cap)`, `(up)` or `(low)` marker applies its case operation to the
//! N words before it (N from the marker's count, default 1), scanning
//! backward and skipping anything that is not a word. Fewer available
//! words than requested is not an error; the marker applies to what is
//! there.
//!
//! This stage consumes every marker still in the stream: case markers
//! after applying their effect, everything else (unrecognized commands,
//! stray numeric markers) as a silent no-op. No marker survives past this
//! stage.

use crate::textfmt::lexer::Token;
use crate::textfmt::marker::{Marker, MarkerCommand};
use crate::textfmt::transformations::Transformation;

/// Case marker transformation
pub struct ApplyCaseMarkers;

impl Transformation for ApplyCaseMarkers {
    fn name(&self) -> &str {
        "apply_case_markers"
    }

    fn description(&self) -> &str {
        "Apply (cap)/(up)/(low) markers to preceding words and delete all remaining markers"
    }

    fn transform(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut tokens = tokens;
        let mut i = 0;

        while i < tokens.len() {
            let parsed = match &tokens[i] {
                Token::Marker(text) => Marker::parse(text),
                _ => {
                    i += 1;
                    continue;
                }
            };

            if let Some(marker) = parsed {
                let operation: Option<fn(&str) -> String> = match marker.command {
                    MarkerCommand::Up => Some(|w| w.to_ascii_uppercase()),
                    MarkerCommand::Low => Some(|w| w.to_ascii_lowercase()),
                    MarkerCommand::Cap => Some(capitalize),
                    _ => None,
                };

                if let Some(operation) = operation {
                    let mut remaining = marker.count;
                    for j in (0..i).rev() {
                        if remaining == 0 {
                            break;
                        }
                        if let Token::Word(text) = &tokens[j] {
                            let replaced = operation(text);
                            tokens[j] = Token::Word(replaced);
                            remaining -= 1;
                        }
                    }
                }
            }

            // The marker is consumed whether or not it did anything
            tokens.remove(i);
        }

        tokens
    }
}

/// Uppercase the first character, lowercase the rest (ASCII only)
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}
