//! Marker-driven text formatting engine
//!
//! The engine is a two-stage design:
//! 1. Core tokenization using the logos lexer (lossless: the token stream
//!    concatenates back to the input byte-for-byte)
//! 2. A fixed transformation pipeline over the token stream:
//!    - Numeric base conversion ((hex)/(bin) markers) ./transformations/numeric_base.rs
//!    - Case markers ((cap)/(up)/(low), with counts) ./transformations/case.rs
//!    - Article correction (a -> an) ./transformations/article.rs
//!    - Quote trimming (spaces inside paired quotes) ./transformations/quotes.rs
//!    - Punctuation spacing ./transformations/punctuation.rs
//!
//! The stage order is load-bearing: numeric conversion must see raw word
//! text before case markers can touch it, article correction must see the
//! post-case words, and punctuation spacing runs last so it normalizes
//! whatever the marker deletions left behind. Re-running the pipeline on
//! its own output is a no-op.

pub mod lexer;
pub mod marker;
pub mod pipeline;
pub mod processor;
pub mod testing;
pub mod transformations;

pub use lexer::{detokenize, tokenize, Token};
pub use pipeline::{format_text, Pipeline, PipelineStage};
