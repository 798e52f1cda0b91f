//! This module orchestrates the complete formatting pipeline.
//!
//! The pipeline consists of:
//! 1. Core tokenization using the logos lexer (done by the caller or by
//!    `format_text`)
//! 2. The transformation sequence, in fixed order:
//!    - Numeric base conversion ../transformations/numeric_base.rs
//!    - Case markers ../transformations/case.rs
//!    - Article correction ../transformations/article.rs
//!    - Quote trimming ../transformations/quotes.rs
//!    - Punctuation spacing ../transformations/punctuation.rs
//!
//! The order is a correctness invariant, not a configuration choice:
//! numeric conversion must read word text before the case stage can alter
//! it, article correction judges the post-case words, and spacing
//! normalization runs last over whatever the marker deletions left. For
//! that reason the stage list is fixed here rather than registered
//! dynamically.

use crate::textfmt::lexer::{detokenize, tokenize, Token};
use crate::textfmt::transformations::{
    ApplyCaseMarkers, ConvertNumericBases, CorrectArticles, NormalizePunctuation,
    Transformation, TrimQuotes,
};

/// A stage boundary in the pipeline, for debugging and testing
///
/// `process_until` returns the token stream as it stands once the named
/// stage (and everything before it) has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Raw tokens, before any transformation
    RawTokens,
    /// After numeric base conversion
    NumericBases,
    /// After case markers have been applied and all markers deleted
    CaseMarkers,
    /// After article correction
    Articles,
    /// After quote trimming
    Quotes,
    /// After punctuation spacing (the final output stream)
    Punctuation,
}

impl PipelineStage {
    fn stage_count(self) -> usize {
        match self {
            PipelineStage::RawTokens => 0,
            PipelineStage::NumericBases => 1,
            PipelineStage::CaseMarkers => 2,
            PipelineStage::Articles => 3,
            PipelineStage::Quotes => 4,
            PipelineStage::Punctuation => 5,
        }
    }
}

/// The fixed, ordered formatting pipeline
pub struct Pipeline {
    stages: Vec<Box<dyn Transformation>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline {
            stages: vec![
                Box::new(ConvertNumericBases),
                Box::new(ApplyCaseMarkers),
                Box::new(CorrectArticles),
                Box::new(TrimQuotes),
                Box::new(NormalizePunctuation),
            ],
        }
    }

    /// Run the full pipeline, each stage's output becoming the next
    /// stage's input
    pub fn process(&self, tokens: Vec<Token>) -> Vec<Token> {
        self.stages
            .iter()
            .fold(tokens, |tokens, stage| stage.transform(tokens))
    }

    /// Run the pipeline up to and including the given stage
    pub fn process_until(&self, tokens: Vec<Token>, stage: PipelineStage) -> Vec<Token> {
        self.stages[..stage.stage_count()]
            .iter()
            .fold(tokens, |tokens, stage| stage.transform(tokens))
    }

    /// The stages in execution order, for listing and diagnostics
    pub fn stages(&self) -> impl Iterator<Item = &dyn Transformation> {
        self.stages.iter().map(|s| s.as_ref())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a whole document: tokenize, run the pipeline, reassemble
pub fn format_text(source: &str) -> String {
    let tokens = tokenize(source);
    let processed = Pipeline::new().process(tokens);
    detokenize(&processed)
}
