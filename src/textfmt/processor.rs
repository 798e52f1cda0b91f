//! File processing API for the formatter
//!
//! This module wraps the core pipeline in the whole-file workflow: read
//! the input entirely, format it, write the output entirely. There is no
//! streaming and no partial failure; the document either formats in
//! memory or an error describing the boundary failure is returned.
//!
//! The module also provides token dump formats (simple and JSON) for
//! inspecting what the lexer and pipeline produced.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::textfmt::lexer::Token;
use crate::textfmt::pipeline::Pipeline;
use crate::textfmt::{detokenize, tokenize};

/// Errors that can occur during processing
///
/// The core itself never fails; these all live at the file and
/// serialization boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    ReadFailed(String),
    WriteFailed(String),
    SerializeFailed(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::ReadFailed(msg) => write!(f, "reading input: {}", msg),
            ProcessingError::WriteFailed(msg) => write!(f, "writing output: {}", msg),
            ProcessingError::SerializeFailed(msg) => {
                write!(f, "serializing tokens: {}", msg)
            }
        }
    }
}

/// Represents the output format for token dumps
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
}

/// Format a whole file: read `input`, run the pipeline, write `output`
pub fn process_file<I: AsRef<Path>, O: AsRef<Path>>(
    input: I,
    output: O,
) -> Result<(), ProcessingError> {
    let input = input.as_ref();
    let output = output.as_ref();

    tracing::info!(input = %input.display(), output = %output.display(), "processing file");

    let source = fs::read_to_string(input)
        .map_err(|e| ProcessingError::ReadFailed(format!("{}: {}", input.display(), e)))?;

    let tokens = tokenize(&source);
    tracing::debug!(count = tokens.len(), "tokenized input");

    let processed = Pipeline::new().process(tokens);
    tracing::debug!(count = processed.len(), "pipeline complete");

    fs::write(output, detokenize(&processed))
        .map_err(|e| ProcessingError::WriteFailed(format!("{}: {}", output.display(), e)))?;

    tracing::info!("processing completed");
    Ok(())
}

/// Format a token stream according to the specified output format.
///
/// `Simple` renders one `<kind:text>` cell per token; `Json` produces
/// pretty-printed JSON of the whole stream.
pub fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(|token| token.to_string()).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::SerializeFailed(e.to_string())),
    }
}
