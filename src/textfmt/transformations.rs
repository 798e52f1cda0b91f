//! Token stream transformations
//!
//! Each transformation implements one rule family of the formatter and is
//! a pure function from token stream to token stream. The pipeline runs
//! them in a fixed order (see `pipeline.rs`); every stage must leave the
//! stream in a state the next stage can consume.

pub mod article;
pub mod case;
pub mod interface;
pub mod numeric_base;
pub mod punctuation;
pub mod quotes;

pub use article::CorrectArticles;
pub use case::ApplyCaseMarkers;
pub use interface::Transformation;
pub use numeric_base::ConvertNumericBases;
pub use punctuation::NormalizePunctuation;
pub use quotes::TrimQuotes;
