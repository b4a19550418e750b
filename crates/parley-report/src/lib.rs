//! Speech transcript reports
//!
//! Counts filler words and vocabulary in a transcription and attaches
//! grammar/syntax findings from an external checking service.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod builder;
mod error;
mod stats;
mod types;

pub use builder::{NO_ISSUES_MESSAGE, ReportBuilder};
pub use error::{ReportError, Result};
pub use types::{Report, TranscribedWord, TranscriptionResult, WordDetails};
