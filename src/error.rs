//! Error types for headify
//!
//! [`HeadifyError`] covers everything that can stop a run: lexical errors
//! from the scanner and phrases that match no known shape. Every error
//! carries a byte offset into the source; [`SourceLocation`] turns it into
//! a 1-based line and column for reporting.
//!
//! All errors are fatal. There is no partial output.

use crate::phrase::{error_message, Phrase};
use crate::scanner::{ElementList, ScanError};
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Line and column of byte `offset` in `source`. The line is one more
    /// than the number of line breaks before the offset.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |pos| pos + 1);
        let column = source
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count())
            + 1;
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that abort a headify run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadifyError {
    /// Unterminated literal, comment or braces, or mismatched braces
    Scan(ScanError),

    /// A phrase that matches none of the recognised shapes
    Phrase { message: String, offset: usize },
}

impl HeadifyError {
    /// Build the error for an error phrase.
    pub fn from_phrase(elements: &ElementList<'_>, phrase: &Phrase) -> Self {
        HeadifyError::Phrase {
            message: error_message(elements, phrase),
            offset: elements.get(phrase.last).begin,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            HeadifyError::Scan(err) => err.offset,
            HeadifyError::Phrase { offset, .. } => *offset,
        }
    }

    pub fn location(&self, source: &str) -> SourceLocation {
        SourceLocation::from_offset(source, self.offset())
    }

    /// Diagnostic line `<unit>:<line>: <message>`.
    pub fn report(&self, unit: &str, source: &str) -> String {
        format!("{}:{}: {}", unit, self.location(source).line, self)
    }
}

impl fmt::Display for HeadifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadifyError::Scan(err) => write!(f, "{}", err),
            HeadifyError::Phrase { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for HeadifyError {}

impl From<ScanError> for HeadifyError {
    fn from(err: ScanError) -> Self {
        HeadifyError::Scan(err)
    }
}
