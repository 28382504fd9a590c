//! Parse errors and the parse-result shape.

use thiserror::Error;

use crate::base::TextRange;

/// An error produced while parsing a typings document.
///
/// Parse errors never abort parsing; the parser records them and recovers
/// at the next synchronization token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {range:?}")]
pub struct ParseError {
    pub message: String,
    pub range: TextRange,
}

impl ParseError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse result containing content and any errors.
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// The parsed content. Present even when errors were recorded; a
    /// recovering parse yields partial content.
    pub content: T,
    pub errors: Vec<ParseError>,
}

impl<T> ParseResult<T> {
    pub fn ok(content: T) -> Self {
        Self {
            content,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(content: T, errors: Vec<ParseError>) -> Self {
        Self { content, errors }
    }

    /// Check if parsing succeeded without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
