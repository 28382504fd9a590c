//! Foundation types for the domjump resolver.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Identifier for a registered typings document
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other domjump modules.

mod file_id;

pub use file_id::FileId;
pub use text_size::{TextRange, TextSize};

// Re-export text-size for convenience
pub use text_size;
