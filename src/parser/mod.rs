//! Parser for the declaration subset of ambient typings files.
//!
//! This module provides:
//! - **logos** based lexing of `.d.ts` source text
//! - a recovering recursive-descent parser that extracts top-level
//!   `interface` declarations into a [`crate::syntax::TypingsFile`]
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Declaration parser → TypingsFile (flat AST) + ParseErrors
//! ```
//!
//! The parser deliberately understands only what navigation needs: interface
//! names, heritage clauses, and named member signatures. Type annotations
//! are skipped with bracket-depth balancing and never interpreted. Any other
//! top-level construct is skipped wholesale.

mod decls;
mod lexer;

pub use decls::parse_typings;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
