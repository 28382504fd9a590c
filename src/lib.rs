//! # domjump-base
//!
//! Core library for template-markup go-to-declaration: maps a tag or
//! attribute reference in a Vue-style HTML template to the corresponding
//! declaration inside an ambient DOM typings document (`lib.dom.d.ts`).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → go-to-declaration orchestration, AnalysisHost
//!   ↓
//! hir       → normalization, tag tables, inheritance-aware member search
//!   ↓
//! template  → cursor-context classification over template text
//!   ↓
//! syntax    → declaration AST, ParseError/ParseResult
//!   ↓
//! parser    → logos lexer, recovering declaration parser
//!   ↓
//! base      → primitives (FileId, TextRange)
//! ```
//!
//! ## Resolution flow
//!
//! ```text
//! cursor offset
//!     ↓
//! template::context_at ──→ Tag ──────→ table → interface declaration
//!     │
//!     └────────────────→ Attribute ──→ normalize → table → interface
//!                                       → member search over `extends`
//! ```
//!
//! All lookups are read-only over documents owned by the
//! [`ide::AnalysisHost`]; every failure mode yields an empty result, never
//! an error.

/// Foundation types: FileId, text ranges
pub mod base;

/// Parser: logos lexer, recovering declaration parser for `.d.ts` input
pub mod parser;

/// Syntax: declaration AST types, ParseError/ParseResult
pub mod syntax;

/// Template: cursor-context classification for template markup
pub mod template;

/// Resolution core: normalization, tag tables, member search
pub mod hir;

/// IDE features: go-to-declaration, AnalysisHost
pub mod ide;

// Re-export foundation types
pub use base::{FileId, TextRange, TextSize};
