//! Syntax layer — declaration AST for ambient typings documents.
//!
//! The parser produces a [`TypingsFile`]: a flat, owned view of the
//! top-level `interface` declarations in a `.d.ts` document. Nothing below
//! the top level is modeled; member type annotations are recorded only as
//! source ranges.

mod errors;
mod file;

pub use errors::{ParseError, ParseResult};
pub use file::{ExtendsRef, InterfaceDecl, MemberDecl, MemberKind, TypingsFile};
