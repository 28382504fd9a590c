//! Template cursor-context classification.
//!
//! Answers one question for the resolver: what construct encloses a cursor
//! offset in template markup — a tag name, an attribute, or neither?
//!
//! This is a classifier, not a parser: markup is never validated, no tree
//! is built, and malformed input simply yields `None` or the nearest
//! plausible context. Each node kind carries only the fields the resolver
//! needs.

mod scanner;

pub use scanner::context_at;

use crate::base::TextRange;

/// The smallest recognized construct enclosing a cursor offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorContext<'a> {
    /// Inside a tag (opening or closing), not inside any attribute.
    Tag(TagContext<'a>),
    /// Inside an attribute name or its value.
    Attribute(AttributeContext<'a>),
}

/// Cursor on a tag construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagContext<'a> {
    /// The element's tag name, e.g. `span`.
    pub name: &'a str,
    /// Range of the tag name in the template text.
    pub range: TextRange,
}

/// Cursor on an attribute construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeContext<'a> {
    /// Tag name of the owning element.
    pub tag: &'a str,
    /// The attribute name exactly as authored, e.g. `:value` or `@click.stop`.
    pub name: &'a str,
    /// Range of the attribute name in the template text.
    pub range: TextRange,
}
