//! AST types for the declaration subset of ambient typings files.

use smol_str::SmolStr;

use crate::base::TextRange;

/// Parsed top-level declarations of one ambient typings document.
///
/// Only document-scope `interface` declarations are kept, in source order.
/// Interface identity within one file is positional (see
/// [`crate::hir::InterfaceId`]); names are not assumed unique — lookups take
/// the first declaration with a matching name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingsFile {
    pub interfaces: Vec<InterfaceDecl>,
}

impl TypingsFile {
    /// Iterate top-level interfaces in declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceDecl> {
        self.interfaces.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

/// A top-level `interface Name extends A, B { ... }` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    /// Declared interface name.
    pub name: SmolStr,
    /// Heritage clause entries, in declaration order. May be empty.
    pub extends: Vec<ExtendsRef>,
    /// Named members, in declaration order. Unnamed members (call and
    /// index signatures) are not modeled.
    pub members: Vec<MemberDecl>,
    /// Range of the whole declaration, `interface` keyword through `}`.
    pub range: TextRange,
}

/// One entry of an `extends` clause.
///
/// Carries only the referenced interface name; whether it resolves to a
/// declaration in the same document is decided at lookup time. An entry
/// that does not resolve is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendsRef {
    pub name: SmolStr,
    pub range: TextRange,
}

/// What kind of member a declaration is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// `name: Type;` (including `readonly` and optional forms)
    Property,
    /// `name(args): Type;`
    Method,
}

/// A named member of an interface; the unit returned as a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl {
    pub name: SmolStr,
    pub kind: MemberKind,
    /// Range of the whole member signature.
    pub range: TextRange,
}
