//! Per-call index over one typings document.
//!
//! [`DeclIndex`] borrows an already-parsed [`TypingsFile`] for the duration
//! of a single resolution request. It is intentionally rebuilt per call and
//! never cached: the host owns the document and may re-parse or invalidate
//! it between requests.
//!
//! Interface identity is positional ([`InterfaceId`]), not name-based, so
//! two declarations sharing a name stay distinct; name lookup is
//! first-declaration-wins, matching document-scope resolution.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::syntax::{InterfaceDecl, MemberDecl, TypingsFile};

/// Identity of an interface within one document: its position among the
/// top-level declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceId(u32);

impl InterfaceId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A member found by search, together with the interface that declares it.
#[derive(Debug, Clone, Copy)]
pub struct MemberRef<'a> {
    pub owner: InterfaceId,
    pub member: &'a MemberDecl,
}

/// Read-only index over the top-level interfaces of one document.
pub struct DeclIndex<'a> {
    doc: &'a TypingsFile,
    /// Name → id of the first declaration with that name.
    by_name: IndexMap<&'a str, InterfaceId>,
}

impl<'a> DeclIndex<'a> {
    pub fn new(doc: &'a TypingsFile) -> Self {
        let mut by_name = IndexMap::with_capacity(doc.interfaces.len());
        for (i, decl) in doc.interfaces.iter().enumerate() {
            // First declaration wins on duplicate names.
            by_name.entry(decl.name.as_str()).or_insert(InterfaceId(i as u32));
        }
        Self { doc, by_name }
    }

    /// Find a top-level interface declaration by exact name.
    pub fn find_interface(&self, name: &str) -> Option<InterfaceId> {
        self.by_name.get(name).copied()
    }

    /// The declaration behind an id.
    pub fn decl(&self, id: InterfaceId) -> &'a InterfaceDecl {
        &self.doc.interfaces[id.index()]
    }

    /// Search an interface and its transitive `extends` graph for a member.
    ///
    /// Depth-first, declaration order: own members first, then each
    /// heritage entry in turn, each searched fully before its next sibling.
    /// The first match wins and short-circuits the rest of the traversal.
    /// Unresolvable heritage entries are skipped silently; a visited set
    /// keyed by interface identity guarantees termination on cyclic graphs.
    pub fn find_member(&self, start: InterfaceId, prop_name: &str) -> Option<MemberRef<'a>> {
        let mut visited = FxHashSet::default();
        self.search(start, prop_name, &mut visited)
    }

    fn search(
        &self,
        current: InterfaceId,
        prop_name: &str,
        visited: &mut FxHashSet<InterfaceId>,
    ) -> Option<MemberRef<'a>> {
        if !visited.insert(current) {
            // Cycle guard: this branch is exhausted, siblings may still match.
            return None;
        }

        let decl = self.decl(current);

        for member in &decl.members {
            if member.name == prop_name {
                tracing::trace!(
                    interface = %decl.name,
                    member = %member.name,
                    "member found"
                );
                return Some(MemberRef {
                    owner: current,
                    member,
                });
            }
        }

        for parent_ref in &decl.extends {
            let Some(parent) = self.find_interface(&parent_ref.name) else {
                tracing::trace!(
                    interface = %decl.name,
                    parent = %parent_ref.name,
                    "unresolved extends reference, skipping"
                );
                continue;
            };
            if let Some(found) = self.search(parent, prop_name, visited) {
                return Some(found);
            }
        }

        None
    }
}
