//! Go-to-declaration implementation.

use smol_str::SmolStr;

use crate::base::{FileId, TextRange};
use crate::hir::{DeclIndex, dom_interface_for, normalize_attribute};
use crate::syntax::{MemberKind, TypingsFile};
use crate::template::{AttributeContext, CursorContext, TagContext, context_at};

/// Result of a go-to-declaration request.
#[derive(Clone, Debug)]
pub struct GotoResult {
    /// The targets to jump to. At most one for this resolver.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A declaration location in a typings document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The typings document containing the target.
    pub file: FileId,
    /// Range of the declaration.
    pub range: TextRange,
    /// What kind of declaration the target is.
    pub kind: TargetKind,
    /// The declared name.
    pub name: SmolStr,
}

/// Kind of a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Interface,
    Property,
    Method,
}

impl From<MemberKind> for TargetKind {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Property => TargetKind::Property,
            MemberKind::Method => TargetKind::Method,
        }
    }
}

/// Resolve the declaration for the construct under `offset` in `template`.
///
/// Two branches:
/// - cursor on a tag → the DOM interface declaration for that element
/// - cursor on an attribute → the member declaration for the normalized
///   property name, searched on the element's interface and its `extends`
///   graph
///
/// Every failure mode — no enclosing construct, unsupported element,
/// missing interface or member — collapses to an empty result.
pub fn goto_declaration(
    file: FileId,
    doc: &TypingsFile,
    template: &str,
    offset: usize,
) -> GotoResult {
    match context_at(template, offset) {
        Some(CursorContext::Tag(tag)) => tag_target(file, doc, &tag),
        Some(CursorContext::Attribute(attr)) => attribute_target(file, doc, &attr),
        None => GotoResult::empty(),
    }
}

/// Tag jump: `span` → the `HTMLSpanElement` interface declaration itself.
fn tag_target(file: FileId, doc: &TypingsFile, tag: &TagContext<'_>) -> GotoResult {
    let Some(interface_name) = dom_interface_for(tag.name) else {
        tracing::debug!(tag = tag.name, "unsupported element, no target");
        return GotoResult::empty();
    };

    let index = DeclIndex::new(doc);
    let Some(id) = index.find_interface(interface_name) else {
        tracing::debug!(interface = interface_name, "interface not in typings document");
        return GotoResult::empty();
    };

    let decl = index.decl(id);
    GotoResult::single(GotoTarget {
        file,
        range: decl.range,
        kind: TargetKind::Interface,
        name: decl.name.clone(),
    })
}

/// Attribute jump: `:value` on `<input>` → the `value` member of
/// `HTMLInputElement` or the nearest ancestor declaring it.
fn attribute_target(file: FileId, doc: &TypingsFile, attr: &AttributeContext<'_>) -> GotoResult {
    let Some(interface_name) = dom_interface_for(attr.tag) else {
        tracing::debug!(tag = attr.tag, "unsupported element, no target");
        return GotoResult::empty();
    };

    let prop_name = normalize_attribute(attr.name);
    tracing::debug!(
        attribute = attr.name,
        property = %prop_name,
        interface = interface_name,
        "attribute jump"
    );

    let index = DeclIndex::new(doc);
    let Some(id) = index.find_interface(interface_name) else {
        return GotoResult::empty();
    };

    match index.find_member(id, &prop_name) {
        Some(found) => GotoResult::single(GotoTarget {
            file,
            range: found.member.range,
            kind: found.member.kind.into(),
            name: found.member.name.clone(),
        }),
        None => GotoResult::empty(),
    }
}
