//! AnalysisHost and Analysis — state management for the resolver.
//!
//! The `AnalysisHost` owns the registered typings documents and provides
//! `Analysis` snapshots for querying. The resolver itself holds no state
//! across calls; everything it reads is borrowed from the snapshot.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//! host.add_typings("lib.dom.d.ts", source);
//!
//! let analysis = host.analysis();
//! let result = analysis.goto_declaration(template, offset);
//! ```

use rustc_hash::FxHashMap;

use crate::base::FileId;
use crate::parser::parse_typings;
use crate::syntax::{ParseError, TypingsFile};

use super::{GotoResult, goto_declaration};

/// Well-known name of the ambient DOM typings document.
pub const DOM_TYPINGS_FILE: &str = "lib.dom.d.ts";

struct TypingsDocument {
    name: String,
    file: TypingsFile,
}

/// Owns the registered typings documents.
///
/// Register documents via [`add_typings`](Self::add_typings), then get a
/// read-only snapshot via [`analysis`](Self::analysis).
#[derive(Default)]
pub struct AnalysisHost {
    documents: Vec<TypingsDocument>,
    by_name: FxHashMap<String, FileId>,
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a typings document under a file name, parsing it.
    ///
    /// Returns the assigned [`FileId`] and any parse errors. When the same
    /// name is registered twice, both documents are kept and the first one
    /// stays the lookup result, matching "first candidate file wins".
    pub fn add_typings(&mut self, name: &str, text: &str) -> (FileId, Vec<ParseError>) {
        let result = parse_typings(text);
        let id = FileId::new(self.documents.len() as u32);

        self.documents.push(TypingsDocument {
            name: name.to_string(),
            file: result.content,
        });
        self.by_name.entry(name.to_string()).or_insert(id);

        (id, result.errors)
    }

    /// Check if a document is registered under the given name.
    pub fn has_typings(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get a read-only snapshot for queries.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis { host: self }
    }
}

/// Read-only snapshot of the host state.
#[derive(Clone, Copy)]
pub struct Analysis<'a> {
    host: &'a AnalysisHost,
}

impl Analysis<'_> {
    /// Look up a registered typings document by name.
    pub fn typings(&self, name: &str) -> Option<(FileId, &TypingsFile)> {
        let id = *self.host.by_name.get(name)?;
        Some((id, &self.host.documents[id.raw() as usize].file))
    }

    /// The ambient DOM typings document, when registered.
    pub fn dom_typings(&self) -> Option<(FileId, &TypingsFile)> {
        self.typings(DOM_TYPINGS_FILE)
    }

    /// Name of a registered document.
    pub fn file_name(&self, id: FileId) -> Option<&str> {
        self.host
            .documents
            .get(id.raw() as usize)
            .map(|d| d.name.as_str())
    }

    /// Resolve the declaration for the construct under `offset` in
    /// `template`, against the ambient DOM typings document.
    ///
    /// With no DOM typings registered, resolution fails closed: every call
    /// returns an empty result.
    pub fn goto_declaration(&self, template: &str, offset: usize) -> GotoResult {
        let Some((file, doc)) = self.dom_typings() else {
            tracing::debug!("no DOM typings document registered, no target");
            return GotoResult::empty();
        };
        goto_declaration(file, doc, template, offset)
    }
}
