//! IDE features — the go-to-declaration entry points.
//!
//! This module ties the template classifier and the resolution core
//! together behind the small API an editor integration calls.
//!
//! ## Design Principles
//!
//! 1. **Pure queries**: take data in, return data out, no mutation
//! 2. **No editor types**: uses our own types, converted at the host boundary
//! 3. **Empty, never error**: every failure mode is an empty result
//!
//! ## Usage
//!
//! ```ignore
//! use domjump::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.add_typings("lib.dom.d.ts", dom_source);
//!
//! let analysis = host.analysis();
//! let result = analysis.goto_declaration(template_text, cursor_offset);
//! ```

mod analysis;
mod goto;

pub use analysis::{Analysis, AnalysisHost, DOM_TYPINGS_FILE};
pub use goto::{GotoResult, GotoTarget, TargetKind, goto_declaration};
