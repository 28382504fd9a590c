//! Resolution core — from template names to typings declarations.
//!
//! ## Key Types
//!
//! - [`normalize_attribute`] — template attribute token → canonical DOM
//!   property name
//! - [`dom_interface_for`] / [`attributes_interface_for`] — static tag name
//!   tables
//! - [`DeclIndex`] — per-call index over a borrowed typings document, with
//!   top-level interface lookup and inheritance-aware member search
//!
//! ## Resolution pipeline
//!
//! ```text
//! tag name        → dom_interface_for → find_interface            (tag jump)
//! attribute token → normalize_attribute ┐
//! tag name        → dom_interface_for   ├→ find_interface → find_member
//!                                       ┘                  (attribute jump)
//! ```
//!
//! Everything here is read-only and stateless across calls: the index
//! borrows the document and is dropped with it, and the tables are
//! process-wide immutable data.

mod index;
mod normalize;
mod tables;

pub use index::{DeclIndex, InterfaceId, MemberRef};
pub use normalize::normalize_attribute;
pub use tables::{attributes_interface_for, dom_interface_for};
