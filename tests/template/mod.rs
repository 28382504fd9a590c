//! Template classification tests on multi-line template documents.

pub mod tests_context;
