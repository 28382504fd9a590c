//! Shared fixtures for integration tests.

use domjump::ide::{AnalysisHost, DOM_TYPINGS_FILE};
use domjump::parser::parse_typings;
use domjump::syntax::TypingsFile;
use once_cell::sync::Lazy;

/// Trimmed DOM typings document used across the integration tests.
pub const DOM_FIXTURE: &str = include_str!("../fixtures/lib.dom.d.ts");

static PARSED_FIXTURE: Lazy<TypingsFile> = Lazy::new(|| {
    let result = parse_typings(DOM_FIXTURE);
    assert!(
        result.is_ok(),
        "fixture must parse cleanly: {:?}",
        result.errors
    );
    result.content
});

/// The fixture parsed once, for tests that work below the host layer.
pub fn dom_fixture() -> &'static TypingsFile {
    &PARSED_FIXTURE
}

/// A host with the DOM fixture registered under the well-known name.
pub fn dom_host() -> AnalysisHost {
    let mut host = AnalysisHost::new();
    let (_, errors) = host.add_typings(DOM_TYPINGS_FILE, DOM_FIXTURE);
    assert!(errors.is_empty(), "fixture must parse cleanly: {errors:?}");
    host
}
