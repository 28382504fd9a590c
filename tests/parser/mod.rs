//! Declaration parser tests against the DOM fixture.

pub mod tests_typings;
