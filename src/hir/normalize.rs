//! Attribute-token normalization.
//!
//! Maps an attribute name as authored in template markup to the canonical
//! DOM property name used for member lookup. Four surface forms:
//!
//! | written          | canonical   |
//! |------------------|-------------|
//! | `:value`         | `value`     |
//! | `@click`         | `onclick`   |
//! | `v-bind:value`   | `value`     |
//! | `disabled`       | `disabled`  |
//!
//! Dot-separated modifiers (`.lazy`, `.stop`) are stripped, and `class`
//! rewrites to `className` (the DOM property name).

use smol_str::SmolStr;

/// Normalize a raw attribute token to its canonical DOM property name.
///
/// Total: every input produces a name. Malformed input (e.g. a bare `:`)
/// yields a name that simply fails downstream lookup.
pub fn normalize_attribute(raw: &str) -> SmolStr {
    let core = if let Some(rest) = raw.strip_prefix(':') {
        SmolStr::new(before_modifiers(rest))
    } else if let Some(rest) = raw.strip_prefix('@') {
        SmolStr::new(format!("on{}", before_modifiers(rest)))
    } else if let Some(rest) = raw.strip_prefix("v-bind:") {
        SmolStr::new(before_modifiers(rest))
    } else {
        SmolStr::new(before_modifiers(raw))
    };

    if core == "class" {
        SmolStr::new_static("className")
    } else {
        core
    }
}

/// Take the substring before the first `.` modifier separator.
fn before_modifiers(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}
