//! Cursor classification on a realistic multi-line template.

use domjump::template::{CursorContext, context_at};

const TEMPLATE: &str = r#"<template>
  <div class="form">
    <!-- the main input -->
    <label :for="inputId">Name</label>
    <input
      v-bind:placeholder="hint"
      :value="name"
      @input.stop="onInput"
      disabled
    />
    <span :title="tooltip">{{ name }}</span>
  </div>
</template>
"#;

fn attr_name_at(offset: usize) -> Option<&'static str> {
    match context_at(TEMPLATE, offset) {
        Some(CursorContext::Attribute(a)) => Some(a.name),
        _ => None,
    }
}

fn tag_name_at(offset: usize) -> Option<&'static str> {
    match context_at(TEMPLATE, offset) {
        Some(CursorContext::Tag(t)) => Some(t.name),
        _ => None,
    }
}

#[test]
fn test_attributes_across_lines() {
    for (needle, expected) in [
        (":for", ":for"),
        ("v-bind:placeholder", "v-bind:placeholder"),
        (":value", ":value"),
        ("@input.stop", "@input.stop"),
        ("disabled", "disabled"),
        (":title", ":title"),
    ] {
        let offset = TEMPLATE.find(needle).unwrap();
        assert_eq!(attr_name_at(offset), Some(expected), "at {needle}");
    }
}

#[test]
fn test_owning_tag_follows_the_attribute() {
    let offset = TEMPLATE.find(":value").unwrap();
    match context_at(TEMPLATE, offset) {
        Some(CursorContext::Attribute(a)) => assert_eq!(a.tag, "input"),
        other => panic!("expected attribute context, got {other:?}"),
    }
}

#[test]
fn test_tag_names() {
    for needle in ["div", "label", "input", "span"] {
        let offset = TEMPLATE.find(&format!("<{needle}")).unwrap() + 1;
        assert_eq!(tag_name_at(offset), Some(needle), "at <{needle}");
    }
}

#[test]
fn test_interpolation_and_text_are_none() {
    let offset = TEMPLATE.find("{{ name }}").unwrap();
    assert_eq!(context_at(TEMPLATE, offset), None);

    let offset = TEMPLATE.find("Name<").unwrap();
    assert_eq!(context_at(TEMPLATE, offset), None);
}

#[test]
fn test_comment_is_none() {
    let offset = TEMPLATE.find("main input").unwrap();
    assert_eq!(context_at(TEMPLATE, offset), None);
}

#[test]
fn test_attribute_ranges_point_at_names() {
    let offset = TEMPLATE.find("@input.stop").unwrap();
    match context_at(TEMPLATE, offset) {
        Some(CursorContext::Attribute(a)) => {
            let start = u32::from(a.range.start()) as usize;
            let end = u32::from(a.range.end()) as usize;
            assert_eq!(&TEMPLATE[start..end], "@input.stop");
        }
        other => panic!("expected attribute context, got {other:?}"),
    }
}
