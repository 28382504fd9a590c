//! Go-to-declaration tests against the DOM fixture.

use domjump::ide::{AnalysisHost, DOM_TYPINGS_FILE, TargetKind};

use crate::helpers::{DOM_FIXTURE, dom_host};

// =============================================================================
// TAG JUMP
// =============================================================================

#[test]
fn test_span_tag_jumps_to_interface() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = "<span>hello</span>";
    let result = analysis.goto_declaration(template, 2);

    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.name, "HTMLSpanElement");
    assert_eq!(target.kind, TargetKind::Interface);

    // The target range covers the interface declaration in the fixture.
    let decl_at = DOM_FIXTURE.find("interface HTMLSpanElement").unwrap();
    assert_eq!(u32::from(target.range.start()), decl_at as u32);
}

#[test]
fn test_closing_tag_also_jumps() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = "<span>hello</span>";
    let offset = template.rfind("span").unwrap();
    let result = analysis.goto_declaration(template, offset);

    assert_eq!(result.targets[0].name, "HTMLSpanElement");
}

#[test]
fn test_unknown_tag_is_empty() {
    let host = dom_host();
    let analysis = host.analysis();

    let result = analysis.goto_declaration("<my-custom-widget></my-custom-widget>", 2);
    assert!(result.is_empty());
}

// =============================================================================
// ATTRIBUTE JUMP
// =============================================================================

#[test]
fn test_bound_attribute_jumps_to_own_member() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = r#"<input :value="count">"#;
    let offset = template.find(":value").unwrap();
    let result = analysis.goto_declaration(template, offset);

    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.name, "value");
    assert_eq!(target.kind, TargetKind::Property);

    // Resolves to HTMLInputElement's own `value`, not some ancestor's.
    let input_at = DOM_FIXTURE.find("interface HTMLInputElement").unwrap();
    assert!(u32::from(target.range.start()) > input_at as u32);
}

#[test]
fn test_attribute_inherited_from_html_element() {
    let host = dom_host();
    let analysis = host.analysis();

    // `title` is declared on HTMLElement, reached from <span> via extends.
    let template = r#"<span :title="tooltip">x</span>"#;
    let offset = template.find(":title").unwrap();
    let result = analysis.goto_declaration(template, offset);

    assert_eq!(result.targets[0].name, "title");
}

#[test]
fn test_event_attribute_maps_to_handler_member() {
    let host = dom_host();
    let analysis = host.analysis();

    // @click → onclick, declared on GlobalEventHandlers two hops up.
    let template = r#"<button @click="go()">Go</button>"#;
    let offset = template.find("@click").unwrap();
    let result = analysis.goto_declaration(template, offset);

    assert_eq!(result.targets[0].name, "onclick");
    assert_eq!(result.targets[0].kind, TargetKind::Property);
}

#[test]
fn test_event_attribute_with_modifier() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = r#"<button @click.stop="go()">Go</button>"#;
    let offset = template.find("@click").unwrap();
    let result = analysis.goto_declaration(template, offset);

    assert_eq!(result.targets[0].name, "onclick");
}

#[test]
fn test_class_attribute_resolves_to_class_name() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = r#"<span class="big">x</span>"#;
    let offset = template.find("class").unwrap();
    let result = analysis.goto_declaration(template, offset);

    // `class` normalizes to `className`, declared on Element.
    assert_eq!(result.targets[0].name, "className");
}

#[test]
fn test_fully_qualified_bound_attribute() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = r#"<input v-bind:placeholder="hint">"#;
    let offset = template.find("v-bind").unwrap();
    let result = analysis.goto_declaration(template, offset);

    assert_eq!(result.targets[0].name, "placeholder");
}

#[test]
fn test_method_member_target_kind() {
    let host = dom_host();
    let analysis = host.analysis();

    // Plain attribute named like a method still resolves by name.
    let template = "<input select>";
    let offset = template.find("select").unwrap();
    let result = analysis.goto_declaration(template, offset);

    assert_eq!(result.targets[0].name, "select");
    assert_eq!(result.targets[0].kind, TargetKind::Method);
}

#[test]
fn test_attribute_not_declared_anywhere_is_empty() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = r#"<span :frobnicate="x">y</span>"#;
    let offset = template.find(":frob").unwrap();
    assert!(analysis.goto_declaration(template, offset).is_empty());
}

#[test]
fn test_attribute_on_unknown_tag_is_empty() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = r#"<my-custom-widget :value="x">"#;
    let offset = template.find(":value").unwrap();
    assert!(analysis.goto_declaration(template, offset).is_empty());
}

// =============================================================================
// FAILURE MODES
// =============================================================================

#[test]
fn test_cursor_in_text_content_is_empty() {
    let host = dom_host();
    let analysis = host.analysis();

    let template = "<span>hello</span>";
    let offset = template.find("hello").unwrap();
    assert!(analysis.goto_declaration(template, offset).is_empty());
}

#[test]
fn test_no_dom_document_every_call_is_empty() {
    let host = AnalysisHost::new();
    let analysis = host.analysis();

    for (template, offset) in [
        ("<span>x</span>", 2),
        (r#"<input :value="c">"#, 8),
        ("plain text", 3),
    ] {
        assert!(analysis.goto_declaration(template, offset).is_empty());
    }
}

#[test]
fn test_wrongly_named_document_is_not_used() {
    let mut host = AnalysisHost::new();
    host.add_typings("lib.webworker.d.ts", "interface HTMLSpanElement {}");
    let analysis = host.analysis();

    assert!(analysis.goto_declaration("<span>x</span>", 2).is_empty());
}

#[test]
fn test_first_dom_document_wins() {
    let mut host = AnalysisHost::new();
    host.add_typings(DOM_TYPINGS_FILE, "interface HTMLSpanElement { }");
    host.add_typings(DOM_TYPINGS_FILE, "interface HTMLDivElement { }");
    let analysis = host.analysis();

    assert!(!analysis.goto_declaration("<span>x</span>", 2).is_empty());
    assert!(analysis.goto_declaration("<div>x</div>", 2).is_empty());
}
