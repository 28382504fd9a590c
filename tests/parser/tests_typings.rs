//! Parsing the realistic DOM fixture end to end.

use domjump::syntax::MemberKind;

use crate::helpers::dom_fixture;

#[test]
fn test_fixture_interfaces_extracted_in_order() {
    let doc = dom_fixture();
    let names: Vec<&str> = doc.interfaces().map(|i| i.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "EventTarget",
            "Node",
            "ARIAMixin",
            "Element",
            "ElementCSSInlineStyle",
            "GlobalEventHandlers",
            "HTMLElement",
            "HTMLSpanElement",
            "HTMLInputElement",
            "HTMLButtonElement",
            "HTMLAnchorElement",
            "HTMLImageElement",
        ]
    );
}

#[test]
fn test_declare_var_blocks_are_not_interfaces() {
    // The fixture contains `declare var EventTarget: {...}` and
    // `declare var HTMLSpanElement: {...}`; neither may surface.
    let doc = dom_fixture();
    assert_eq!(
        doc.interfaces().filter(|i| i.name == "EventTarget").count(),
        1
    );
}

#[test]
fn test_heritage_clauses_in_declaration_order() {
    let doc = dom_fixture();
    let html_element = doc
        .interfaces()
        .find(|i| i.name == "HTMLElement")
        .expect("HTMLElement in fixture");

    let parents: Vec<&str> = html_element.extends.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        parents,
        vec!["Element", "ElementCSSInlineStyle", "GlobalEventHandlers"]
    );
}

#[test]
fn test_member_kinds_from_fixture() {
    let doc = dom_fixture();
    let input = doc
        .interfaces()
        .find(|i| i.name == "HTMLInputElement")
        .unwrap();

    let value = input.members.iter().find(|m| m.name == "value").unwrap();
    assert_eq!(value.kind, MemberKind::Property);

    let select = input.members.iter().find(|m| m.name == "select").unwrap();
    assert_eq!(select.kind, MemberKind::Method);
}

#[test]
fn test_readonly_members_keep_their_names() {
    let doc = dom_fixture();
    let element = doc.interfaces().find(|i| i.name == "Element").unwrap();

    assert!(element.members.iter().any(|m| m.name == "clientWidth"));
    assert!(element.members.iter().any(|m| m.name == "tagName"));
}

#[test]
fn test_function_typed_properties_are_single_members() {
    // Handler properties have arrow-function types full of parens and
    // arrows; each must still parse as exactly one property.
    let doc = dom_fixture();
    let handlers = doc
        .interfaces()
        .find(|i| i.name == "GlobalEventHandlers")
        .unwrap();

    let names: Vec<&str> = handlers.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["onblur", "onchange", "onclick", "onfocus", "oninput", "onkeydown"]
    );
    assert!(
        handlers
            .members
            .iter()
            .all(|m| m.kind == MemberKind::Property)
    );
}

#[test]
fn test_empty_interface_body() {
    let doc = dom_fixture();
    let span = doc
        .interfaces()
        .find(|i| i.name == "HTMLSpanElement")
        .unwrap();
    assert!(span.members.is_empty());
    assert_eq!(span.extends.len(), 1);
    assert_eq!(span.extends[0].name, "HTMLElement");
}
