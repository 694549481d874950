use vuidom::element::{find_element, query, query_all};
use vuidom::{Content, Element, Selector};

fn sample() -> Element {
    Element::div().id("root").children([
        Element::label().id("lbl").text("Fruit"),
        Element::select().id("fruit").class("js-source").children([
            Element::option("a", "Apple").id("opt-a"),
            Element::option("b", "Banana").id("opt-b"),
        ]),
        Element::button().id("go").class("js-btn").class("primary").text("Go"),
    ])
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("div-"));
}

#[test]
fn test_text_then_child_replaces_text() {
    let el = Element::div().text("hello").child(Element::li().id("item"));
    assert!(matches!(el.content, Content::Children(_)));
    assert_eq!(el.child_elements().len(), 1);
}

#[test]
fn test_text_content_concatenates_descendants() {
    let el = Element::ul().children([Element::li().text("One"), Element::li().text("Two")]);
    assert_eq!(el.text_content(), "OneTwo");
}

#[test]
fn test_option_carries_value_and_label() {
    let opt = Element::option("nl", "Netherlands");
    assert_eq!(opt.tag, "option");
    assert_eq!(opt.value(), "nl");
    assert_eq!(opt.text_content(), "Netherlands");
}

// ============================================================================
// Classes and Attributes
// ============================================================================

#[test]
fn test_add_class_is_idempotent() {
    let mut el = Element::div();
    assert!(el.add_class("is-active"));
    assert!(!el.add_class("is-active"));
    assert_eq!(el.classes, vec!["is-active"]);

    assert!(el.remove_class("is-active"));
    assert!(!el.remove_class("is-active"));
    assert!(el.classes.is_empty());
}

#[test]
fn test_data_attributes() {
    let el = Element::li().data("value", "42");
    assert_eq!(el.get_attr("data-value"), Some("42"));
    assert_eq!(el.get_data("value"), Some("42"));
}

#[test]
fn test_set_and_remove_attr() {
    let mut el = Element::input("text");
    el.set_attr("value", "abc");
    assert_eq!(el.value(), "abc");
    assert_eq!(el.remove_attr("value"), Some("abc".to_string()));
    assert_eq!(el.value(), "");
}

// ============================================================================
// Focusability
// ============================================================================

#[test]
fn test_native_focusable_tags() {
    assert!(Element::button().is_focusable());
    assert!(Element::select().is_focusable());
    assert!(Element::input("text").is_focusable());
    assert!(!Element::input("hidden").is_focusable());
    assert!(!Element::div().is_focusable());
    assert!(!Element::new("a").is_focusable());
    assert!(Element::new("a").attr("href", "#top").is_focusable());
}

#[test]
fn test_tabindex_overrides_tag() {
    assert!(Element::div().attr("tabindex", "0").is_focusable());
    assert!(!Element::button().attr("tabindex", "-1").is_focusable());
    assert!(!Element::li().attr("tabindex", "nope").is_focusable());
}

#[test]
fn test_disabled_is_not_focusable() {
    assert!(!Element::button().attr("disabled", "").is_focusable());
}

#[test]
fn test_hidden_flags() {
    assert!(Element::div().attr("hidden", "").is_hidden());
    assert!(Element::div().attr("aria-hidden", "true").is_hidden());
    assert!(!Element::div().attr("aria-hidden", "false").is_hidden());
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = sample();
    assert_eq!(find_element(&root, "opt-b").map(|e| e.value()), Some("b"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_query_by_class_and_tag() {
    let root = sample();
    let btn = query(&root, &Selector::parse("button.js-btn.primary"));
    assert_eq!(btn.map(|e| e.id.as_str()), Some("go"));

    // All classes must be present
    assert!(query(&root, &Selector::parse(".js-btn.secondary")).is_none());
}

#[test]
fn test_query_all_document_order() {
    let root = sample();
    let ids: Vec<_> = query_all(&root, &"option".into())
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["opt-a", "opt-b"]);
}

#[test]
fn test_query_by_id_selector() {
    let root = sample();
    assert_eq!(query(&root, &Selector::parse("#fruit")).map(|e| e.tag.as_str()), Some("select"));
}
