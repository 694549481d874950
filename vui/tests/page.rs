use vui::{InitError, Page, TypeaheadConfig};
use vuidom::{Document, Element, Event, Key, Modifiers};

const FRUITS: &[(&str, &str)] = &[
    ("d", "Date"),
    ("a", "Apple"),
    ("c", "Cherry"),
    ("b", "Banana"),
];
const VEGETABLES: &[(&str, &str)] = &[("k", "Kale"), ("l", "Leek")];

fn source(id: &str, options: &[(&str, &str)]) -> Element {
    Element::div().class("js-typeahead").children([
        Element::label().text(id),
        Element::select()
            .id(id)
            .attr("name", id)
            .children(options.iter().map(|(value, label)| Element::option(*value, *label))),
    ])
}

fn document() -> Document {
    Document::new(Element::div().id("page").children([
        source("fruit", FRUITS),
        source("veg", VEGETABLES),
        Element::button().id("outside").text("Elsewhere"),
    ]))
}

fn page() -> Page {
    let mut page = Page::new(document());
    page.mount_typeaheads(&TypeaheadConfig::default()).unwrap();
    page
}

fn press(page: &mut Page, key: Key) {
    let target = page.focused().map(str::to_string);
    page.dispatch(Event::Key {
        target,
        key,
        modifiers: Modifiers::new(),
    });
}

fn type_text(page: &mut Page, text: &str) {
    for c in text.chars() {
        press(page, Key::Char(c));
    }
}

fn attr<'a>(page: &'a Page, id: &str, name: &str) -> Option<&'a str> {
    page.document().get(id).and_then(|el| el.get_attr(name))
}

fn listed(page: &Page, listbox: &str) -> Vec<String> {
    page.document()
        .get(listbox)
        .map(|list| list.child_elements().iter().map(|li| li.text_content()).collect())
        .unwrap_or_default()
}

fn selected_count(page: &Page, listbox: &str) -> usize {
    page.document()
        .get(listbox)
        .map(|list| {
            list.child_elements()
                .iter()
                .filter(|li| li.has_class("is-selected"))
                .count()
        })
        .unwrap_or_default()
}

fn is_open(page: &Page, input: &str) -> bool {
    page.typeaheads()
        .iter()
        .find(|t| t.ids().input == input)
        .is_some_and(|t| t.is_open())
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_replaces_source_markup() {
    let page = page();
    let doc = page.document();

    let input = doc.get("fruit").unwrap();
    assert_eq!(input.tag, "input");
    assert_eq!(input.get_attr("role"), Some("combobox"));
    assert_eq!(input.get_attr("aria-owns"), Some("fruit-listbox"));
    assert_eq!(input.get_attr("aria-expanded"), Some("false"));

    let hidden = doc.get("fruit-value").unwrap();
    assert_eq!(hidden.get_attr("type"), Some("hidden"));
    assert_eq!(hidden.get_attr("name"), Some("fruit"));

    assert!(doc.get("fruit-typeahead").unwrap().has_class("is-ready"));
    assert!(doc.get("fruit-toggle").unwrap().has_class("js-typeahead-btn"));
    assert_eq!(attr(&page, "fruit-listbox", "aria-hidden"), Some("true"));
    assert!(doc.query("select").is_none());
}

#[test]
fn test_mount_without_sources_fails() {
    let mut page = Page::new(Document::new(Element::div().id("page")));
    let err = page.mount_typeaheads(&TypeaheadConfig::default()).unwrap_err();
    assert!(matches!(err, InitError::SourceMissing { .. }));
}

#[test]
fn test_source_without_options_is_left_alone() {
    let mut page = Page::new(Document::new(Element::div().id("page").children([
        source("fruit", FRUITS),
        source("empty", &[]),
    ])));
    let mounted = page.mount_typeaheads(&TypeaheadConfig::default()).unwrap();

    assert_eq!(mounted.len(), 1);
    assert_eq!(page.document().get("empty").map(|e| e.tag.as_str()), Some("select"));
    assert_eq!(page.document().query_all(".js-typeahead").len(), 1);
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_typing_opens_and_renders() {
    let mut page = page();
    page.focus("fruit");
    type_text(&mut page, "a");

    assert!(is_open(&page, "fruit"));
    assert_eq!(listed(&page, "fruit-listbox"), vec!["Apple", "Banana"]);
    assert_eq!(attr(&page, "fruit-listbox", "aria-hidden"), Some("false"));
    assert!(page.document().get("fruit-listbox").unwrap().has_class("is-active"));
    assert_eq!(attr(&page, "fruit", "aria-expanded"), Some("true"));
    assert_eq!(attr(&page, "fruit", "value"), Some("a"));
}

#[test]
fn test_no_matches_renders_placeholder() {
    let mut page = page();
    page.focus("fruit");
    type_text(&mut page, "xyz");

    assert_eq!(listed(&page, "fruit-listbox"), vec!["No Matches"]);
    let placeholder = page.document().get("fruit-listbox-no-matches").unwrap();
    assert!(placeholder.has_class("no-matches"));
}

#[test]
fn test_highlight_unique_in_markup() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);

    for expected in ["Apple", "Banana", "Apple", "Banana"] {
        press(&mut page, Key::Down);
        assert_eq!(selected_count(&page, "fruit-listbox"), 1);
        assert_eq!(attr(&page, "fruit", "value"), Some(expected));
    }

    press(&mut page, Key::Up);
    assert_eq!(selected_count(&page, "fruit-listbox"), 1);
    assert_eq!(
        attr(&page, "fruit", "aria-activedescendant"),
        Some("fruit-listbox-opt-0")
    );
}

#[test]
fn test_enter_commits_to_both_fields() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);
    press(&mut page, Key::Down);
    press(&mut page, Key::Down);
    press(&mut page, Key::Enter);

    assert!(!is_open(&page, "fruit"));
    assert_eq!(attr(&page, "fruit", "value"), Some("Banana"));
    assert_eq!(attr(&page, "fruit-value", "value"), Some("b"));
    assert_eq!(attr(&page, "fruit-listbox", "aria-hidden"), Some("true"));
    assert_eq!(selected_count(&page, "fruit-listbox"), 0);
    assert_eq!(page.focused(), Some("fruit"));
}

#[test]
fn test_escape_restores_typed_text() {
    let mut page = page();
    page.focus("fruit");
    type_text(&mut page, "ch");
    press(&mut page, Key::Down);
    assert_eq!(attr(&page, "fruit", "value"), Some("Cherry"));

    press(&mut page, Key::Escape);
    assert!(!is_open(&page, "fruit"));
    assert_eq!(attr(&page, "fruit", "value"), Some("ch"));
    assert_eq!(attr(&page, "fruit-value", "value"), Some(""));
}

#[test]
fn test_tab_moves_focus_and_closes() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);
    assert!(is_open(&page, "fruit"));

    press(&mut page, Key::Tab);
    assert_eq!(page.focused(), Some("veg"));
    assert!(!is_open(&page, "fruit"));
}

// ============================================================================
// Deferred Binding
// ============================================================================

#[test]
fn test_dropdown_binds_on_next_tick() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);

    assert_eq!(page.pending_ticks(), 1);
    assert_eq!(page.listener_count(), 0);

    page.tick();
    assert_eq!(page.pending_ticks(), 0);
    assert_eq!(page.listener_count(), 1);
}

#[test]
fn test_option_click_before_tick_is_ignored() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);

    page.dispatch(Event::click("fruit-listbox-opt-1"));
    assert!(is_open(&page, "fruit"));
    assert_eq!(attr(&page, "fruit-value", "value"), Some(""));
    assert_eq!(page.focused(), Some("fruit"));

    page.tick();
    page.dispatch(Event::click("fruit-listbox-opt-1"));
    assert!(!is_open(&page, "fruit"));
    assert_eq!(attr(&page, "fruit", "value"), Some("Banana"));
    assert_eq!(attr(&page, "fruit-value", "value"), Some("b"));
    assert_eq!(page.focused(), Some("fruit"));
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn test_placeholder_click_then_outside_click_closes() {
    let mut page = page();
    page.focus("fruit");
    type_text(&mut page, "xyz");
    page.tick();
    assert_eq!(page.listener_count(), 1);

    page.dispatch(Event::click("fruit-listbox-no-matches"));
    assert!(is_open(&page, "fruit"));
    assert_eq!(page.focused(), Some("fruit"));

    page.dispatch(Event::click("outside"));
    assert!(!is_open(&page, "fruit"));
    assert_eq!(page.focused(), Some("outside"));
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn test_listbox_click_keeps_escape_working() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);
    page.tick();

    page.dispatch(Event::click("fruit-listbox"));
    assert_eq!(page.focused(), Some("fruit"));

    press(&mut page, Key::Escape);
    assert!(!is_open(&page, "fruit"));
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn test_focus_inside_dropdown_still_closes_on_blur_and_escape() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);
    page.tick();

    // Focus moved onto an option by other means
    page.focus("fruit-listbox-opt-0");
    assert!(is_open(&page, "fruit"));

    press(&mut page, Key::Escape);
    assert!(!is_open(&page, "fruit"));
    assert_eq!(page.focused(), Some("fruit"));

    press(&mut page, Key::Down);
    page.tick();
    page.focus("fruit-listbox-opt-0");
    page.focus("outside");
    assert!(!is_open(&page, "fruit"));
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn test_close_before_tick_leaves_no_listener() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);
    press(&mut page, Key::Escape);

    page.tick();
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn test_reopen_cycles_never_leak_listeners() {
    let mut page = page();
    page.focus("fruit");
    for _ in 0..5 {
        press(&mut page, Key::Down);
        page.tick();
        assert_eq!(page.listener_count(), 1);
        press(&mut page, Key::Escape);
        assert_eq!(page.listener_count(), 0);
    }
}

#[test]
fn test_rapid_reopen_binds_once() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);
    press(&mut page, Key::Escape);
    press(&mut page, Key::Down);

    // Two binds were posted; only the live session's bind is honoured
    assert_eq!(page.pending_ticks(), 2);
    page.tick();
    assert_eq!(page.listener_count(), 1);
}

// ============================================================================
// Pointer and Focus
// ============================================================================

#[test]
fn test_toggle_click_opens_and_focuses_input() {
    let mut page = page();
    page.dispatch(Event::click("fruit-toggle"));

    assert!(is_open(&page, "fruit"));
    assert_eq!(page.focused(), Some("fruit"));

    page.dispatch(Event::click("fruit-toggle"));
    assert!(!is_open(&page, "fruit"));
    assert_eq!(page.focused(), Some("fruit"));
}

#[test]
fn test_focus_leaving_widget_closes() {
    let mut page = page();
    page.focus("fruit");
    type_text(&mut page, "b");
    press(&mut page, Key::Down);
    assert_eq!(attr(&page, "fruit", "value"), Some("Banana"));

    page.dispatch(Event::click("outside"));
    assert!(!is_open(&page, "fruit"));
    assert_eq!(page.focused(), Some("outside"));
    assert_eq!(attr(&page, "fruit", "value"), Some("b"));
}

#[test]
fn test_click_on_nothing_blurs() {
    let mut page = page();
    page.focus("fruit");
    press(&mut page, Key::Down);

    page.dispatch(Event::Click { target: None });
    assert_eq!(page.focused(), None);
    assert!(!is_open(&page, "fruit"));
}

// ============================================================================
// Instances
// ============================================================================

#[test]
fn test_instances_do_not_share_state() {
    let mut page = page();
    page.focus("fruit");
    type_text(&mut page, "a");
    page.tick();

    assert!(is_open(&page, "fruit"));
    assert!(!is_open(&page, "veg"));
    assert_eq!(attr(&page, "veg-listbox", "aria-hidden"), Some("true"));

    page.focus("veg");
    assert!(!is_open(&page, "fruit"));
    type_text(&mut page, "l");
    assert_eq!(listed(&page, "veg-listbox"), vec!["Kale", "Leek"]);
    assert_eq!(listed(&page, "fruit-listbox").len(), 2);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "not found")]
fn test_focus_missing_element_is_a_bug() {
    let mut page = page();
    page.focus("nowhere");
}
