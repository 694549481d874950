use vui::{InitError, ModalConfig, Page};
use vuidom::{Document, Element, Event, Key};

fn document() -> Document {
    Document::new(Element::div().id("page").children([
        Element::button().id("open").class("js-modal-btn"),
        Element::div().id("overlay").class("js-modal-overlay"),
        Element::div().id("modal").class("js-modal").children([
            Element::new("p").text("Are you sure?"),
            Element::button().id("close").class("js-modal-close-btn"),
        ]),
    ]))
}

fn has_class(page: &Page, id: &str, class: &str) -> bool {
    page.document().get(id).is_some_and(|el| el.has_class(class))
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_hides_modal_and_overlay() {
    let mut page = Page::new(document());
    page.mount_modal(ModalConfig::default()).unwrap();

    assert!(has_class(&page, "modal", "is-hidden"));
    assert!(has_class(&page, "overlay", "is-hidden"));
    assert_eq!(page.document().root().get_attr("data-ui-modal"), Some("is-initialised"));
}

#[test]
fn test_mount_requires_overlay() {
    let mut page = Page::new(document());
    let err = page
        .mount_modal(ModalConfig::default().overlay(".js-missing-overlay"))
        .unwrap_err();
    assert!(matches!(err, InitError::TargetMissing { .. }));
    assert!(!has_class(&page, "modal", "is-hidden"));
}

// ============================================================================
// Show and Hide
// ============================================================================

#[test]
fn test_open_and_close_buttons() {
    let mut page = Page::new(document());
    page.mount_modal(ModalConfig::default()).unwrap();

    page.dispatch(Event::click("open"));
    assert!(!has_class(&page, "modal", "is-hidden"));
    assert!(!has_class(&page, "overlay", "is-hidden"));
    assert_eq!(page.document().root().get_attr("data-current-modal"), Some(".js-modal"));

    page.dispatch(Event::click("close"));
    assert!(has_class(&page, "modal", "is-hidden"));
    assert!(has_class(&page, "overlay", "is-hidden"));
    assert!(page.document().root().get_attr("data-current-modal").is_none());
}

#[test]
fn test_overlay_click_and_escape_hide() {
    let mut page = Page::new(document());
    let id = page.mount_modal(ModalConfig::default()).unwrap();

    page.dispatch(Event::click("open"));
    page.dispatch(Event::click("overlay"));
    assert!(!page.modal(id).unwrap().is_open());

    assert!(page.show_modal(id));
    page.dispatch(Event::Key {
        target: None,
        key: Key::Escape,
        modifiers: Default::default(),
    });
    assert!(!page.modal(id).unwrap().is_open());
    assert!(has_class(&page, "modal", "is-hidden"));
}

#[test]
fn test_without_overlay_keeps_it_hidden() {
    let mut page = Page::new(document());
    let id = page.mount_modal(ModalConfig::default().without_overlay()).unwrap();

    assert!(page.show_modal(id));
    assert!(!has_class(&page, "modal", "is-hidden"));
    assert!(has_class(&page, "overlay", "is-hidden"));
    assert!(page.hide_modal(id));
}
