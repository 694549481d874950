use vui::widgets::typeahead::{extract, OptionSet, TypeaheadOption};
use vuidom::Element;

fn wrapper(select: Element) -> Element {
    Element::div()
        .id("wrap")
        .class("js-typeahead")
        .child(Element::label().id("lbl").text("  Fruit "))
        .child(select)
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_options_sorted_by_label() {
    let set = OptionSet::new([
        TypeaheadOption::new("d", "Date"),
        TypeaheadOption::new("a", "Apple"),
        TypeaheadOption::new("c", "Cherry"),
        TypeaheadOption::new("b", "Banana"),
    ]);
    let labels: Vec<_> = set.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Apple", "Banana", "Cherry", "Date"]);
}

#[test]
fn test_sort_is_non_decreasing_with_duplicates() {
    let set: OptionSet = ["pear", "Pear", "apple", "pear", "Zucchini", "10", "2"]
        .into_iter()
        .enumerate()
        .map(|(i, label)| TypeaheadOption::new(i.to_string(), label))
        .collect();

    for pair in set.as_slice().windows(2) {
        assert!(pair[0].label <= pair[1].label, "{:?} > {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_equal_labels_keep_source_order() {
    let set = OptionSet::new([
        TypeaheadOption::new("first", "Same"),
        TypeaheadOption::new("x", "Another"),
        TypeaheadOption::new("second", "Same"),
    ]);
    let values: Vec<_> = set.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["x", "first", "second"]);
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_extract_reads_select() {
    let source = extract(&wrapper(
        Element::select()
            .id("fruit")
            .attr("name", "fruit_choice")
            .children([
                Element::option("c", "Cherry"),
                Element::option("a", "Apple"),
            ]),
    ));

    assert_eq!(source.id, "fruit");
    assert_eq!(source.name, "fruit_choice");
    assert_eq!(source.label, "Fruit");
    assert_eq!(source.options.get(0), Some(&TypeaheadOption::new("a", "Apple")));
    assert_eq!(source.options.len(), 2);
}

#[test]
fn test_extract_value_falls_back_to_text() {
    let source = extract(&wrapper(
        Element::select()
            .id("fruit")
            .child(Element::new("option").text("Kiwi")),
    ));
    assert_eq!(source.options.get(0), Some(&TypeaheadOption::new("Kiwi", "Kiwi")));
    // No name attribute: the select id is used
    assert_eq!(source.name, "fruit");
}

#[test]
fn test_extract_without_select_is_empty() {
    let source = extract(&Element::div().id("wrap").child(Element::label().text("Fruit")));
    assert!(source.options.is_empty());
    assert_eq!(source.id, "wrap");
}
