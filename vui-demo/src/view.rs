//! Text rendering of the page state.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vui::Page;
use vui::widgets::WidgetId;
use vuidom::Element;

use crate::terminal::Line;

const FIELD_WIDTH: usize = 28;

pub fn screen(page: &Page, dialog: WidgetId) -> Vec<Line> {
    let mut lines = vec![
        Line::plain("Type to filter, Up/Down to browse, Enter to choose, Esc to cancel."),
        Line::plain("Tab moves between fields. Ctrl+C quits."),
        Line::plain(""),
    ];

    let doc = page.document();
    let focused = page.focused();

    for typeahead in page.typeaheads() {
        let ids = typeahead.ids();
        let label = doc.get(&ids.label).map(Element::text_content).unwrap_or_default();
        let value = doc.get(&ids.input).map(Element::value).unwrap_or_default();
        let arrow = if typeahead.is_open() { "^" } else { "v" };

        lines.push(Line::plain(label));
        lines.push(Line::plain(format!(
            "{} [{}] {}",
            marker(focused, &ids.input),
            pad(value, FIELD_WIDTH),
            arrow
        )));

        if typeahead.is_open() {
            let items = doc.get(&ids.listbox).map(Element::child_elements).unwrap_or_default();
            for item in items {
                let text = format!("    {}", pad(&item.text_content(), FIELD_WIDTH));
                if item.get_attr("aria-selected") == Some("true") {
                    lines.push(Line::reversed(text));
                } else {
                    lines.push(Line::plain(text));
                }
            }
        }

        if let Some(hidden) = doc.get(&ids.hidden).filter(|el| !el.value().is_empty()) {
            let name = hidden.get_attr("name").unwrap_or_default();
            lines.push(Line::plain(format!("    submits {}={}", name, hidden.value())));
        }
        lines.push(Line::plain(""));
    }

    if let Some(button) = doc.query(".js-dialog-btn") {
        lines.push(Line::plain(format!("{} <{}>", marker(focused, &button.id), button.text_content())));
    }

    if let Some(dialog) = page.dialog(dialog).filter(|d| d.is_open()) {
        lines.push(Line::plain(""));
        lines.extend(dialog_box(doc.get(dialog.dialog_id()), focused));
    }

    lines
}

fn dialog_box(dialog: Option<&Element>, focused: Option<&str>) -> Vec<Line> {
    let border = format!("+{}+", "-".repeat(FIELD_WIDTH + 4));
    let mut lines = vec![Line::plain(border.clone())];
    for child in dialog.map(Element::child_elements).unwrap_or_default() {
        let text = if child.tag == "button" {
            format!("{} <{}>", marker(focused, &child.id), child.text_content())
        } else {
            format!("  {}", child.text_content())
        };
        lines.push(Line::plain(format!("| {} |", pad(&text, FIELD_WIDTH + 2))));
    }
    lines.push(Line::plain(border));
    lines
}

fn marker(focused: Option<&str>, id: &str) -> &'static str {
    if focused == Some(id) { ">" } else { " " }
}

/// Fit `text` into exactly `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{text}{}", " ".repeat(width - text.width()));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
