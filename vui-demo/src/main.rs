mod terminal;
mod view;

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use simplelog::{Config, LevelFilter, WriteLogger};
use vui::{DialogConfig, Page, TypeaheadConfig};
use vuidom::{Document, Element, Event, Key};

use terminal::Terminal;

const COUNTRIES: &[(&str, &str)] = &[
    ("be", "Belgium"),
    ("ca", "Canada"),
    ("dk", "Denmark"),
    ("fr", "France"),
    ("de", "Germany"),
    ("ie", "Ireland"),
    ("it", "Italy"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("pt", "Portugal"),
    ("es", "Spain"),
    ("se", "Sweden"),
];

const FRUITS: &[(&str, &str)] = &[
    ("apple", "Apple"),
    ("banana", "Banana"),
    ("cherry", "Cherry"),
    ("date", "Date"),
    ("elderberry", "Elderberry"),
    ("fig", "Fig"),
];

fn main() -> io::Result<()> {
    let log_file = File::create("vui-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let mut page = Page::new(document());
    let typeaheads = TypeaheadConfig::default().max_results(5);
    if let Err(e) = page.mount_typeaheads(&typeaheads) {
        eprintln!("Error: {}", e);
        return Ok(());
    }
    let help = match page.mount_dialog(DialogConfig::default()) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };
    page.focus("country");

    let mut term = Terminal::new()?;
    loop {
        term.draw(&view::screen(&page, help))?;

        for raw in term.poll(Duration::from_millis(50))? {
            if is_quit(&raw) {
                return Ok(());
            }
            if let Some(event) = Event::from_crossterm(&raw, page.focused()) {
                let event = activate(&page, event);
                page.dispatch(event);
            }
        }

        // Deferred work runs after the batch has been dispatched
        page.tick();
    }
}

fn document() -> Document {
    Document::new(Element::div().id("page").children([
        source("country", "Country", COUNTRIES),
        source("fruit", "Favourite fruit", FRUITS),
        Element::button().id("help-btn").class("js-dialog-btn").text("Help"),
        Element::div().id("help").class("js-dialog").children([
            Element::new("p").text("Letters and digits filter the list."),
            Element::new("p").text("Up and Down preview an option."),
            Element::new("p").text("Enter commits, Esc restores your text."),
            Element::button().id("help-close").class("js-dialog-close-btn").text("Close"),
        ]),
    ]))
}

fn source(id: &str, label: &str, options: &[(&str, &str)]) -> Element {
    Element::div().class("js-typeahead").children([
        Element::label().text(label),
        Element::select()
            .id(id)
            .attr("name", id)
            .children(options.iter().map(|(value, label)| Element::option(*value, *label))),
    ])
}

fn is_quit(raw: &CrosstermEvent) -> bool {
    matches!(
        raw,
        CrosstermEvent::Key(key)
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Enter or Space on a focused button acts as a click.
fn activate(page: &Page, event: Event) -> Event {
    if let Event::Key {
        target: Some(target),
        key: Key::Enter | Key::Char(' '),
        ..
    } = &event
    {
        let is_button = page.document().get(target).is_some_and(|el| el.tag == "button");
        if is_button {
            return Event::click(target.clone());
        }
    }
    event
}
