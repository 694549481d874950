use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

/// One screen line with an optional highlight.
pub struct Line {
    pub text: String,
    pub reverse: bool,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reverse: false,
        }
    }

    pub fn reversed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reverse: true,
        }
    }
}

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        for (y, line) in (0u16..).zip(lines) {
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            if line.reverse {
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(&line.text),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(self.stdout, Print(&line.text))?;
            }
        }
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
