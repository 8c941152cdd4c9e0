//! Terminal handling and the session loop for fuzzy-filer.
//!
//! The session logic only talks to the [TerminalSession] trait. [CrosstermSession] is the real
//! implementation: raw mode and the alternate screen on stderr, drawn through ratatui, so stdout
//! stays free for the selected path.
//!
//! [run] drives a [Session] to completion: render, read one input unit, dispatch, re-render.

use crate::app::keymap::{ARROW_DOWN, ARROW_UP, BACKSPACE, ENTER, ESC, TAB, control_code};
use crate::app::{Session, Step};
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;

use std::io::{self, Stderr};
use std::path::PathBuf;

/// One unit read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A single code point.
    Unit(char),
    /// The viewport changed and the frame must be drawn again.
    Redraw,
}

/// Capability interface over the terminal device.
pub trait TerminalSession {
    fn enter_raw_mode(&mut self) -> io::Result<()>;

    /// Restores the settings saved by [TerminalSession::enter_raw_mode]. Must be idempotent.
    fn restore_mode(&mut self) -> io::Result<()>;

    /// Blocks until the next input. `None` means the input source is exhausted.
    fn read_input(&mut self) -> io::Result<Option<Input>>;

    /// Replaces the whole screen with `frame`.
    fn write_frame(&mut self, frame: Text<'static>) -> io::Result<()>;

    /// Current (width, height) in cells.
    fn viewport_size(&self) -> io::Result<(u16, u16)>;
}

/// Crossterm backed terminal drawing on stderr.
///
/// Dropping it restores the terminal, so every exit path out of [run_terminal] (including
/// errors) leaves raw mode and the alternate screen.
pub struct CrosstermSession {
    terminal: Option<Terminal<CrosstermBackend<Stderr>>>,
}

impl CrosstermSession {
    pub fn new() -> Self {
        Self { terminal: None }
    }
}

impl Default for CrosstermSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession for CrosstermSession {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen, Hide)?;
        self.terminal = Some(Terminal::new(CrosstermBackend::new(stderr))?);
        Ok(())
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        let Some(mut terminal) = self.terminal.take() else {
            return Ok(());
        };
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
        Ok(())
    }

    fn read_input(&mut self) -> io::Result<Option<Input>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(unit) = key_to_unit(key) {
                        return Ok(Some(Input::Unit(unit)));
                    }
                }
                Event::Resize(_, _) => return Ok(Some(Input::Redraw)),
                _ => {}
            }
        }
    }

    fn write_frame(&mut self, frame: Text<'static>) -> io::Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Err(io::Error::other("terminal is not in raw mode"));
        };
        terminal.draw(|f| f.render_widget(Paragraph::new(frame), f.area()))?;
        Ok(())
    }

    fn viewport_size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

impl Drop for CrosstermSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore_mode() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

/// Translates a key event into the code point a raw-mode terminal would send for it.
pub fn key_to_unit(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => control_code(c),
        KeyCode::Char(c) => Some(c),
        KeyCode::Enter => Some(ENTER),
        KeyCode::Backspace => Some(BACKSPACE),
        KeyCode::Esc => Some(ESC),
        KeyCode::Tab => Some(TAB),
        KeyCode::Up => Some(ARROW_UP),
        KeyCode::Down => Some(ARROW_DOWN),
        _ => None,
    }
}

/// Runs `session` on the real terminal and returns the selected path, if any.
pub fn run_terminal(session: &mut Session<'_>) -> io::Result<Option<PathBuf>> {
    let mut term = CrosstermSession::new();
    run(&mut term, session)
}

/// Drives `session` until quit, selection or end of input.
///
/// The terminal is restored before returning, also when the loop failed.
pub fn run<T: TerminalSession>(
    term: &mut T,
    session: &mut Session<'_>,
) -> io::Result<Option<PathBuf>> {
    term.enter_raw_mode()?;
    let result = event_loop(term, session);
    let restored = term.restore_mode();

    let selected = result?;
    restored?;
    Ok(selected)
}

fn event_loop<T: TerminalSession>(
    term: &mut T,
    session: &mut Session<'_>,
) -> io::Result<Option<PathBuf>> {
    draw(term, session)?;

    while let Some(input) = term.read_input()? {
        if let Input::Unit(unit) = input {
            match session.handle_input(unit) {
                Step::Continue => {}
                Step::Quit => return Ok(None),
                Step::Selected(path) => return Ok(Some(path)),
            }
        }
        draw(term, session)?;
    }

    tracing::debug!("input exhausted");
    Ok(None)
}

fn draw<T: TerminalSession>(term: &mut T, session: &mut Session<'_>) -> io::Result<()> {
    let (width, height) = term.viewport_size()?;
    session.set_viewport(width, height);
    term.write_frame(ui::render(session))
}
