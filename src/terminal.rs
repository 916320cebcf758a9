//! Terminal driver.
//!
//! Reads keyboard and mouse events with crossterm, feeds them to the [`App`]
//! one at a time, executes the resulting [`AppAction`]s and redraws with
//! ratatui.

use std::io::{self, Stdout, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use thiserror::Error;

use crate::calculator::copy_to_clipboard;
use crate::{App, AppAction, KeyInput, ui};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Owns the terminal for the lifetime of the UI.
///
/// Raw mode, the alternate screen and mouse capture are undone on drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalDriver {
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Run until the app asks to quit.
    pub fn run(&mut self, app: &mut App) -> Result<(), TerminalError> {
        self.render(app)?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let actions = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Ctrl-C always quits, even in raw mode.
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        vec![AppAction::Quit]
                    } else {
                        match convert_key(key.code) {
                            Some(input) => app.handle_key(input),
                            None => vec![],
                        }
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    match ui::button_at(self.screen()?, mouse.column, mouse.row) {
                        Some(button) => app.press(button),
                        None => vec![],
                    }
                }
                Event::Resize(..) => vec![AppAction::Render],
                _ => vec![],
            };

            for action in actions {
                match action {
                    AppAction::Render => self.render(app)?,
                    AppAction::Quit => {
                        tracing::info!("quitting");
                        return Ok(());
                    }
                    AppAction::CopyToClipboard(text) => {
                        match copy_to_clipboard(&text) {
                            Ok(()) => app.set_status(format!("Copied {}", text)),
                            Err(e) => {
                                tracing::warn!(error = %e, "clipboard copy failed");
                                app.set_status(e.to_string());
                            }
                        }
                    }
                }
            }
        }
    }

    fn screen(&self) -> Result<Rect, TerminalError> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    fn render(&mut self, app: &App) -> Result<(), TerminalError> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = stdout().execute(DisableMouseCapture);
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Convert a crossterm key code to a [`KeyInput`].
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Esc => Some(KeyInput::Esc),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_key() {
        assert_eq!(convert_key(KeyCode::Char('5')), Some(KeyInput::Char('5')));
        assert_eq!(convert_key(KeyCode::Backspace), Some(KeyInput::Backspace));
        assert_eq!(convert_key(KeyCode::Enter), Some(KeyInput::Enter));
        assert_eq!(convert_key(KeyCode::Tab), None);
    }
}
