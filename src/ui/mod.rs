//! UI rendering
//!
//! Pure functions from [`App`] state to ratatui widgets. The keypad geometry
//! is computed here so the driver can hit-test mouse clicks against exactly
//! what was drawn.

mod display;
mod keypad;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
};

use crate::App;
use crate::keypad::{BUTTONS, Button, COLUMNS, rows};

const DISPLAY_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 1;
const KEYPAD_MIN_HEIGHT: u16 = 5;

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

/// Split the screen into display, keypad and status bar.
pub fn areas(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(KEYPAD_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    Areas {
        display: chunks[0],
        keypad: chunks[1],
        status: chunks[2],
    }
}

/// Rectangle of every keypad button inside `area`.
pub fn keypad_areas(area: Rect) -> Vec<(Rect, &'static Button)> {
    let row_count = u32::from(rows());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..row_count).map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    BUTTONS
        .iter()
        .filter_map(|button| {
            let row = *rows.get(usize::from(button.row))?;
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..COLUMNS).map(|_| Constraint::Ratio(1, u32::from(COLUMNS))))
                .split(row);
            let first = *columns.get(usize::from(button.column))?;
            let last = *columns.get(usize::from(button.column + button.span - 1))?;
            Some((first.union(last), button))
        })
        .collect()
}

/// The button under a screen position, if any.
pub fn button_at(screen: Rect, column: u16, row: u16) -> Option<&'static Button> {
    let position = Position::new(column, row);
    keypad_areas(areas(screen).keypad)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, button)| button)
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let areas = areas(frame.area());

    display::render(frame, app, areas.display);
    keypad::render(frame, areas.keypad);
    status::render(frame, app, areas.status);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::{Config, KeyInput};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(32, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_display_lines() {
        let mut app = App::new(&Config::default());
        for c in "1234+5678".chars() {
            app.handle_key(KeyInput::Char(c));
        }
        let screen = draw(&app);
        assert!(screen.contains("1,234 +"), "{screen}");
        assert!(screen.contains("5,678"), "{screen}");
    }

    #[test]
    fn test_renders_keypad() {
        let screen = draw(&App::new(&Config::default()));
        for label in ["AC", "DEL", "÷", "×", "7", "=", "."] {
            assert!(screen.contains(label), "missing {label}\n{screen}");
        }
    }

    #[test]
    fn test_renders_status_message() {
        let mut app = App::new(&Config::default());
        app.set_status("Copied 42");
        assert!(draw(&app).contains("Copied 42"));
    }

    #[test]
    fn test_keypad_areas_do_not_overlap() {
        let rects = keypad_areas(Rect::new(0, 0, 40, 20));
        assert_eq!(rects.len(), BUTTONS.len());
        for (i, (a, _)) in rects.iter().enumerate() {
            for (b, _) in &rects[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_button_hit_testing() {
        let screen = Rect::new(0, 0, 40, 30);
        let keypad = areas(screen).keypad;

        // Top-left corner of the keypad is AC.
        let hit = button_at(screen, keypad.x, keypad.y);
        assert_eq!(hit.map(|b| b.label), Some("AC"));

        // Bottom-right corner is =.
        let hit = button_at(screen, keypad.right() - 1, keypad.bottom() - 1);
        assert_eq!(hit.map(|b| b.label), Some("="));

        // The display is not a button.
        assert_eq!(button_at(screen, 1, 1), None);
    }

    #[test]
    fn test_click_centre_of_every_button() {
        let screen = Rect::new(0, 0, 40, 30);
        for (rect, button) in keypad_areas(areas(screen).keypad) {
            let x = rect.x + rect.width / 2;
            let y = rect.y + rect.height / 2;
            assert_eq!(button_at(screen, x, y), Some(button), "{}", button.label);
        }
        // Both halves of a wide button resolve to it.
        let keypad = areas(screen).keypad;
        let hit = button_at(screen, keypad.x + keypad.width / 4 + 5, keypad.y + 1);
        assert_eq!(hit.map(|b| b.action), Some(crate::calculator::Action::Clear));
    }
}
