//! Calculator display panel.
//!
//! Two right-aligned lines: the pending operand and operator in a muted
//! colour above, the operand being typed (or the last result) in bold below.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::App;

/// Render the display panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let display = app.display();

    // A non-numeric result (Infinity, NaN) is shown in the error colour.
    let current_color = if is_numeric(&display.current) {
        Color::White
    } else {
        Color::LightRed
    };

    let lines = vec![
        Line::styled(display.previous, Style::default().fg(Color::DarkGray)),
        Line::styled(
            display.current,
            Style::default()
                .fg(current_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::bordered());

    frame.render_widget(paragraph, area);
}

fn is_numeric(text: &str) -> bool {
    !text.chars().any(char::is_alphabetic)
}
