//! Status bar
//!
//! Shows the transient status message, or key hints when there is none.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const HINTS: &str = "Enter/= evaluate | Bksp delete | Del clear | y copy | q quit";

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status_message() {
        Some(message) => Line::from(vec![
            Span::raw(" "),
            Span::styled(message.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        None => Line::from(vec![Span::raw(" "), Span::raw(HINTS)]),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
